pub mod edge_table_ops;
mod edge_table_row;

pub use edge_table_ops::{
    read_edge_table, read_edge_table_file, write_edge_table, write_edge_table_file,
};
pub use edge_table_row::{EdgeTableRow, EDGE_TABLE_COLUMNS};
