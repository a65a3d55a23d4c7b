pub mod app;
pub mod config;
pub mod edge_table;
pub mod enrichment;
pub mod pipeline;
mod railaway_error;
pub mod recommend;
pub mod util;

pub use railaway_error::RailawayError;
