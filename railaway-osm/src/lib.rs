pub mod poi;
