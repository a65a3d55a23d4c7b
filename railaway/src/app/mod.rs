mod operation;
mod railaway_app;

pub use operation::RailawayOperation;
pub use railaway_app::RailawayApp;
