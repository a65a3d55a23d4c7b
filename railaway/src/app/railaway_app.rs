use super::RailawayOperation;
use clap::Parser;

/// command line tool for building a table of rail trips to leisure
/// destinations and querying it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RailawayApp {
    #[command(subcommand)]
    pub op: RailawayOperation,
}
