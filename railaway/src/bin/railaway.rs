//! builds the railaway edge table from a GTFS schedule and OpenStreetMap
//! points of interest, and answers recommendation queries against it.
use clap::Parser;
use railaway::app::RailawayApp;

fn main() {
    env_logger::init();
    let args = RailawayApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("railaway failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
