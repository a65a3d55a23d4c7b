use std::sync::Arc;

use railaway_gtfs::schedule::Stop;

use super::DestinationMatches;

/// a stop pair with its average travel time and the points of interest
/// around the destination stop. edges ending at the same stop share the
/// same matches.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEdge {
    pub from_stop: Stop,
    pub to_stop: Stop,
    /// minutes
    pub travel_time: u32,
    pub matches: Arc<DestinationMatches>,
}
