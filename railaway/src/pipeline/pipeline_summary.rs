use std::fmt::Display;

use serde::Serialize;

/// counts collected over an edge table build
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub stops: usize,
    pub trip_stops: usize,
    pub trips: usize,
    pub edges: usize,
    pub max_edges: usize,
    pub features_read: usize,
    pub features_indexed: usize,
    pub edges_written: usize,
    pub edges_skipped: usize,
}

impl PipelineSummary {
    /// true if reachability stopped at the edge cap
    pub fn is_capped(&self) -> bool {
        self.edges >= self.max_edges
    }
}

impl Display for PipelineSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stops: {}, trip stops: {}, trips: {}, edges: {}/{}, features: {} read, {} indexed, edges written: {}, skipped: {}",
            self.stops,
            self.trip_stops,
            self.trips,
            self.edges,
            self.max_edges,
            self.features_read,
            self.features_indexed,
            self.edges_written,
            self.edges_skipped
        )
    }
}
