use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::schedule::OdPair;

/// an [`OdPair`] with a single representative travel time in minutes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AggregatedEdge {
    pub od: OdPair,
    pub travel_time: u32,
}

/// the integer average (floor of the mean) of a list of samples, or None
/// when there are no samples.
pub fn average_travel_time(samples: &[u32]) -> Option<u32> {
    if samples.is_empty() {
        return None;
    }
    let sum: u64 = samples.iter().map(|s| *s as u64).sum();
    let mean = sum / samples.len() as u64;
    u32::try_from(mean).ok()
}

/// reduces each edge's samples to its average travel time. edges without
/// samples are dropped. the result is sorted by origin, then destination.
pub fn aggregate_travel_times(samples: &HashMap<OdPair, Vec<u32>>) -> Vec<AggregatedEdge> {
    let result = samples
        .iter()
        .filter_map(|(od, times)| {
            average_travel_time(times).map(|travel_time| AggregatedEdge {
                od: od.clone(),
                travel_time,
            })
        })
        .sorted_by(|a, b| a.od.cmp(&b.od))
        .collect_vec();
    let dropped = samples.len() - result.len();
    if dropped > 0 {
        log::warn!("dropped {dropped} edges without travel time samples");
    }
    result
}
