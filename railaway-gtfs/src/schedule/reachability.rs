use std::collections::HashMap;

use kdam::tqdm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schedule::SortedTrip;

/// an ordered pair of canonical stop ids where the destination is visited
/// after the origin on the same trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OdPair {
    pub origin: String,
    pub destination: String,
}

impl OdPair {
    pub fn new(origin: &str, destination: &str) -> OdPair {
        OdPair {
            origin: String::from(origin),
            destination: String::from(destination),
        }
    }
}

/// one observed travel time in minutes for an [`OdPair`], contributed by one trip.
pub type TravelTimeSample = (OdPair, u32);

/// travel time samples collected per [`OdPair`] under a cap on the number of
/// distinct pairs.
#[derive(Debug, Clone)]
pub struct ReachabilityGraph {
    samples: HashMap<OdPair, Vec<u32>>,
    max_edges: usize,
}

impl ReachabilityGraph {
    pub fn new(max_edges: usize) -> ReachabilityGraph {
        ReachabilityGraph {
            samples: HashMap::new(),
            max_edges,
        }
    }

    pub fn n_edges(&self) -> usize {
        self.samples.len()
    }

    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// true once the number of distinct edges has reached the cap.
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.max_edges
    }

    pub fn samples(&self) -> &HashMap<OdPair, Vec<u32>> {
        &self.samples
    }

    /// folds the samples of one trip into the graph in order. stops as soon as
    /// the cap is reached, and returns false in that case.
    pub fn merge_trip(&mut self, trip_samples: Vec<TravelTimeSample>) -> bool {
        for (od, minutes) in trip_samples.into_iter() {
            if self.is_full() {
                return false;
            }
            self.samples.entry(od).or_default().push(minutes);
        }
        !self.is_full()
    }
}

/// derives the travel time samples of a single trip: one per stop pair (i, j)
/// with i before j, skipping pairs with an unknown arrival time or a negative
/// duration. samples are ordered by i, then j.
pub fn trip_samples(trip: &SortedTrip) -> Vec<TravelTimeSample> {
    let mut result = vec![];
    for (i, src) in trip.stops.iter().enumerate() {
        let src_arrival = match src.arrival_minutes {
            Some(t) => t,
            None => continue,
        };
        for dst in trip.stops.iter().skip(i + 1) {
            let dst_arrival = match dst.arrival_minutes {
                Some(t) => t,
                None => continue,
            };
            // clock rollover or malformed sequence
            if dst_arrival < src_arrival {
                continue;
            }
            result.push((
                OdPair::new(&src.stop_id, &dst.stop_id),
                dst_arrival - src_arrival,
            ));
        }
    }
    result
}

/// builds the [`ReachabilityGraph`] for a list of trips.
///
/// trips are mapped to their samples in parallel, `batch_size` trips at a time,
/// and each batch is folded into the graph in trip order. the result is the
/// same as a sequential pass: once `max_edges` distinct pairs are present the
/// remainder of the current trip and all later trips are ignored.
///
/// # Arguments
///
/// * `trips` - trips with their stops in sequence order
/// * `max_edges` - cap on the number of distinct [`OdPair`]s
/// * `batch_size` - number of trips mapped in parallel before folding
pub fn build_reachability(
    trips: &[SortedTrip],
    max_edges: usize,
    batch_size: usize,
) -> ReachabilityGraph {
    let mut graph = ReachabilityGraph::new(max_edges);
    if graph.is_full() {
        return graph;
    }
    let batches = trips.chunks(batch_size.max(1));
    let n_batches = batches.len();
    let iter = tqdm!(batches, total = n_batches, desc = "trip reachability");
    'batches: for batch in iter {
        let batch_samples: Vec<Vec<TravelTimeSample>> =
            batch.par_iter().map(trip_samples).collect();
        for samples in batch_samples.into_iter() {
            if !graph.merge_trip(samples) {
                break 'batches;
            }
        }
    }
    eprintln!();
    if graph.is_full() {
        log::info!(
            "reachability stopped early after reaching the cap of {} edges",
            graph.max_edges()
        );
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{group_trips, TripStop};

    fn visit(trip_id: &str, stop_id: &str, seq: u32, arrival: Option<u32>) -> TripStop {
        TripStop {
            trip_id: String::from(trip_id),
            stop_id: String::from(stop_id),
            stop_sequence: seq,
            arrival_minutes: arrival,
        }
    }

    fn linear_trip(trip_id: &str, n: u32) -> Vec<TripStop> {
        (0..n)
            .map(|i| visit(trip_id, &format!("85{i}"), i, Some(480 + i * 3)))
            .collect()
    }

    #[test]
    fn test_trip_samples_is_n_choose_2() {
        let trips = group_trips(&linear_trip("t", 6));
        let samples = trip_samples(&trips[0]);
        assert_eq!(samples.len(), 15);
        assert_eq!(samples[0], (OdPair::new("850", "851"), 3));
        assert_eq!(samples[14], (OdPair::new("854", "855"), 3));
    }

    #[test]
    fn test_unknown_arrivals_are_skipped() {
        let mut visits = linear_trip("t", 5);
        visits[2].arrival_minutes = None;
        let trips = group_trips(&visits);
        let samples = trip_samples(&trips[0]);
        // C(4, 2) over the stops with a known arrival
        assert_eq!(samples.len(), 6);
        assert!(samples
            .iter()
            .all(|(od, _)| od.origin != "852" && od.destination != "852"));
    }

    #[test]
    fn test_negative_durations_are_skipped() {
        let visits = vec![
            visit("t", "85a", 1, Some(480)),
            visit("t", "85b", 2, Some(478)),
            visit("t", "85c", 3, Some(490)),
        ];
        let trips = group_trips(&visits);
        let samples = trip_samples(&trips[0]);
        assert_eq!(
            samples,
            vec![
                (OdPair::new("85a", "85c"), 10),
                (OdPair::new("85b", "85c"), 12),
            ]
        );
    }

    #[test]
    fn test_samples_accumulate_across_trips() {
        let visits = vec![
            visit("t1", "85a", 1, Some(480)),
            visit("t1", "85b", 2, Some(484)),
            visit("t2", "85a", 1, Some(540)),
            visit("t2", "85b", 2, Some(546)),
            visit("t3", "85a", 1, Some(600)),
            visit("t3", "85b", 2, Some(605)),
        ];
        let trips = group_trips(&visits);
        let graph = build_reachability(&trips, 100, 2);
        assert_eq!(graph.n_edges(), 1);
        let samples = graph.samples().get(&OdPair::new("85a", "85b")).unwrap();
        assert_eq!(samples, &vec![4, 6, 5]);
    }

    #[test]
    fn test_cap_is_respected_exactly() {
        let mut visits = linear_trip("t1", 5);
        visits.extend(linear_trip("t2", 8));
        let trips = group_trips(&visits);
        for cap in [0, 1, 7, 10, 11, 28] {
            let graph = build_reachability(&trips, cap, 1);
            assert_eq!(graph.n_edges(), cap.min(28), "cap {cap}");
        }
        let uncapped = build_reachability(&trips, 1000, 1);
        assert_eq!(uncapped.n_edges(), 28);
        assert!(!uncapped.is_full());
    }

    #[test]
    fn test_cap_stops_sample_accumulation() {
        // t1 and t2 share the pair (850, 851); t2 is processed after the cap is hit
        let mut visits = linear_trip("t1", 3);
        visits.extend(linear_trip("t2", 3));
        let trips = group_trips(&visits);
        let graph = build_reachability(&trips, 3, 4);
        assert!(graph.is_full());
        let samples = graph.samples().get(&OdPair::new("850", "851")).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_batching_is_deterministic() {
        let mut visits = vec![];
        for t in 0..20 {
            let trip_id = format!("trip{t:02}");
            visits.extend(linear_trip(&trip_id, 4 + (t % 5)));
            visits.push(visit(&trip_id, &format!("85x{t}"), 99, Some(600)));
        }
        let trips = group_trips(&visits);
        let reference = build_reachability(&trips, 40, 1);
        for batch_size in [2, 3, 7, 64] {
            let graph = build_reachability(&trips, 40, batch_size);
            assert_eq!(
                graph.samples(),
                reference.samples(),
                "batch size {batch_size}"
            );
        }
    }
}
