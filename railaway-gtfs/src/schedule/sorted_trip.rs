use std::collections::{BTreeMap, BinaryHeap};

use crate::schedule::TripStop;

/// the stop visits of one trip ordered by stop_sequence.
#[derive(Debug, Clone)]
pub struct SortedTrip {
    pub trip_id: String,
    pub stops: Vec<TripStop>,
}

impl SortedTrip {
    pub fn new(trip_id: String, stops: Vec<TripStop>) -> SortedTrip {
        let stops = get_ordered_stops(stops);
        SortedTrip { trip_id, stops }
    }
}

/// groups trip stop visits by trip id. trips are returned in ascending
/// trip id order so that downstream processing is reproducible.
pub fn group_trips(trip_stops: &[TripStop]) -> Vec<SortedTrip> {
    let mut groups: BTreeMap<&str, Vec<TripStop>> = BTreeMap::new();
    for trip_stop in trip_stops.iter() {
        groups
            .entry(trip_stop.trip_id.as_str())
            .or_default()
            .push(trip_stop.clone());
    }
    groups
        .into_iter()
        .map(|(trip_id, stops)| SortedTrip::new(String::from(trip_id), stops))
        .collect()
}

/// Returns an ordered (ascending) vector of [TripStop]. Internally uses [BinaryHeap] to sort
/// on (stop_sequence, file position) so that duplicate sequence values keep file order.
fn get_ordered_stops(stops: Vec<TripStop>) -> Vec<TripStop> {
    let stop_queue_order: BinaryHeap<(u32, usize)> = stops
        .iter()
        .enumerate()
        .map(|(i, st)| (st.stop_sequence, i))
        .collect();

    let mut slots: Vec<Option<TripStop>> = stops.into_iter().map(Some).collect();
    stop_queue_order
        .into_sorted_vec() // Ascending according to documentation
        .iter()
        .filter_map(|(_, idx)| slots[*idx].take())
        .collect()
}
