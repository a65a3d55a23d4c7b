mod enriched_edge;
mod feature_matcher;

pub use enriched_edge::EnrichedEdge;
pub use feature_matcher::{DestinationMatches, FeatureMatcher};

use std::{
    collections::{BTreeSet, HashMap},
    sync::{Arc, Mutex},
};

use geo::Point;
use kdam::{tqdm, BarExt};
use railaway_gtfs::schedule::{AggregatedEdge, Stop};
use rayon::prelude::*;

/// the enriched edges along with the number of edges that could not be
/// enriched because an endpoint is missing from the stop lookup.
pub struct Enrichment {
    pub edges: Vec<EnrichedEdge>,
    pub n_skipped: usize,
}

/// attaches the points of interest around each destination stop to the
/// aggregated edges.
///
/// matches are computed once per distinct destination and shared by all
/// edges ending there. edges referencing a stop id that is not in `stops`
/// are skipped and counted.
///
/// # Arguments
///
/// * `edges` - aggregated edges in output order
/// * `stops` - stop lookup by canonical stop id
/// * `matcher` - spatial lookup of the points of interest
///
/// # Returns
///
/// the enriched edges in the order of `edges`
pub fn enrich_edges(
    edges: &[AggregatedEdge],
    stops: &HashMap<String, Stop>,
    matcher: &FeatureMatcher,
) -> Enrichment {
    let destinations: Vec<&Stop> = edges
        .iter()
        .map(|e| e.od.destination.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter_map(|stop_id| stops.get(stop_id))
        .collect();

    let bar = Arc::new(Mutex::new(tqdm!(
        total = destinations.len(),
        desc = "match points of interest"
    )));
    let matches: HashMap<&str, Arc<DestinationMatches>> = destinations
        .into_par_iter()
        .map(|stop| {
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            let point = Point::new(stop.stop_lon, stop.stop_lat);
            (stop.stop_id.as_str(), Arc::new(matcher.match_point(&point)))
        })
        .collect();
    eprintln!();

    let mut n_skipped = 0;
    let mut result = Vec::with_capacity(edges.len());
    for edge in edges.iter() {
        let from_stop = stops.get(&edge.od.origin);
        let to_stop = stops.get(&edge.od.destination);
        let dst_matches = matches.get(edge.od.destination.as_str());
        match (from_stop, to_stop, dst_matches) {
            (Some(from_stop), Some(to_stop), Some(dst_matches)) => {
                result.push(EnrichedEdge {
                    from_stop: from_stop.clone(),
                    to_stop: to_stop.clone(),
                    travel_time: edge.travel_time,
                    matches: dst_matches.clone(),
                });
            }
            _ => {
                log::debug!(
                    "skipping edge {} -> {} with an unknown stop",
                    edge.od.origin,
                    edge.od.destination
                );
                n_skipped += 1;
            }
        }
    }
    if n_skipped > 0 {
        log::warn!("skipped {n_skipped} edges referencing unknown stops");
    }
    Enrichment {
        edges: result,
        n_skipped,
    }
}
