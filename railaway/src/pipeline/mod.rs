mod pipeline_summary;

pub use pipeline_summary::PipelineSummary;

use std::{io::Read, path::Path};

use itertools::Itertools;
use railaway_gtfs::schedule::{
    aggregate_travel_times, build_reachability, group_trips, schedule_ops,
};
use railaway_osm::poi::import_ops;

use crate::{
    config::RailawayConfiguration,
    edge_table::{write_edge_table_file, EdgeTableRow},
    enrichment::{enrich_edges, FeatureMatcher},
    util::fs::open_reader,
    RailawayError,
};

/// builds the edge table rows from a schedule and a set of points of
/// interest.
///
/// # Arguments
///
/// * `stops` - GTFS `stops.txt` contents
/// * `stop_times` - GTFS `stop_times.txt` contents
/// * `features` - GeoJSON points of interest
/// * `conf` - build parameters
///
/// # Returns
///
/// the table rows, sorted by origin then destination stop id, with the run's
/// counts
pub fn build_edge_table<S, T, F>(
    stops: S,
    stop_times: T,
    features: F,
    conf: &RailawayConfiguration,
) -> Result<(Vec<EdgeTableRow>, PipelineSummary), RailawayError>
where
    S: Read,
    T: Read,
    F: Read,
{
    conf.validate()?;
    let namespace = conf.namespace();

    log::info!("reading schedule");
    let schedule = schedule_ops::load_schedule(stops, stop_times, &namespace)?;
    let trips = group_trips(&schedule.trip_stops);
    log::info!(
        "found {} stops and {} trips in stop id namespace '{}'",
        schedule.stops.len(),
        trips.len(),
        namespace.prefix
    );

    log::info!("building reachability over trips");
    let graph = build_reachability(&trips, conf.max_edges, conf.batch_size);
    let n_edges = graph.n_edges();
    let aggregated = aggregate_travel_times(graph.samples());

    log::info!("reading points of interest");
    let poi = import_ops::read_features(features, conf.excluded_property.as_deref())?;
    let matcher = FeatureMatcher::new(
        &poi,
        &conf.category_rules,
        conf.match_radius(),
        conf.buffer_resolution,
    );
    log::info!(
        "indexed {} of {} points of interest",
        matcher.n_indexed(),
        poi.len()
    );

    let enrichment = enrich_edges(&aggregated, &schedule.stops, &matcher);
    let rows = enrichment.edges.iter().map(EdgeTableRow::from).collect_vec();

    let summary = PipelineSummary {
        stops: schedule.stops.len(),
        trip_stops: schedule.trip_stops.len(),
        trips: trips.len(),
        edges: n_edges,
        max_edges: conf.max_edges,
        features_read: poi.len(),
        features_indexed: matcher.n_indexed(),
        edges_written: rows.len(),
        edges_skipped: enrichment.n_skipped,
    };
    Ok((rows, summary))
}

/// runs [`build_edge_table`] over files and writes the table to `output`.
/// inputs ending in `.gz` are decompressed, and an output ending in `.gz` is
/// compressed.
pub fn run_pipeline(
    stops_file: &Path,
    stop_times_file: &Path,
    features_file: &Path,
    output_file: &Path,
    conf: &RailawayConfiguration,
    overwrite: bool,
) -> Result<PipelineSummary, RailawayError> {
    if output_file.exists() && !overwrite {
        return Err(RailawayError::OutputExists(
            output_file.to_string_lossy().to_string(),
        ));
    }
    let (rows, summary) = build_edge_table(
        open_reader(stops_file)?,
        open_reader(stop_times_file)?,
        open_reader(features_file)?,
        conf,
    )?;
    write_edge_table_file(&rows, output_file, overwrite)?;
    log::info!("{summary}");
    if summary.is_capped() {
        log::info!(
            "edge cap of {} reached, the table covers only part of the schedule",
            summary.max_edges
        );
    }
    Ok(summary)
}
