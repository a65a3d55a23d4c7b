use std::collections::HashMap;
use std::io::Read;

use itertools::Itertools;

use crate::schedule::{
    schedule_error::ScheduleError, Stop, StopIdNamespace, StopRecord, StopTimeRecord, TripStop,
};

/// the two schedule tables after namespace filtering and id normalization.
pub struct Schedule {
    /// stops by canonical stop id
    pub stops: HashMap<String, Stop>,
    /// trip stop visits, in file order
    pub trip_stops: Vec<TripStop>,
}

/// reads both schedule tables. fails before reading any rows if either table
/// lacks a required column.
///
/// # Arguments
///
/// * `stops` - source of a GTFS `stops.txt` table
/// * `stop_times` - source of a GTFS `stop_times.txt` table
/// * `namespace` - stop ids to keep and how to canonicalize them
pub fn load_schedule<S, T>(
    stops: S,
    stop_times: T,
    namespace: &StopIdNamespace,
) -> Result<Schedule, ScheduleError>
where
    S: Read,
    T: Read,
{
    let mut stops_reader = csv_reader(stops);
    let mut stop_times_reader = csv_reader(stop_times);
    require_columns(&mut stops_reader, "stops", &StopRecord::REQUIRED_COLUMNS)?;
    require_columns(
        &mut stop_times_reader,
        "stop_times",
        &StopTimeRecord::REQUIRED_COLUMNS,
    )?;
    let stops = read_stops(stops_reader, namespace)?;
    let trip_stops = read_trip_stops(stop_times_reader, namespace)?;
    log::debug!(
        "loaded {} stops and {} trip stops in namespace '{}'",
        stops.len(),
        trip_stops.len(),
        namespace.prefix
    );
    Ok(Schedule { stops, trip_stops })
}

/// reads the stop times table, keeping only visits to stops in the namespace.
pub fn load_trip_stops<R: Read>(
    source: R,
    namespace: &StopIdNamespace,
) -> Result<Vec<TripStop>, ScheduleError> {
    let mut reader = csv_reader(source);
    require_columns(&mut reader, "stop_times", &StopTimeRecord::REQUIRED_COLUMNS)?;
    read_trip_stops(reader, namespace)
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn csv_error(context: &str, error: csv::Error) -> ScheduleError {
    ScheduleError::CsvReadError(String::from(context), error)
}

fn require_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    source_name: &str,
    required: &[&str],
) -> Result<(), ScheduleError> {
    let headers = reader
        .headers()
        .map_err(|e| csv_error(&format!("{source_name} header"), e))?;
    let missing = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| String::from(*col))
        .collect_vec();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ScheduleError::MissingColumns {
            source_name: String::from(source_name),
            columns: missing,
        })
    }
}

fn read_stops<R: Read>(
    reader: csv::Reader<R>,
    namespace: &StopIdNamespace,
) -> Result<HashMap<String, Stop>, ScheduleError> {
    let mut stops: HashMap<String, Stop> = HashMap::new();
    let mut dropped = 0;
    for row in reader.into_deserialize::<StopRecord>() {
        let record = row.map_err(|e| csv_error("stops row", e))?;
        match record.into_stop(namespace) {
            Some(stop) => {
                stops.entry(stop.stop_id.clone()).or_insert(stop);
            }
            None => dropped += 1,
        }
    }
    log::debug!("dropped {dropped} stop rows outside namespace or without coordinates");
    Ok(stops)
}

fn read_trip_stops<R: Read>(
    reader: csv::Reader<R>,
    namespace: &StopIdNamespace,
) -> Result<Vec<TripStop>, ScheduleError> {
    let mut trip_stops = vec![];
    for row in reader.into_deserialize::<StopTimeRecord>() {
        let record = row.map_err(|e| csv_error("stop_times row", e))?;
        if let Some(trip_stop) = record.into_trip_stop(namespace)? {
            trip_stops.push(trip_stop);
        }
    }
    Ok(trip_stops)
}
