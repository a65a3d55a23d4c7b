use serde::{Deserialize, Serialize};

use crate::schedule::{arrival_time, schedule_error::ScheduleError, StopIdNamespace};

/// a row of a GTFS `stop_times.txt` file as it appears on disk.
#[derive(Deserialize, Debug, Clone)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: String,
    pub arrival_time: Option<String>,
}

/// one visit of a trip at a stop, cleaned for reachability processing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TripStop {
    pub trip_id: String,
    /// canonical stop id, see [`StopIdNamespace::normalize`]
    pub stop_id: String,
    pub stop_sequence: u32,
    /// minutes after midnight, None if the arrival time could not be parsed
    pub arrival_minutes: Option<u32>,
}

impl StopTimeRecord {
    pub const REQUIRED_COLUMNS: [&str; 4] = ["trip_id", "stop_id", "stop_sequence", "arrival_time"];

    /// cleans this record. records outside of the namespace return Ok(None).
    pub fn into_trip_stop(
        self,
        namespace: &StopIdNamespace,
    ) -> Result<Option<TripStop>, ScheduleError> {
        let stop_id = match namespace.normalize(&self.stop_id) {
            Some(id) => id,
            None => return Ok(None),
        };
        let stop_sequence = self.stop_sequence.trim().parse::<u32>().map_err(|_| {
            ScheduleError::MalformedStopSequence {
                trip_id: self.trip_id.clone(),
                value: self.stop_sequence.clone(),
            }
        })?;
        let arrival_minutes = self
            .arrival_time
            .as_deref()
            .and_then(arrival_time::parse_arrival_minutes);
        Ok(Some(TripStop {
            trip_id: self.trip_id,
            stop_id,
            stop_sequence,
            arrival_minutes,
        }))
    }
}
