use serde::{Deserialize, Serialize};

use crate::schedule::StopIdNamespace;

/// a row of a GTFS `stops.txt` file as it appears on disk. coordinates are
/// kept as text so that a malformed value drops the stop instead of failing
/// the whole read.
#[derive(Deserialize, Debug, Clone)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_lat: Option<String>,
    pub stop_lon: Option<String>,
    pub stop_name: Option<String>,
}

/// a transit stop with a canonical id, WGS84 coordinates and a display name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    pub stop_name: String,
}

impl StopRecord {
    pub const REQUIRED_COLUMNS: [&str; 4] = ["stop_id", "stop_lat", "stop_lon", "stop_name"];

    /// builds a [`Stop`] from this record if its id lies in the namespace
    /// and both coordinates parse as finite numbers.
    pub fn into_stop(self, namespace: &StopIdNamespace) -> Option<Stop> {
        let stop_id = namespace.normalize(&self.stop_id)?;
        let stop_lat = parse_coordinate(self.stop_lat.as_deref())?;
        let stop_lon = parse_coordinate(self.stop_lon.as_deref())?;
        Some(Stop {
            stop_id,
            stop_lat,
            stop_lon,
            stop_name: self.stop_name.unwrap_or_default(),
        })
    }
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
