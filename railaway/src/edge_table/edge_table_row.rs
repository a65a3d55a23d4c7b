use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enrichment::EnrichedEdge;

/// the columns of the edge table, in order
pub const EDGE_TABLE_COLUMNS: [&str; 11] = [
    "from_stop_id",
    "from_stop_name",
    "from_stop_lon",
    "from_stop_lat",
    "to_stop_id",
    "to_stop_name",
    "to_stop_lon",
    "to_stop_lat",
    "travel_time",
    "type",
    "stop_features",
];

/// one row of the edge table. the nested `type` and `stop_features` columns
/// are stored as JSON text in the CSV file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EdgeTableRow {
    pub from_stop_id: String,
    pub from_stop_name: String,
    pub from_stop_lon: f64,
    pub from_stop_lat: f64,
    pub to_stop_id: String,
    pub to_stop_name: String,
    pub to_stop_lon: f64,
    pub to_stop_lat: f64,
    /// minutes
    pub travel_time: u32,
    /// categories of the points of interest around the destination stop
    #[serde(rename = "type", with = "json_column")]
    pub categories: Vec<String>,
    /// GeoJSON features around the destination stop, aligned with `categories`
    #[serde(with = "json_column")]
    pub stop_features: Vec<Value>,
}

impl From<&EnrichedEdge> for EdgeTableRow {
    fn from(edge: &EnrichedEdge) -> Self {
        EdgeTableRow {
            from_stop_id: edge.from_stop.stop_id.clone(),
            from_stop_name: edge.from_stop.stop_name.clone(),
            from_stop_lon: edge.from_stop.stop_lon,
            from_stop_lat: edge.from_stop.stop_lat,
            to_stop_id: edge.to_stop.stop_id.clone(),
            to_stop_name: edge.to_stop.stop_name.clone(),
            to_stop_lon: edge.to_stop.stop_lon,
            to_stop_lat: edge.to_stop.stop_lat,
            travel_time: edge.travel_time,
            categories: edge.matches.categories.clone(),
            stop_features: edge.matches.features.clone(),
        }
    }
}

/// (de)serializes a nested value as a JSON string cell.
mod json_column {
    use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let json = serde_json::to_string(value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&json)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let json = String::deserialize(deserializer)?;
        serde_json::from_str(&json).map_err(serde::de::Error::custom)
    }
}
