mod recommend_query;

pub use recommend_query::RecommendQuery;

use geo::{Distance, Haversine, Point};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::{edge_table::EdgeTableRow, RailawayError};

/// a destination suggested for a query, as reported to the user.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub from_stop_id: String,
    pub from_stop_name: String,
    pub to_stop_id: String,
    pub to_stop_name: String,
    pub to_stop_lon: f64,
    pub to_stop_lat: f64,
    pub travel_time: u32,
    #[serde(rename = "type")]
    pub categories: Vec<String>,
    pub stop_features: Vec<Value>,
}

impl From<&EdgeTableRow> for Recommendation {
    fn from(row: &EdgeTableRow) -> Self {
        Recommendation {
            from_stop_id: row.from_stop_id.clone(),
            from_stop_name: row.from_stop_name.clone(),
            to_stop_id: row.to_stop_id.clone(),
            to_stop_name: row.to_stop_name.clone(),
            to_stop_lon: row.to_stop_lon,
            to_stop_lat: row.to_stop_lat,
            travel_time: row.travel_time,
            categories: row.categories.clone(),
            stop_features: row.stop_features.clone(),
        }
    }
}

/// finds the destinations worth visiting from the stop closest to the user.
///
/// the origin is the `from_stop_id` nearest to the query location by
/// Haversine distance (the first one in table order on ties). of the rows
/// leaving that origin, those within the travel budget and, if requested,
/// offering the activity are returned, fastest first. rows with equal travel
/// times keep their table order.
///
/// # Arguments
///
/// * `rows` - the edge table
/// * `query` - user location, budget and filters
///
/// # Returns
///
/// at most `query.limit` rows of the table
pub fn recommend<'a>(
    rows: &'a [EdgeTableRow],
    query: &RecommendQuery,
) -> Result<Vec<&'a EdgeTableRow>, RailawayError> {
    query.validate()?;
    let user = Point::new(query.lon, query.lat);
    let nearest = rows
        .iter()
        .map(|r| {
            let origin = Point::new(r.from_stop_lon, r.from_stop_lat);
            (Haversine.distance(user, origin), r)
        })
        .min_by(|(a, _), (b, _)| a.total_cmp(b));
    let origin_id = match nearest {
        Some((distance, row)) => {
            log::debug!(
                "nearest origin stop is {} ({}) at {:.0} meters",
                row.from_stop_id,
                row.from_stop_name,
                distance
            );
            row.from_stop_id.as_str()
        }
        None => return Ok(vec![]),
    };

    let max_travel_time = query.max_travel_time();
    let result = rows
        .iter()
        .filter(|r| r.from_stop_id == origin_id)
        .filter(|r| r.travel_time as f64 <= max_travel_time)
        .filter(|r| match &query.activity {
            Some(activity) => r.categories.iter().any(|c| c == activity),
            None => true,
        })
        .sorted_by_key(|r| r.travel_time)
        .take(query.limit)
        .collect_vec();
    Ok(result)
}
