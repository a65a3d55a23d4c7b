use serde::{Deserialize, Serialize};

use crate::RailawayError;

/// a request for leisure destinations reachable from near a user location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    /// WGS84 longitude of the user
    pub lon: f64,
    /// WGS84 latitude of the user
    pub lat: f64,
    /// total time available for the outing, in minutes
    pub time_to_spend: f64,
    /// only destinations with a point of interest of this category
    pub activity: Option<String>,
    /// share of `time_to_spend` that may be spent riding to the destination
    pub travel_fraction: f64,
    /// maximum number of destinations returned
    pub limit: usize,
}

impl RecommendQuery {
    pub const DEFAULT_TRAVEL_FRACTION: f64 = 0.30;
    pub const DEFAULT_LIMIT: usize = 3;

    pub fn new(lon: f64, lat: f64, time_to_spend: f64) -> RecommendQuery {
        RecommendQuery {
            lon,
            lat,
            time_to_spend,
            activity: None,
            travel_fraction: Self::DEFAULT_TRAVEL_FRACTION,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// the longest acceptable travel time in minutes
    pub fn max_travel_time(&self) -> f64 {
        self.travel_fraction * self.time_to_spend
    }

    pub fn validate(&self) -> Result<(), RailawayError> {
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(RailawayError::InvalidQuery(format!(
                "longitude must lie in [-180, 180], found {}",
                self.lon
            )));
        }
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(RailawayError::InvalidQuery(format!(
                "latitude must lie in [-90, 90], found {}",
                self.lat
            )));
        }
        if !self.time_to_spend.is_finite() || self.time_to_spend < 0.0 {
            return Err(RailawayError::InvalidQuery(format!(
                "time to spend must be a non-negative number of minutes, found {}",
                self.time_to_spend
            )));
        }
        if !(0.0..=1.0).contains(&self.travel_fraction) {
            return Err(RailawayError::InvalidQuery(format!(
                "travel fraction must lie in [0, 1], found {}",
                self.travel_fraction
            )));
        }
        Ok(())
    }
}
