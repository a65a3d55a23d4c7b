use railaway_gtfs::schedule::StopIdNamespace;
use railaway_osm::poi::{default_category_rules, CategoryRule};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::RailawayError;

/// parameters of an edge table build. every field has a default, so a
/// configuration file only needs to name the values it changes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct RailawayConfiguration {
    /// stop ids outside of this prefix are ignored
    pub stop_id_prefix: String,
    /// stop ids are truncated at the first occurrence of this character
    pub stop_id_separator: char,
    /// reachability stops once this many distinct stop pairs are found
    pub max_edges: usize,
    pub match_radius_meters: f64,
    /// number of vertices of the buffer polygon around a destination stop
    pub buffer_resolution: usize,
    /// features with a truthy value for this property are not points of interest
    pub excluded_property: Option<String>,
    pub category_rules: Vec<CategoryRule>,
    /// number of trips mapped in parallel between checks of the edge cap
    pub batch_size: usize,
}

impl Default for RailawayConfiguration {
    fn default() -> Self {
        Self {
            stop_id_prefix: String::from(StopIdNamespace::DEFAULT_PREFIX),
            stop_id_separator: StopIdNamespace::DEFAULT_SEPARATOR,
            max_edges: 300_000,
            match_radius_meters: 500.0,
            buffer_resolution: 64,
            excluded_property: Some(String::from("uic_ref")),
            category_rules: default_category_rules(),
            batch_size: 1024,
        }
    }
}

impl RailawayConfiguration {
    pub fn namespace(&self) -> StopIdNamespace {
        StopIdNamespace::new(&self.stop_id_prefix, self.stop_id_separator)
    }

    pub fn match_radius(&self) -> Length {
        Length::new::<uom::si::length::meter>(self.match_radius_meters)
    }

    pub fn validate(&self) -> Result<(), RailawayError> {
        if !self.match_radius_meters.is_finite() || self.match_radius_meters < 0.0 {
            return Err(RailawayError::ConfigurationError(format!(
                "match_radius_meters must be a non-negative number, found {}",
                self.match_radius_meters
            )));
        }
        if self.batch_size == 0 {
            return Err(RailawayError::ConfigurationError(String::from(
                "batch_size must be positive",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for RailawayConfiguration {
    type Error = RailawayError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: RailawayConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RailawayError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                RailawayError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                RailawayError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                RailawayError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(RailawayError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
