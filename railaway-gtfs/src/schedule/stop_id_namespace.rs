use serde::{Deserialize, Serialize};

/// selects the stops belonging to one network and canonicalizes their ids.
///
/// GTFS feeds with platform-level stops encode the platform after a separator,
/// for example `8503000:0:4`. only ids starting with `prefix` are kept, and the
/// id is truncated at the first `separator` so that all platforms of a station
/// collapse onto the station id `8503000`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopIdNamespace {
    pub prefix: String,
    pub separator: char,
}

impl Default for StopIdNamespace {
    fn default() -> Self {
        Self {
            prefix: String::from(Self::DEFAULT_PREFIX),
            separator: Self::DEFAULT_SEPARATOR,
        }
    }
}

impl StopIdNamespace {
    pub const DEFAULT_PREFIX: &str = "85";
    pub const DEFAULT_SEPARATOR: char = ':';

    pub fn new(prefix: &str, separator: char) -> StopIdNamespace {
        StopIdNamespace {
            prefix: String::from(prefix),
            separator,
        }
    }

    /// returns the canonical id for a raw stop id, or None if the id lies
    /// outside of this namespace.
    pub fn normalize(&self, raw_stop_id: &str) -> Option<String> {
        if !raw_stop_id.starts_with(&self.prefix) {
            return None;
        }
        let canonical = raw_stop_id
            .split(self.separator)
            .next()
            .unwrap_or(raw_stop_id);
        Some(String::from(canonical))
    }
}
