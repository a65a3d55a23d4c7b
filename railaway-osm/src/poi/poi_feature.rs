use geo::Point;
use serde_json::{Map, Value};

use super::representative_point::representative_point;

/// a point of interest read from a GeoJSON feature. the original JSON record
/// is kept verbatim so that it can be written back out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiFeature {
    pub record: Value,
    /// WGS84 stand-in location, None if the geometry has no usable coordinate
    pub point: Option<Point<f64>>,
}

impl PoiFeature {
    /// wraps a GeoJSON feature object. a missing or malformed geometry is not
    /// an error, it only leaves the feature without a point.
    pub fn new(record: Value) -> PoiFeature {
        let point = record
            .get("geometry")
            .filter(|g| !g.is_null())
            .and_then(|g| serde_json::from_value::<geojson::Geometry>(g.clone()).ok())
            .and_then(|g| representative_point(&g.value));
        PoiFeature { record, point }
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.record.get("properties").and_then(Value::as_object)
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties().and_then(|p| p.get(key))
    }

    /// true if the property exists with a value that is not null, false, zero,
    /// or an empty string, array or object.
    pub fn has_truthy_property(&self, key: &str) -> bool {
        self.property(key).map(is_truthy).unwrap_or(false)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
