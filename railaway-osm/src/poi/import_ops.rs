use std::io::Read;

use serde_json::Value;

use super::{PoiError, PoiFeature};

/// reads points of interest from a GeoJSON `FeatureCollection` or from a bare
/// JSON array of features.
///
/// features with a truthy `excluded_property` (for example `uic_ref`, which
/// marks OSM elements that are themselves transit stops) are dropped so that
/// stops are not matched as their own points of interest.
///
/// # Arguments
///
/// * `source` - GeoJSON text
/// * `excluded_property` - optional property key that removes a feature
///
/// # Returns
///
/// the remaining features in input order
pub fn read_features<R: Read>(
    source: R,
    excluded_property: Option<&str>,
) -> Result<Vec<PoiFeature>, PoiError> {
    let json: Value = serde_json::from_reader(source)?;
    let items = match json {
        Value::Object(mut obj) => {
            let geojson_type = obj.get("type").and_then(Value::as_str).map(String::from);
            match geojson_type.as_deref() {
                Some("FeatureCollection") => match obj.remove("features") {
                    Some(Value::Array(features)) => features,
                    None | Some(Value::Null) => vec![],
                    Some(_) => {
                        return Err(PoiError::InvalidGeoJson(String::from(
                            "FeatureCollection 'features' is not an array",
                        )))
                    }
                },
                other => {
                    return Err(PoiError::InvalidGeoJson(format!(
                        "expected a FeatureCollection or a list of features, found object of type {}",
                        other.unwrap_or("<none>")
                    )))
                }
            }
        }
        Value::Array(features) => features,
        _ => {
            return Err(PoiError::InvalidGeoJson(String::from(
                "expected a FeatureCollection or a list of features",
            )))
        }
    };

    let n_items = items.len();
    let features: Vec<PoiFeature> = items
        .into_iter()
        .filter(Value::is_object)
        .map(PoiFeature::new)
        .filter(|f| match excluded_property {
            Some(key) => !f.has_truthy_property(key),
            None => true,
        })
        .collect();
    log::debug!(
        "read {} of {} GeoJSON features after filtering",
        features.len(),
        n_items
    );
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [7.44, 46.95]}, "properties": {"leisure": "park"}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [7.44, 46.95]}, "properties": {"railway": "station", "uic_ref": "8507000"}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [7.45, 46.96]}, "properties": {"tourism": "museum", "uic_ref": ""}}
        ]
    }"#;

    #[test]
    fn test_read_feature_collection() {
        let features = read_features(COLLECTION.as_bytes(), Some("uic_ref")).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(
            features[0].property("leisure").and_then(|v| v.as_str()),
            Some("park")
        );
        assert_eq!(
            features[1].property("tourism").and_then(|v| v.as_str()),
            Some("museum")
        );
    }

    #[test]
    fn test_read_without_exclusion() {
        let features = read_features(COLLECTION.as_bytes(), None).unwrap();
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_read_bare_list() {
        let list = r#"[
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}, "properties": {"route": "hiking"}},
            {"type": "Feature", "geometry": null, "properties": {}}
        ]"#;
        let features = read_features(list.as_bytes(), Some("uic_ref")).unwrap();
        assert_eq!(features.len(), 2);
        assert!(features[0].point.is_some());
        assert!(features[1].point.is_none());
    }

    #[test]
    fn test_empty_collection() {
        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        let features = read_features(empty.as_bytes(), Some("uic_ref")).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_invalid_structure() {
        let single = r#"{"type": "Feature", "geometry": null, "properties": {}}"#;
        match read_features(single.as_bytes(), None) {
            Err(PoiError::InvalidGeoJson(_)) => {}
            other => panic!("expected invalid structure, found {other:?}"),
        }
        match read_features("42".as_bytes(), None) {
            Err(PoiError::InvalidGeoJson(_)) => {}
            other => panic!("expected invalid structure, found {other:?}"),
        }
        match read_features("{not json".as_bytes(), None) {
            Err(PoiError::JsonDecodeError { .. }) => {}
            other => panic!("expected decode error, found {other:?}"),
        }
    }
}
