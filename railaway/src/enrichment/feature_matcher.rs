use geo::Point;
use railaway_osm::poi::{infer_category, CategoryRule, PoiFeature, PoiSpatialIndex};
use serde_json::Value;
use uom::si::f64::Length;

/// the categorized points of interest around one stop. `categories[i]` is the
/// category of `features[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationMatches {
    pub categories: Vec<String>,
    pub features: Vec<Value>,
}

impl DestinationMatches {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// finds the points of interest within a radius of a stop.
pub struct FeatureMatcher<'a> {
    features: &'a [PoiFeature],
    categories: Vec<Option<String>>,
    index: PoiSpatialIndex,
    radius: Length,
    resolution: usize,
}

impl<'a> FeatureMatcher<'a> {
    /// indexes the features and infers each feature's category once up front.
    pub fn new(
        features: &'a [PoiFeature],
        rules: &[CategoryRule],
        radius: Length,
        resolution: usize,
    ) -> FeatureMatcher<'a> {
        let categories = features
            .iter()
            .map(|f| infer_category(rules, f))
            .collect::<Vec<_>>();
        let index = PoiSpatialIndex::new(features);
        FeatureMatcher {
            features,
            categories,
            index,
            radius,
            resolution,
        }
    }

    pub fn n_indexed(&self) -> usize {
        self.index.len()
    }

    /// the categorized features within the radius of a WGS84 lon/lat point,
    /// in feature input order. uncategorized features are left out.
    pub fn match_point(&self, point: &Point<f64>) -> DestinationMatches {
        let mut matches = DestinationMatches::default();
        for idx in self.index.query_radius(point, self.radius, self.resolution) {
            if let (Some(Some(category)), Some(feature)) =
                (self.categories.get(idx), self.features.get(idx))
            {
                matches.categories.push(category.clone());
                matches.features.push(feature.record.clone());
            }
        }
        matches
    }
}
