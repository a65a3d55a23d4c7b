use geo::{BoundingRect, Intersects, Point, Polygon};
use itertools::Itertools;
use rstar::{RTree, RTreeObject, AABB};

use super::{buffer::planar_buffer, web_mercator, PoiFeature};

/// an entry in the point of interest spatial index. the point is stored in
/// Web Mercator meters and the index refers back into the feature list the
/// index was built from.
#[derive(Debug, Clone)]
pub struct PoiSpatialRow {
    pub point: Point<f64>,
    pub index: usize,
}

impl RTreeObject for PoiSpatialRow {
    type Envelope = AABB<Point<f64>>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// R-tree over the projected locations of a list of points of interest.
/// features without a location are not indexed and can never match.
pub struct PoiSpatialIndex {
    rtree: RTree<PoiSpatialRow>,
    n_indexed: usize,
}

impl PoiSpatialIndex {
    pub fn new(features: &[PoiFeature]) -> PoiSpatialIndex {
        let rows = features
            .iter()
            .enumerate()
            .filter_map(|(index, f)| {
                f.point.map(|p| PoiSpatialRow {
                    point: web_mercator::project(&p),
                    index,
                })
            })
            .collect_vec();
        let n_indexed = rows.len();
        if n_indexed < features.len() {
            log::debug!(
                "{} of {} features have no location and are not indexed",
                features.len() - n_indexed,
                features.len()
            );
        }
        let rtree = RTree::bulk_load(rows);
        PoiSpatialIndex { rtree, n_indexed }
    }

    pub fn len(&self) -> usize {
        self.n_indexed
    }

    pub fn is_empty(&self) -> bool {
        self.n_indexed == 0
    }

    /// finds the features intersecting a polygon given in Web Mercator
    /// coordinates. candidates from the bounding box query are refined with an
    /// exact intersection test.
    ///
    /// # Returns
    ///
    /// feature indices in ascending order
    pub fn intersecting(&self, polygon: &Polygon<f64>) -> Vec<usize> {
        let bbox = match polygon.bounding_rect() {
            Some(rect) => rect,
            None => return vec![],
        };
        let envelope = AABB::from_corners(
            Point::new(bbox.min().x, bbox.min().y),
            Point::new(bbox.max().x, bbox.max().y),
        );
        self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|row| polygon.intersects(&row.point))
            .map(|row| row.index)
            .sorted()
            .collect_vec()
    }

    /// finds the features within `radius` of a WGS84 location. the radius is
    /// measured in the Web Mercator plane, which like any EPSG:3857 buffer
    /// grows on the ground with latitude.
    ///
    /// # Arguments
    ///
    /// * `point` - WGS84 lon/lat center of the query
    /// * `radius` - buffer size
    /// * `resolution` - number of vertices in the buffer polygon
    ///
    /// # Returns
    ///
    /// feature indices in ascending order
    pub fn query_radius(
        &self,
        point: &Point<f64>,
        radius: uom::si::f64::Length,
        resolution: usize,
    ) -> Vec<usize> {
        if self.is_empty() {
            return vec![];
        }
        let center = web_mercator::project(point);
        let buffer = planar_buffer(&center, radius, resolution);
        self.intersecting(&buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uom::si::{f64::Length, length::meter};

    fn point_feature(lon: f64, lat: f64) -> PoiFeature {
        PoiFeature::new(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [lon, lat]},
            "properties": {"leisure": "park"}
        }))
    }

    /// longitude offset at the equator that projects to the given distance
    fn equator_offset(meters: f64) -> f64 {
        (meters / web_mercator::EARTH_RADIUS_METERS).to_degrees()
    }

    /// latitude whose projection lies the given distance north of the equator
    fn mercator_latitude(meters: f64) -> f64 {
        let y = meters / web_mercator::EARTH_RADIUS_METERS;
        (2.0 * y.exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees()
    }

    fn polar(distance: f64, degrees: f64) -> (f64, f64) {
        let angle = degrees.to_radians();
        (distance * angle.cos(), distance * angle.sin())
    }

    #[test]
    fn test_radius_boundary() {
        let features = vec![
            point_feature(equator_offset(501.0), 0.0),
            point_feature(0.0, 0.0),
            point_feature(equator_offset(499.0), 0.0),
            point_feature(0.0, -equator_offset(250.0)),
        ];
        let index = PoiSpatialIndex::new(&features);
        assert_eq!(index.len(), 4);
        let result = index.query_radius(&Point::new(0.0, 0.0), Length::new::<meter>(500.0), 64);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_radius_between_buffer_vertices() {
        // the 64-gon edge midway between two vertices lies about 0.6 m inside the radius
        let (dx, dy) = polar(499.3, 2.8125);
        let (far_dx, far_dy) = polar(499.6, 2.8125);
        let features = vec![
            point_feature(equator_offset(dx), mercator_latitude(dy)),
            point_feature(equator_offset(far_dx), mercator_latitude(far_dy)),
        ];
        let index = PoiSpatialIndex::new(&features);
        let result = index.query_radius(&Point::new(0.0, 0.0), Length::new::<meter>(500.0), 64);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_unlocated_features_never_match() {
        let features = vec![
            PoiFeature::new(json!({
                "type": "Feature",
                "geometry": null,
                "properties": {}
            })),
            point_feature(0.0, 0.0),
        ];
        let index = PoiSpatialIndex::new(&features);
        assert_eq!(index.len(), 1);
        let result = index.query_radius(&Point::new(0.0, 0.0), Length::new::<meter>(500.0), 64);
        assert_eq!(result, vec![1]);
    }

    #[test]
    fn test_empty_index() {
        let index = PoiSpatialIndex::new(&[]);
        assert!(index.is_empty());
        let result = index.query_radius(&Point::new(7.44, 46.95), Length::new::<meter>(500.0), 64);
        assert!(result.is_empty());
    }
}
