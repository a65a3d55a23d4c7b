use geo::Point;

/// picks a single WGS84 point to stand in for a GeoJSON geometry.
///
/// the first coordinate is used, not a centroid:
///   - Point: the point itself
///   - LineString: its first coordinate
///   - Polygon, MultiLineString: the first coordinate of the first ring or line
///   - MultiPolygon: the first coordinate of the first polygon's outer ring
///
/// MultiPoint, GeometryCollection and empty geometries have no representative
/// point and return None.
pub fn representative_point(geometry: &geojson::Value) -> Option<Point<f64>> {
    use geojson::Value as V;
    let position = match geometry {
        V::Point(position) => Some(position),
        V::LineString(line) => line.first(),
        V::Polygon(rings) => rings.first().and_then(|ring| ring.first()),
        V::MultiLineString(lines) => lines.first().and_then(|line| line.first()),
        V::MultiPolygon(polygons) => polygons
            .first()
            .and_then(|rings| rings.first())
            .and_then(|ring| ring.first()),
        V::MultiPoint(_) | V::GeometryCollection(_) => None,
    }?;
    match position.as_slice() {
        [x, y, ..] if x.is_finite() && y.is_finite() => Some(Point::new(*x, *y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::representative_point;
    use geo::Point;
    use geojson::Value;

    #[test]
    fn test_point() {
        let g = Value::Point(vec![8.54, 47.37]);
        assert_eq!(representative_point(&g), Some(Point::new(8.54, 47.37)));
    }

    #[test]
    fn test_first_coordinate_of_lines_and_polygons() {
        let line = Value::LineString(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(representative_point(&line), Some(Point::new(1.0, 2.0)));

        let ring = vec![
            vec![5.0, 6.0],
            vec![7.0, 6.0],
            vec![7.0, 8.0],
            vec![5.0, 6.0],
        ];
        let polygon = Value::Polygon(vec![ring.clone()]);
        assert_eq!(representative_point(&polygon), Some(Point::new(5.0, 6.0)));

        let multi_line = Value::MultiLineString(vec![vec![vec![9.0, 10.0], vec![11.0, 12.0]]]);
        assert_eq!(
            representative_point(&multi_line),
            Some(Point::new(9.0, 10.0))
        );

        let multi_polygon = Value::MultiPolygon(vec![vec![ring]]);
        assert_eq!(
            representative_point(&multi_polygon),
            Some(Point::new(5.0, 6.0))
        );
    }

    #[test]
    fn test_unusable_geometries() {
        assert_eq!(representative_point(&Value::LineString(vec![])), None);
        assert_eq!(representative_point(&Value::Polygon(vec![vec![]])), None);
        assert_eq!(representative_point(&Value::Point(vec![1.0])), None);
        assert_eq!(
            representative_point(&Value::MultiPoint(vec![vec![1.0, 2.0]])),
            None
        );
    }
}
