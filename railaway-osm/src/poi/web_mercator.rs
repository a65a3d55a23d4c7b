use geo::Point;

/// WGS84 ellipsoid semi-major axis, the sphere radius used by EPSG:3857
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// latitude at which the Web Mercator square ends
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// projects a WGS84 lon/lat point into Web Mercator (EPSG:3857) meters.
/// latitudes are clamped to the valid range of the projection.
pub fn project(point: &Point<f64>) -> Point<f64> {
    let lon = point.x().to_radians();
    let lat = point.y().clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = EARTH_RADIUS_METERS * lon;
    let y = EARTH_RADIUS_METERS * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
    Point::new(x, y)
}
