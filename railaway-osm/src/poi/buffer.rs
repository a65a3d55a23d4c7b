use geo::{LineString, Point, Polygon};

mod consts {
    pub const MIN_RES: usize = 6;
}

/// buffers a point in a planar, meter-based projection (for example Web
/// Mercator) into a circular polygon.
///
/// the rust geo library does not support buffering, so the circle is
/// approximated by `resolution` evenly spaced vertices on its circumference.
/// fewer than six vertices are raised to six, which at least gives a hexagon.
///
/// the polygon is inscribed in the circle: its edges cut inside the true
/// radius by up to `radius * (1 - cos(pi / resolution))`, which for a 500 meter
/// radius at 64 vertices is about 0.6 meters midway between two vertices.
///
/// # Arguments
///
/// * `point` - center of the circle, in projected coordinates
/// * `radius` - buffer size
/// * `resolution` - number of vertices along the circumference
///
/// # Returns
///
/// A circular Polygon
pub fn planar_buffer(
    point: &Point<f64>,
    radius: uom::si::f64::Length,
    resolution: usize,
) -> Polygon<f64> {
    let radius_meters = radius.get::<uom::si::length::meter>();
    let resolution = resolution.max(consts::MIN_RES);
    let mut coordinates: Vec<(f64, f64)> = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let angle = (i as f64 * 360.0 / resolution as f64).to_radians();
        coordinates.push((
            point.x() + radius_meters * angle.cos(),
            point.y() + radius_meters * angle.sin(),
        ));
    }
    coordinates.push((point.x() + radius_meters, point.y())); // close the circle!
    Polygon::new(LineString::from(coordinates), vec![])
}
