use geonav_core::Point;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle (haversine) distance in metres between two `(lon, lat)`
/// points given in degrees.
pub fn great_circle(a: Point, b: Point) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat_sin = ((b.y - a.y).to_radians() / 2.0).sin();
    let dlon_sin = ((b.x - a.x).to_radians() / 2.0).sin();
    let h = dlat_sin * dlat_sin + lat1.cos() * lat2.cos() * dlon_sin * dlon_sin;
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
