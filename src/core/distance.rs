use crate::models::Coordinate;

/// Earth's radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two points in meters
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Unrounded distance in meters
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Straight-line delivery distance between user and venue in whole meters
///
/// Ties are rounded half-to-even.
#[inline]
pub fn delivery_distance(user: Coordinate, venue: Coordinate) -> i64 {
    let meters = haversine_distance(
        user.latitude,
        user.longitude,
        venue.latitude,
        venue.longitude,
    );

    meters.round_ties_even() as i64
}
