//! Spatial math for distance calculations.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two points in kilometers using the Haversine
/// formula.
///
/// This is the standard formula for great-circle distance between two points
/// on a sphere given their latitudes and longitudes.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in kilometers
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance in kilometers between two coordinates.
pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_distance() {
        // One degree of longitude at the equator is ~111.19 km.
        let dist = haversine_distance(0.0, 0.0, 0.0, 1.0);
        assert!((dist - 111.19).abs() < 0.1, "got {dist}");
    }

    #[test]
    fn haversine_same_point() {
        let dist = haversine_distance(33.6846, -117.8265, 33.6846, -117.8265);
        assert!(dist < 1e-9);
    }

    #[test]
    fn haversine_symmetric() {
        let d1 = haversine_distance(4.711, -74.0721, 6.2442, -75.5812);
        let d2 = haversine_distance(6.2442, -75.5812, 4.711, -74.0721);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn distance_between_matches_raw_form() {
        let a = Coordinate::new(4.711, -74.0721);
        let b = Coordinate::new(4.60971, -74.08175);
        let raw = haversine_distance(a.lat, a.lon, b.lat, b.lon);
        assert_eq!(distance_between(a, b), raw);
    }
}
