//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes.

use crate::GeoPoint;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two points in kilometers.
///
/// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// Inputs are not range-validated; out-of-range coordinates produce a
/// mathematically defined but geographically meaningless result.
///
/// # Arguments
/// * `from` - Starting point
/// * `to` - Ending point
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use carelink_geo::{haversine_distance, GeoPoint};
///
/// let new_york = GeoPoint::new(40.7128, -74.0060);
/// let los_angeles = GeoPoint::new(34.0522, -118.2437);
///
/// let distance = haversine_distance(&new_york, &los_angeles);
/// assert!((distance - 3936.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two points in meters.
///
/// Convenient when comparing against geofence radii, which the application
/// stores in meters.
#[inline]
pub fn haversine_distance_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Internal function that calculates distance with a custom radius.
#[inline]
fn haversine_distance_with_radius(from: &GeoPoint, to: &GeoPoint, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data: known distances between cities
    const NEW_YORK: GeoPoint = GeoPoint { latitude: 40.7128, longitude: -74.0060 };
    const LOS_ANGELES: GeoPoint = GeoPoint { latitude: 34.0522, longitude: -118.2437 };
    const CHICAGO: GeoPoint = GeoPoint { latitude: 41.8781, longitude: -87.6298 };
    const LONDON: GeoPoint = GeoPoint { latitude: 51.5074, longitude: -0.1278 };

    #[test]
    fn test_new_york_to_los_angeles() {
        let distance = haversine_distance(&NEW_YORK, &LOS_ANGELES);
        // Expected: ~3936 km
        assert!((distance - 3936.0).abs() < 10.0, "NYC-LA: {}", distance);
    }

    #[test]
    fn test_new_york_to_london() {
        let distance = haversine_distance(&NEW_YORK, &LONDON);
        // Expected: ~5570 km
        assert!((distance - 5570.0).abs() < 30.0, "NYC-London: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        let distance = haversine_distance(&CHICAGO, &CHICAGO);
        assert!(distance.abs() < 0.001);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&NEW_YORK, &CHICAGO);
        let d2 = haversine_distance(&CHICAGO, &NEW_YORK);
        assert!((d1 - d2).abs() < 0.001);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&NEW_YORK, &CHICAGO);
        let meters = haversine_distance_meters(&NEW_YORK, &CHICAGO);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_short_distance_block_scale() {
        // Two points ~one city block apart in Manhattan
        let a = GeoPoint::new(40.7580, -73.9855);
        let b = GeoPoint::new(40.7587, -73.9850);
        let meters = haversine_distance_meters(&a, &b);
        assert!(meters > 50.0 && meters < 150.0, "block: {}", meters);
    }
}
