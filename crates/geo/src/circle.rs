//! Circle-to-ring rasterization for map overlays.
//!
//! The map UI represents a circular geofence as a polygon overlay; this
//! module samples the circle into a closed ring the renderer can draw.

use crate::{GeoError, GeoPoint, Result};

/// Meters per degree of longitude at the equator.
const METERS_PER_DEGREE_LNG_EQUATOR: f64 = 111_320.0;

/// Meters per degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 110_540.0;

/// Segment count used by the map UI when none is specified.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;

/// A circular geofence: center plus radius in meters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Center of the circle
    pub center: GeoPoint,
    /// Radius in meters (>= 0)
    pub radius_meters: f64,
}

impl Circle {
    /// Creates a new circle.
    #[inline]
    pub fn new(center: GeoPoint, radius_meters: f64) -> Self {
        Self { center, radius_meters }
    }
}

/// Rasterizes a circle into a closed ring of `segments + 1` points.
///
/// The first and last point of the result are equal, so the ring can be
/// handed to a polygon renderer directly. The radius is converted to degrees
/// per axis, correcting longitude for compression at the center's latitude:
///
/// ```text
/// dx_deg = radius_m / (111320 * cos(lat))
/// dy_deg = radius_m / 110540
/// ```
///
/// # Errors
/// - [`GeoError::TooFewSegments`] if `segments < 3` (the result would not
///   enclose any area).
/// - [`GeoError::PolarLatitude`] if the center latitude is ±90°, where the
///   longitude scale divides by zero. Failing loudly here beats returning a
///   ring of infinite vertices that breaks the renderer downstream.
///
/// # Example
/// ```
/// use carelink_geo::{circle_to_ring, Circle, GeoPoint, DEFAULT_CIRCLE_SEGMENTS};
///
/// let circle = Circle::new(GeoPoint::new(40.7128, -74.0060), 500.0);
/// let ring = circle_to_ring(&circle, DEFAULT_CIRCLE_SEGMENTS).unwrap();
///
/// assert_eq!(ring.len(), DEFAULT_CIRCLE_SEGMENTS + 1);
/// assert_eq!(ring[0], ring[DEFAULT_CIRCLE_SEGMENTS]);
/// ```
pub fn circle_to_ring(circle: &Circle, segments: usize) -> Result<Vec<GeoPoint>> {
    if segments < 3 {
        return Err(GeoError::TooFewSegments { segments });
    }

    let center = circle.center;
    if center.latitude.abs() >= 90.0 {
        return Err(GeoError::PolarLatitude { latitude: center.latitude });
    }

    let lat_rad = center.latitude.to_radians();
    let dx_degrees = circle.radius_meters / (METERS_PER_DEGREE_LNG_EQUATOR * lat_rad.cos());
    let dy_degrees = circle.radius_meters / METERS_PER_DEGREE_LAT;

    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
        ring.push(GeoPoint::new(
            center.latitude + dy_degrees * theta.sin(),
            center.longitude + dx_degrees * theta.cos(),
        ));
    }
    let first = ring[0];
    ring.push(first);

    Ok(ring)
}
