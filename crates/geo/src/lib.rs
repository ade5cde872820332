//! Geospatial utilities for CareLink.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Polygon area (shoelace) and centroid helpers for drawn geofences
//! - Circle-to-ring rasterization for map overlays
//! - Geofence containment checks
//! - GeoJSON export/parsing for the map UI boundary
//! - Batch proximity ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use carelink_geo::{haversine_distance, GeoPoint};
//!
//! let new_york = GeoPoint::new(40.7128, -74.0060);
//! let los_angeles = GeoPoint::new(34.0522, -118.2437);
//!
//! let distance_km = haversine_distance(&new_york, &los_angeles);
//! assert!((distance_km - 3936.0).abs() < 10.0); // ~3936 km
//! ```

mod circle;
mod error;
mod geofence;
mod geojson;
mod haversine;
mod polygon;
pub mod proximity;

#[cfg(feature = "wasm")]
mod wasm;

pub use circle::{circle_to_ring, Circle, DEFAULT_CIRCLE_SEGMENTS};
pub use error::{GeoError, Result};
pub use geofence::Geofence;
pub use geojson::{parse_point, ring_to_polygon, GeoJsonPolygon};
pub use haversine::{
    haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M,
};
pub use polygon::{ring_centroid, shoelace_area_km2, KM_PER_DEGREE};
pub use proximity::{rank_by_distance, DistanceEntry};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the point has valid coordinate values.
    ///
    /// The math functions in this crate do not validate their inputs;
    /// callers handling raw map or geocoder data should check this first.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
