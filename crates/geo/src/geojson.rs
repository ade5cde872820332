//! GeoJSON boundary for the map UI.
//!
//! The map renderer consumes GeoJSON, whose coordinate order is
//! `[longitude, latitude]` — the reverse of the `GeoPoint { latitude,
//! longitude }` convention used internally. The axis swap happens here and
//! only here.
//!
//! Parsing is deliberately tolerant: group records store locations either as
//! GeoJSON Point objects or as plain `{"lat": .., "lng": ..}` objects, and
//! older records may hold null.

use crate::GeoPoint;
use serde::{Deserialize, Serialize};

/// GeoJSON `Polygon` geometry: `{"type": "Polygon", "coordinates": [ring]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    /// Always "Polygon"
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// Linear rings of `[longitude, latitude]` pairs; the first ring is the
    /// exterior boundary
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Converts a vertex ring into a GeoJSON `Polygon` geometry.
///
/// Performs the `[lng, lat]` axis swap and closes the ring if the caller did
/// not (GeoJSON requires the first and last position of a linear ring to be
/// identical). An empty ring produces an empty exterior ring.
///
/// # Example
/// ```
/// use carelink_geo::{ring_to_polygon, GeoPoint};
///
/// let ring = vec![
///     GeoPoint::new(40.0, -74.0),
///     GeoPoint::new(40.0, -73.0),
///     GeoPoint::new(41.0, -73.0),
/// ];
/// let polygon = ring_to_polygon(&ring);
///
/// assert_eq!(polygon.geometry_type, "Polygon");
/// assert_eq!(polygon.coordinates[0][0], [-74.0, 40.0]); // [lng, lat]
/// assert_eq!(polygon.coordinates[0].len(), 4); // closed on output
/// ```
pub fn ring_to_polygon(ring: &[GeoPoint]) -> GeoJsonPolygon {
    let mut positions: Vec<[f64; 2]> = ring
        .iter()
        .map(|p| [p.longitude, p.latitude])
        .collect();

    if let (Some(first), Some(last)) = (positions.first().copied(), positions.last().copied()) {
        if first != last {
            positions.push(first);
        }
    }

    GeoJsonPolygon {
        geometry_type: "Polygon".to_string(),
        coordinates: vec![positions],
    }
}

/// Parses a point from a location JSON value.
///
/// This is the main entry point for reading location data off group records.
///
/// Supports:
/// - GeoJSON Point objects: `{"type": "Point", "coordinates": [lng, lat]}`
/// - Plain objects: `{"lat": 40.7, "lng": -74.0}`
///
/// # Returns
/// * `Some(GeoPoint)` if parsing succeeds
/// * `None` if the value is null or cannot be parsed
///
/// # Example
/// ```
/// use carelink_geo::parse_point;
/// use serde_json::json;
///
/// // GeoJSON format ([lng, lat])
/// let geojson = json!({"type": "Point", "coordinates": [-74.0060, 40.7128]});
/// let point = parse_point(&geojson).unwrap();
/// assert!((point.latitude - 40.7128).abs() < 0.0001);
///
/// // Plain lat/lng object, as stored on group records
/// let record = json!({"lat": 40.7128, "lng": -74.0060});
/// let point = parse_point(&record).unwrap();
/// assert!((point.longitude - (-74.0060)).abs() < 0.0001);
/// ```
pub fn parse_point(value: &serde_json::Value) -> Option<GeoPoint> {
    if value.is_null() {
        return None;
    }

    // GeoJSON Point: coordinates are [lng, lat]
    if let Some(coords) = value.get("coordinates").and_then(|c| c.as_array()) {
        if coords.len() >= 2 {
            let lng = coords[0].as_f64()?;
            let lat = coords[1].as_f64()?;
            return Some(GeoPoint::new(lat, lng));
        }
    }

    // Plain {"lat": .., "lng": ..} object
    if let (Some(lat), Some(lng)) = (
        value.get("lat").and_then(|v| v.as_f64()),
        value.get("lng").and_then(|v| v.as_f64()),
    ) {
        return Some(GeoPoint::new(lat, lng));
    }

    None
}
