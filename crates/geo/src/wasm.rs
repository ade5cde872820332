//! WASM bindings for the geo crate.
//!
//! These bindings let the map UI call the geospatial math from
//! JavaScript/TypeScript without duplicating the formulas in the frontend.

use crate::{
    circle_to_ring, haversine_distance, parse_point, proximity::LocatedRecord, ring_centroid,
    ring_to_polygon, shoelace_area_km2, Circle, GeoPoint,
};
use wasm_bindgen::prelude::*;

/// Calculate distance between two points in kilometers.
///
/// # Arguments
/// * `lat1` / `lng1` - First point
/// * `lat2` / `lng2` - Second point
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = GeoPoint::new(lat1, lng1);
    let to = GeoPoint::new(lat2, lng2);
    haversine_distance(&from, &to)
}

/// Calculate the area of a drawn polygon in square kilometers.
///
/// # Arguments
/// * `ring_json` - JSON array of `{"lat": .., "lng": ..}` vertices
#[wasm_bindgen]
pub fn polygon_area_km2(ring_json: &str) -> Result<f64, JsValue> {
    let ring = parse_ring(ring_json)?;
    Ok(shoelace_area_km2(&ring))
}

/// Calculate the arithmetic-mean centroid of a drawn polygon.
///
/// # Arguments
/// * `ring_json` - JSON array of `{"lat": .., "lng": ..}` vertices
///
/// # Returns
/// JSON string with `latitude`/`longitude`, for centering the map viewport
#[wasm_bindgen]
pub fn polygon_center(ring_json: &str) -> Result<String, JsValue> {
    let ring = parse_ring(ring_json)?;
    let center = ring_centroid(&ring).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&center)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Rasterize a circular geofence into a GeoJSON Polygon geometry string.
///
/// # Arguments
/// * `lat` / `lng` - Circle center
/// * `radius_meters` - Circle radius in meters
/// * `segments` - Number of segments (>= 3; the UI passes 64)
///
/// # Returns
/// GeoJSON `{"type": "Polygon", "coordinates": [...]}` string for the
/// renderer
#[wasm_bindgen]
pub fn circle_polygon(
    lat: f64,
    lng: f64,
    radius_meters: f64,
    segments: u32,
) -> Result<String, JsValue> {
    let circle = Circle::new(GeoPoint::new(lat, lng), radius_meters);
    let ring = circle_to_ring(&circle, segments as usize)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&ring_to_polygon(&ring))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Rank located records by distance from an origin.
///
/// # Arguments
/// * `origin_lat` / `origin_lng` - Origin point
/// * `records_json` - JSON array of records with `id` and `location` fields
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON string of `{id, distance_km}` entries sorted closest-first
#[wasm_bindgen]
pub fn nearest_records(
    origin_lat: f64,
    origin_lng: f64,
    records_json: &str,
    max_results: u32,
) -> Result<String, JsValue> {
    let records: Vec<LocatedRecord> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let origin = GeoPoint::new(origin_lat, origin_lng);
    let max = if max_results == 0 { None } else { Some(max_results as usize) };
    let entries = crate::proximity::rank_by_distance_sorted(&origin, &records, max);

    serde_json::to_string(&entries)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Parse a stored location value and return coordinates.
///
/// # Arguments
/// * `location_json` - JSON string of the location field (GeoJSON Point or
///   `{"lat": .., "lng": ..}`)
///
/// # Returns
/// JSON string with lat/lng, or "null" if parsing fails
#[wasm_bindgen]
pub fn parse_location(location_json: &str) -> Result<String, JsValue> {
    let value: serde_json::Value = serde_json::from_str(location_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    match parse_point(&value) {
        Some(point) => {
            let result = serde_json::json!({
                "latitude": point.latitude,
                "longitude": point.longitude
            });
            Ok(result.to_string())
        }
        None => Ok("null".to_string()),
    }
}

/// Parse a ring passed from JS as a JSON array of `{"lat","lng"}` objects.
fn parse_ring(ring_json: &str) -> Result<Vec<GeoPoint>, JsValue> {
    let values: Vec<serde_json::Value> = serde_json::from_str(ring_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    values
        .iter()
        .map(|v| {
            parse_point(v).ok_or_else(|| JsValue::from_str(&format!("invalid vertex: {}", v)))
        })
        .collect()
}
