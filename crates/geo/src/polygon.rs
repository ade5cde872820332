//! Polygon area and centroid helpers for drawn geofences.
//!
//! These back the map UI's polygon-drawing tool: the area readout shown
//! while a clinician sketches a patient boundary, and the point used to
//! center the viewport on an existing geofence.

use crate::{GeoError, GeoPoint, Result};

/// Kilometers per degree of latitude (and, in the flat-earth approximation
/// used by [`shoelace_area_km2`], per degree of longitude as well).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Calculates the area of a polygon in square kilometers via the shoelace
/// formula.
///
/// Vertices may be given in either winding order and the ring may be open or
/// explicitly closed; both yield the same non-negative result. Fewer than 3
/// points is a degenerate polygon and returns `0.0` (a defined boundary case,
/// not an error).
///
/// Square-degrees are converted to km² with a fixed scale of
/// [`KM_PER_DEGREE`] applied to both axes. This flat-earth approximation
/// matches what the CareLink map UI has always displayed; it loses accuracy
/// away from the equator and for large polygons (longitude degrees shrink
/// with latitude), so do not treat the result as geodetically precise.
///
/// # Example
/// ```
/// use carelink_geo::{shoelace_area_km2, GeoPoint};
///
/// // A 0.01° x 0.01° square near the equator, ~1.11 km on a side
/// let square = vec![
///     GeoPoint::new(0.00, 0.00),
///     GeoPoint::new(0.00, 0.01),
///     GeoPoint::new(0.01, 0.01),
///     GeoPoint::new(0.01, 0.00),
/// ];
/// let area = shoelace_area_km2(&square);
/// assert!((area - 1.2392).abs() < 0.01);
/// ```
pub fn shoelace_area_km2(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        // x = longitude, y = latitude
        sum += points[i].longitude * points[j].latitude
            - points[j].longitude * points[i].latitude;
    }

    let area_degrees2 = sum.abs() / 2.0;
    area_degrees2 * KM_PER_DEGREE * KM_PER_DEGREE
}

/// Calculates the arithmetic-mean centroid of a point sequence.
///
/// This is a plain average of latitudes and longitudes, NOT the
/// area-weighted polygon centroid; for non-convex or irregular rings the two
/// differ. The map UI uses it to center the viewport, where the
/// approximation is fine — do not use it where geometric exactness matters.
///
/// # Errors
/// Returns [`GeoError::EmptyRing`] for an empty sequence.
pub fn ring_centroid(points: &[GeoPoint]) -> Result<GeoPoint> {
    if points.is_empty() {
        return Err(GeoError::EmptyRing);
    }

    let n = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.latitude).sum();
    let lng_sum: f64 = points.iter().map(|p| p.longitude).sum();

    Ok(GeoPoint::new(lat_sum / n, lng_sum / n))
}
