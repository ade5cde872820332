//! Batch proximity ranking with optional parallelism.
//!
//! Feeds the "nearest clinician" map widget: given an origin (a patient's
//! home, or the clinician's current position) and the located records pulled
//! from the group store, compute per-record distances and rank them.

use crate::{haversine_distance, parse_point, GeoPoint};
use serde::{Deserialize, Serialize};

/// Distance result for a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// The record id (identity-provider subject)
    pub id: String,
    /// Distance in kilometers (Infinity if the location is missing or
    /// unparseable)
    pub distance_km: f64,
}

/// Input record for batch distance calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct LocatedRecord {
    /// Record id (identity-provider subject)
    pub id: String,
    /// Location as stored on the record: GeoJSON Point or `{"lat","lng"}`
    pub location: serde_json::Value,
}

/// Calculates distances from an origin to each record.
///
/// Records with missing or unparseable locations get `f64::INFINITY` rather
/// than being dropped, so the result always has one entry per input.
///
/// # Example
/// ```
/// use carelink_geo::proximity::{rank_by_distance, LocatedRecord};
/// use carelink_geo::GeoPoint;
/// use serde_json::json;
///
/// let records = vec![
///     LocatedRecord { id: "rn-142".into(), location: json!({"lat": 40.72, "lng": -74.00}) },
///     LocatedRecord { id: "rn-903".into(), location: json!(null) },
/// ];
///
/// let entries = rank_by_distance(&GeoPoint::new(40.71, -74.01), &records);
/// assert_eq!(entries.len(), 2);
/// assert!(entries[1].distance_km.is_infinite());
/// ```
pub fn rank_by_distance(origin: &GeoPoint, records: &[LocatedRecord]) -> Vec<DistanceEntry> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records
            .par_iter()
            .map(|record| entry_for(origin, record))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records
            .iter()
            .map(|record| entry_for(origin, record))
            .collect()
    }
}

/// Calculates distances and returns entries sorted closest-first.
///
/// Entries with unparseable locations (Infinity) sort to the end.
/// `max_results` truncates the list (`None` for all).
pub fn rank_by_distance_sorted(
    origin: &GeoPoint,
    records: &[LocatedRecord],
    max_results: Option<usize>,
) -> Vec<DistanceEntry> {
    let mut entries = rank_by_distance(origin, records);

    entries.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max) = max_results {
        entries.truncate(max);
    }

    entries
}

/// Calculates distances and keeps only records within the radius,
/// sorted closest-first.
pub fn within_radius_km(
    origin: &GeoPoint,
    records: &[LocatedRecord],
    radius_km: f64,
) -> Vec<DistanceEntry> {
    let mut entries = rank_by_distance(origin, records);

    entries.retain(|e| e.distance_km <= radius_km);
    entries.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

#[inline]
fn entry_for(origin: &GeoPoint, record: &LocatedRecord) -> DistanceEntry {
    let distance_km = parse_point(&record.location)
        .map(|point| haversine_distance(origin, &point))
        .unwrap_or(f64::INFINITY);

    DistanceEntry {
        id: record.id.clone(),
        distance_km,
    }
}
