//! Geofence containment checks.
//!
//! A geofence is a region of interest drawn on the map (a patient location
//! boundary) — either a circle or a polygon. The application stores the
//! geometry with the group record; this module only answers "is this point
//! inside?".

use crate::{haversine_distance_meters, Circle, GeoPoint};

/// A drawn map region: circular or polygonal.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "geometry", rename_all = "lowercase")]
pub enum Geofence {
    /// Circle with a radius in meters
    Circle(Circle),
    /// Polygon vertex ring, open or closed
    Polygon(Vec<GeoPoint>),
}

impl Geofence {
    /// Returns true if the point lies inside the geofence.
    ///
    /// Circles compare great-circle distance against the radius (boundary
    /// points count as inside). Polygons use an even-odd ray cast in plain
    /// lat/lng space, consistent with the flat-earth conventions used for
    /// area and circle rasterization; a polygon with fewer than 3 vertices
    /// contains nothing.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        match self {
            Geofence::Circle(circle) => {
                haversine_distance_meters(&circle.center, point) <= circle.radius_meters
            }
            Geofence::Polygon(ring) => point_in_ring(point, ring),
        }
    }
}

/// Even-odd ray cast: count edge crossings of a horizontal ray to the east.
fn point_in_ring(point: &GeoPoint, ring: &[GeoPoint]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (px, py) = (point.longitude, point.latitude);
    let mut inside = false;

    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);

        let crosses = (yi > py) != (yj > py)
            && px < (xj - xi) * (py - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}
