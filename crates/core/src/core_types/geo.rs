//! Geographic primitives shared by the sampler, estimators, and fusion layer

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers (spherical approximation).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 coordinate. Immutable once produced by the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Great-circle distance to another point in kilometers (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlng = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// Axis-aligned latitude/longitude envelope of a vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Compute the envelope of a non-empty vertex list.
    ///
    /// Returns `None` for an empty list; a boundary with no vertices cannot
    /// contain anything.
    pub fn of(vertices: &[GeoPoint]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bbox = BoundingBox {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        for v in &vertices[1..] {
            bbox.min_lat = bbox.min_lat.min(v.latitude);
            bbox.max_lat = bbox.max_lat.max(v.latitude);
            bbox.min_lng = bbox.min_lng.min(v.longitude);
            bbox.max_lng = bbox.max_lng.max(v.longitude);
        }
        Some(bbox)
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}
