//! Region catalog: static geography tables keyed by region code
//!
//! Loaded once at startup and never mutated. The compiled-in US state tables
//! live in `builtin`; a catalog can also be loaded from JSON so regions can
//! be added without code changes.

use std::io::Read;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core_types::geo::GeoPoint;
use crate::error::FusionError;

/// A named anchor point inside a region (population center / weather
/// station site).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRegion {
    pub name: String,
    pub location: GeoPoint,
}

/// Immutable per-region record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub center: GeoPoint,
    pub zoom: f64,
    pub sub_regions: Vec<SubRegion>,
}

/// Rectangular cutout subtracted from a land boundary (ocean, bay, lake).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Exclusion {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

/// Closed land polygon for a region, with its exclusion rules.
///
/// The vertex order is used as given by the ray-casting test; no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandBoundary {
    pub vertices: Vec<GeoPoint>,
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
}

/// A known fire-prone zone used to bias sampling. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireProneZone {
    pub name: String,
    pub location: GeoPoint,
    pub risk_multiplier: f64,
}

/// Serialized form of one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: Region,
    #[serde(default)]
    pub boundary: Option<LandBoundary>,
    #[serde(default)]
    pub fire_zones: Vec<FireProneZone>,
    /// Baseline number of predictions generated per day
    pub base_prediction_count: u32,
}

/// The full static geography catalog, keyed by region code.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    entries: FxHashMap<String, RegionEntry>,
}

impl RegionCatalog {
    /// Build a catalog from entries; later duplicates replace earlier ones.
    pub fn from_entries(entries: Vec<RegionEntry>) -> Self {
        let mut map = FxHashMap::default();
        for entry in entries {
            map.insert(entry.region.code.clone(), entry);
        }
        RegionCatalog { entries: map }
    }

    /// Load a catalog from a JSON array of entries.
    ///
    /// # Errors
    /// Returns `CatalogParse` if the document is not a valid entry list.
    pub fn from_json_str(json: &str) -> Result<Self, FusionError> {
        let entries: Vec<RegionEntry> =
            serde_json::from_str(json).map_err(|e| FusionError::CatalogParse(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Load a catalog from any JSON reader (config file, embedded asset).
    ///
    /// # Errors
    /// Returns `CatalogParse` if reading or parsing fails.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, FusionError> {
        let entries: Vec<RegionEntry> =
            serde_json::from_reader(reader).map_err(|e| FusionError::CatalogParse(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Serialize the catalog back to the JSON entry-list form.
    pub fn to_json_string(&self) -> String {
        let mut entries: Vec<&RegionEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.region.code.cmp(&b.region.code));
        // Serialization of plain data records cannot fail
        serde_json::to_string_pretty(&entries).unwrap_or_default()
    }

    pub fn region_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Look up a region record.
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog — region lookups
    /// fail fast rather than defaulting.
    pub fn region(&self, code: &str) -> Result<&Region, FusionError> {
        self.entries
            .get(code)
            .map(|e| &e.region)
            .ok_or_else(|| FusionError::UnknownRegion(code.to_string()))
    }

    /// Land boundary for a known region. `None` means the region exists but
    /// has no polygon data (a fallback case, not an error).
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog.
    pub fn boundary(&self, code: &str) -> Result<Option<&LandBoundary>, FusionError> {
        self.entries
            .get(code)
            .map(|e| e.boundary.as_ref())
            .ok_or_else(|| FusionError::UnknownRegion(code.to_string()))
    }

    /// Fire-prone zones for a known region (possibly empty).
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog.
    pub fn fire_zones(&self, code: &str) -> Result<&[FireProneZone], FusionError> {
        self.entries
            .get(code)
            .map(|e| e.fire_zones.as_slice())
            .ok_or_else(|| FusionError::UnknownRegion(code.to_string()))
    }

    /// Baseline daily prediction count for a known region.
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog.
    pub fn base_prediction_count(&self, code: &str) -> Result<u32, FusionError> {
        self.entries
            .get(code)
            .map(|e| e.base_prediction_count)
            .ok_or_else(|| FusionError::UnknownRegion(code.to_string()))
    }

    /// Name of the sub-region nearest to a point, if the region has any.
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog.
    pub fn nearest_sub_region(&self, code: &str, point: &GeoPoint) -> Result<Option<&SubRegion>, FusionError> {
        let region = self.region(code)?;
        Ok(region.sub_regions.iter().min_by(|a, b| {
            let da = a.location.distance_km(point);
            let db = b.location.distance_km(point);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::builtin::builtin_us_states;

    #[test]
    fn test_unknown_region_fails_fast() {
        let catalog = builtin_us_states();
        assert!(catalog.contains("CA"));
        assert!(!catalog.contains("ZZ"));
        assert!(matches!(
            catalog.region("ZZ"),
            Err(FusionError::UnknownRegion(code)) if code == "ZZ"
        ));
        assert!(matches!(catalog.boundary("ZZ"), Err(FusionError::UnknownRegion(_))));
        assert!(matches!(catalog.fire_zones("ZZ"), Err(FusionError::UnknownRegion(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = builtin_us_states();
        let json = catalog.to_json_string();
        let reloaded = RegionCatalog::from_json_str(&json).unwrap();

        assert_eq!(catalog.region_codes(), reloaded.region_codes());
        let ca = catalog.region("CA").unwrap();
        let ca2 = reloaded.region("CA").unwrap();
        assert_eq!(ca, ca2);
        assert_eq!(
            catalog.boundary("CA").unwrap().unwrap().vertices.len(),
            reloaded.boundary("CA").unwrap().unwrap().vertices.len()
        );
    }

    #[test]
    fn test_catalog_parse_error() {
        let err = RegionCatalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, FusionError::CatalogParse(_)));
    }

    #[test]
    fn test_nearest_sub_region() {
        let catalog = builtin_us_states();
        // A point near Sacramento should resolve to the Sacramento anchor
        let point = GeoPoint::new(38.6, -121.5);
        let nearest = catalog.nearest_sub_region("CA", &point).unwrap().unwrap();
        assert_eq!(nearest.name, "Sacramento");
    }
}
