//! Compiled-in geography tables for the US states served by default
//!
//! Boundaries are coarse land polygons (10-15 vertices) adequate for
//! containment-constrained sampling, not survey-grade borders. Fire-prone
//! zones are named after the real corridors they approximate; risk
//! multipliers bias sampling density, nothing else.
//!
//! A deployment can replace all of this via `RegionCatalog::from_json_reader`
//! without touching code.

use crate::core_types::geo::GeoPoint;
use crate::geography::catalog::{
    Exclusion, FireProneZone, LandBoundary, Region, RegionCatalog, RegionEntry, SubRegion,
};

fn p(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng)
}

fn sub(name: &str, lat: f64, lng: f64) -> SubRegion {
    SubRegion {
        name: name.to_string(),
        location: p(lat, lng),
    }
}

fn zone(name: &str, lat: f64, lng: f64, risk_multiplier: f64) -> FireProneZone {
    FireProneZone {
        name: name.to_string(),
        location: p(lat, lng),
        risk_multiplier,
    }
}

fn excl(name: &str, min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Exclusion {
    Exclusion {
        name: name.to_string(),
        min_lat,
        max_lat,
        min_lng,
        max_lng,
    }
}

fn california() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "CA".to_string(),
            name: "California".to_string(),
            center: p(36.7783, -119.4179),
            zoom: 6.0,
            sub_regions: vec![
                sub("Sacramento", 38.5816, -121.4944),
                sub("Los Angeles", 34.0522, -118.2437),
                sub("San Diego", 32.7157, -117.1611),
                sub("Fresno", 36.7378, -119.7871),
                sub("Redding", 40.5865, -122.3917),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(42.0, -124.2),
                p(42.0, -120.0),
                p(39.0, -120.0),
                p(35.0, -114.63),
                p(34.3, -114.13),
                p(32.7, -114.5),
                p(32.53, -117.12),
                p(33.5, -118.3),
                p(34.45, -120.5),
                p(35.5, -121.3),
                p(36.5, -121.9),
                p(38.0, -123.0),
                p(40.0, -124.1),
            ],
            exclusions: vec![
                excl("San Francisco Bay", 37.45, 38.15, -122.52, -121.95),
                excl("Lake Tahoe", 38.9, 39.25, -120.16, -119.93),
                excl("Salton Sea", 33.1, 33.55, -116.1, -115.6),
            ],
        }),
        fire_zones: vec![
            zone("Butte County Foothills", 39.76, -121.62, 1.9),
            zone("Shasta-Trinity", 40.6, -122.4, 1.7),
            zone("Napa Valley", 38.5, -122.3, 1.6),
            zone("Sierra Foothills", 38.9, -120.8, 1.5),
            zone("San Bernardino Mountains", 34.2, -117.1, 1.6),
            zone("Santa Monica Mountains", 34.1, -118.7, 1.8),
            zone("Cleveland Backcountry", 32.9, -116.6, 1.5),
        ],
        base_prediction_count: 9,
    }
}

fn oregon() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "OR".to_string(),
            name: "Oregon".to_string(),
            center: p(43.8041, -120.5542),
            zoom: 6.0,
            sub_regions: vec![
                sub("Portland", 45.5152, -122.6784),
                sub("Eugene", 44.0521, -123.0868),
                sub("Bend", 44.0582, -121.3153),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(46.2, -124.0),
                p(46.2, -116.9),
                p(42.0, -117.0),
                p(42.0, -124.4),
                p(44.0, -124.15),
            ],
            exclusions: vec![excl("Crater Lake", 42.86, 43.02, -122.2, -122.0)],
        }),
        fire_zones: vec![
            zone("Rogue Valley", 42.4, -122.9, 1.7),
            zone("Deschutes Plateau", 44.06, -121.3, 1.5),
            zone("Willamette Foothills", 44.5, -122.5, 1.4),
            zone("Umatilla Forest", 45.4, -118.5, 1.3),
        ],
        base_prediction_count: 5,
    }
}

fn washington() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "WA".to_string(),
            name: "Washington".to_string(),
            center: p(47.7511, -120.7401),
            zoom: 6.0,
            sub_regions: vec![
                sub("Seattle", 47.6062, -122.3321),
                sub("Spokane", 47.6588, -117.4260),
                sub("Yakima", 46.6021, -120.5059),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(49.0, -123.3),
                p(49.0, -117.0),
                p(45.6, -116.9),
                p(45.6, -124.0),
                p(47.4, -124.7),
                p(48.4, -124.7),
            ],
            exclusions: vec![excl("Puget Sound", 47.0, 48.8, -123.1, -122.2)],
        }),
        fire_zones: vec![
            zone("Wenatchee Valley", 47.42, -120.31, 1.6),
            zone("Spokane Pine Belt", 47.65, -117.42, 1.4),
            zone("Yakima Uplands", 46.6, -120.5, 1.6),
            zone("Okanogan Highlands", 48.4, -119.5, 1.5),
        ],
        base_prediction_count: 5,
    }
}

fn nevada() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "NV".to_string(),
            name: "Nevada".to_string(),
            center: p(38.8026, -116.4194),
            zoom: 6.0,
            sub_regions: vec![
                sub("Las Vegas", 36.1699, -115.1398),
                sub("Reno", 39.5296, -119.8138),
                sub("Elko", 40.8324, -115.7631),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(42.0, -120.0),
                p(42.0, -114.04),
                p(36.1, -114.04),
                p(35.0, -114.63),
                p(39.0, -120.0),
            ],
            exclusions: vec![
                excl("Lake Tahoe East", 38.9, 39.2, -120.0, -119.88),
                excl("Pyramid Lake", 39.9, 40.15, -119.65, -119.4),
            ],
        }),
        fire_zones: vec![
            zone("Reno Foothills", 39.55, -119.8, 1.6),
            zone("Carson Range", 39.2, -119.75, 1.5),
            zone("Elko Sagebrush", 40.8, -115.76, 1.3),
            zone("Spring Mountains", 36.3, -115.7, 1.4),
        ],
        base_prediction_count: 4,
    }
}

fn arizona() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "AZ".to_string(),
            name: "Arizona".to_string(),
            center: p(34.0489, -111.0937),
            zoom: 6.5,
            sub_regions: vec![
                sub("Phoenix", 33.4484, -112.0740),
                sub("Tucson", 32.2226, -110.9747),
                sub("Flagstaff", 35.1983, -111.6513),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(37.0, -114.05),
                p(37.0, -109.05),
                p(31.33, -109.05),
                p(31.33, -111.07),
                p(32.49, -114.81),
                p(36.0, -114.6),
            ],
            exclusions: vec![excl("Lake Powell", 36.87, 37.0, -111.6, -110.65)],
        }),
        fire_zones: vec![
            zone("Prescott Basin", 34.54, -112.47, 1.7),
            zone("Coconino Plateau", 35.2, -111.65, 1.6),
            zone("Mogollon Rim", 34.3, -110.9, 1.6),
            zone("Catalina Foothills", 32.4, -110.8, 1.4),
        ],
        base_prediction_count: 6,
    }
}

fn colorado() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "CO".to_string(),
            name: "Colorado".to_string(),
            center: p(39.5501, -105.7821),
            zoom: 6.5,
            sub_regions: vec![
                sub("Denver", 39.7392, -104.9903),
                sub("Colorado Springs", 38.8339, -104.8214),
                sub("Grand Junction", 39.0639, -108.5506),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(41.0, -109.05),
                p(41.0, -102.05),
                p(37.0, -102.05),
                p(37.0, -109.05),
            ],
            exclusions: vec![],
        }),
        fire_zones: vec![
            zone("Boulder Foothills", 40.0, -105.35, 1.6),
            zone("Pikes Peak Front", 38.9, -104.95, 1.6),
            zone("San Juan Forest", 37.3, -107.88, 1.5),
            zone("Roaring Fork", 39.55, -107.32, 1.5),
        ],
        base_prediction_count: 5,
    }
}

fn texas() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "TX".to_string(),
            name: "Texas".to_string(),
            center: p(31.9686, -99.9018),
            zoom: 5.5,
            sub_regions: vec![
                sub("Austin", 30.2672, -97.7431),
                sub("Dallas", 32.7767, -96.7970),
                sub("El Paso", 31.7619, -106.4850),
                sub("Houston", 29.7604, -95.3698),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(36.5, -103.04),
                p(36.5, -100.0),
                p(34.56, -100.0),
                p(33.72, -96.6),
                p(33.0, -94.04),
                p(29.7, -93.85),
                p(28.0, -96.5),
                p(26.0, -97.2),
                p(26.0, -99.0),
                p(29.3, -100.9),
                p(31.0, -104.5),
                p(31.8, -106.5),
                p(32.0, -106.62),
                p(32.0, -103.06),
            ],
            exclusions: vec![],
        }),
        fire_zones: vec![
            zone("Bastrop Lost Pines", 30.11, -97.3, 1.7),
            zone("Hill Country", 30.3, -99.0, 1.5),
            zone("Possum Kingdom", 32.9, -98.4, 1.5),
            zone("Big Bend Foothills", 30.9, -103.3, 1.4),
        ],
        base_prediction_count: 7,
    }
}

fn florida() -> RegionEntry {
    RegionEntry {
        region: Region {
            code: "FL".to_string(),
            name: "Florida".to_string(),
            center: p(27.6648, -81.5158),
            zoom: 6.5,
            sub_regions: vec![
                sub("Orlando", 28.5383, -81.3792),
                sub("Miami", 25.7617, -80.1918),
                sub("Tampa", 27.9506, -82.4572),
                sub("Tallahassee", 30.4383, -84.2807),
            ],
        },
        boundary: Some(LandBoundary {
            vertices: vec![
                p(31.0, -87.6),
                p(31.0, -82.2),
                p(30.7, -81.5),
                p(29.0, -80.9),
                p(26.9, -80.0),
                p(25.2, -80.4),
                p(25.1, -81.2),
                p(26.7, -82.3),
                p(27.9, -82.85),
                p(29.2, -83.2),
                p(29.9, -84.4),
                p(30.3, -86.4),
                p(30.4, -87.5),
            ],
            exclusions: vec![excl("Lake Okeechobee", 26.7, 27.2, -81.1, -80.6)],
        }),
        fire_zones: vec![
            zone("Ocala Scrub", 29.17, -81.8, 1.5),
            zone("Big Cypress", 26.0, -81.2, 1.4),
            zone("Osceola Flatwoods", 30.2, -82.4, 1.4),
        ],
        base_prediction_count: 6,
    }
}

/// The default compiled-in catalog.
pub fn builtin_us_states() -> RegionCatalog {
    RegionCatalog::from_entries(vec![
        california(),
        oregon(),
        washington(),
        nevada(),
        arizona(),
        colorado(),
        texas(),
        florida(),
    ])
}
