//! Point-in-region classification
//!
//! Standard ray-casting parity test against a region's land polygon, then
//! the region's rectangular exclusion cutouts. Region codes without a
//! defined boundary classify as outside unconditionally (fail closed).

use crate::core_types::geo::GeoPoint;
use crate::geography::catalog::RegionCatalog;

/// Edge-crossing parity test.
///
/// Treats vertices as (lat, lng) pairs in the order given; the polygon is
/// implicitly closed between the last and first vertex. Points exactly on an
/// edge may classify either way, which is acceptable at the coarse scale of
/// the boundary tables.
pub fn point_in_polygon(lat: f64, lng: f64, vertices: &[GeoPoint]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (lat_i, lng_i) = (vertices[i].latitude, vertices[i].longitude);
        let (lat_j, lng_j) = (vertices[j].latitude, vertices[j].longitude);

        let crosses = (lat_i > lat) != (lat_j > lat);
        if crosses {
            let intersect_lng = (lng_j - lng_i) * (lat - lat_i) / (lat_j - lat_i) + lng_i;
            if lng < intersect_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Is the point on land inside the region?
///
/// Polygon containment first, then exclusion rectangles (inside any cutout
/// means outside the region). Unknown region codes and regions without a
/// boundary both return `false` — this classifier never raises; the
/// fail-fast `UnknownRegion` check belongs to the catalog lookups at the
/// API boundary.
pub fn is_point_in_region(catalog: &RegionCatalog, lat: f64, lng: f64, code: &str) -> bool {
    let Ok(Some(boundary)) = catalog.boundary(code) else {
        return false;
    };

    if !point_in_polygon(lat, lng, &boundary.vertices) {
        return false;
    }

    !boundary.exclusions.iter().any(|e| e.contains(lat, lng))
}
