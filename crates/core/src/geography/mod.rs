//! Static geography: region catalog, land boundaries, fire-prone zones

pub mod builtin;
pub mod catalog;
pub mod containment;

pub use builtin::builtin_us_states;
pub use catalog::{
    Exclusion, FireProneZone, LandBoundary, Region, RegionCatalog, RegionEntry, SubRegion,
};
pub use containment::{is_point_in_region, point_in_polygon};
