//! Fire-Risk Fusion Core Library
//!
//! Multi-model fire-risk fusion and spatial sampling for wildfire
//! monitoring. Combines three independent estimators — a weather-driven
//! risk heuristic, a closed-form fire-behavior simulator, and an ML
//! ensemble — into ranked per-region prediction lists.
//!
//! ## Determinism
//!
//! Everything downstream of a string seed is reproducible: sampled
//! coordinates, per-day prediction counts, and synthetic weather all derive
//! from `seeded_random`, so the same region and calendar day always produce
//! the same list.

// Core types and utilities
pub mod core_types;

// Static geography: catalog, boundaries, fire-prone zones
pub mod geography;

// Deterministic land-constrained sampling
pub mod sampling;

// The three estimators
pub mod behavior;
pub mod ensemble;
pub mod risk;

// Fusion engine and cache
pub mod fusion;

// Ambient concerns
pub mod config;
pub mod error;
pub mod weather;

// Re-export core types
pub use core_types::{
    EnsemblePrediction, EnvironmentalFactors, EvacuationUrgency, FireBehaviorPrediction,
    FuelModel, FusedPrediction, GeoPoint, Provenance, RiskAssessment, RiskLevel,
    SampleProvenance, WeatherSnapshot,
};

// Re-export the main surfaces
pub use behavior::{simulate, BehaviorInput};
pub use config::{CacheConfig, EngineConfig};
pub use ensemble::{BaseFeatures, EnsemblePredictor, ModelRegistry, RiskModel, SubModel};
pub use error::FusionError;
pub use fusion::{cache::TtlCache, FusionEngine};
pub use geography::{builtin_us_states, is_point_in_region, RegionCatalog};
pub use risk::{assess_risk, fire_weather_index, weather_factor, FireWeatherIndex};
pub use sampling::{sample_location, SampledLocation};
pub use weather::{SeededWeather, SimulatedWeather, WeatherProvider};
