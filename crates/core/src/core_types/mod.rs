//! Core types and utilities

pub mod fuel;
pub mod geo;
pub mod prediction;
pub mod risk;
pub mod seeded;
pub mod weather;

pub use fuel::FuelModel;
pub use geo::{BoundingBox, GeoPoint};
pub use prediction::{
    CrownFireActivity, EnsemblePrediction, EvacuationZone, FireBehaviorPrediction,
    FusedPrediction, ModelOutputs, Provenance, SampleProvenance, SmokeDispersion,
};
pub use risk::{
    recommendations_for, EnvironmentalFactors, EvacuationUrgency, RiskAssessment, RiskFactors,
    RiskLevel,
};
pub use seeded::{seeded_in_range, seeded_random};
pub use weather::WeatherSnapshot;
