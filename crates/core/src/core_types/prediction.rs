//! Output records of the fire-behavior simulator, ML ensemble, and fusion layer

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::geo::GeoPoint;
use crate::core_types::risk::{EvacuationUrgency, RiskFactors, RiskLevel};

/// Crown fire involvement classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrownFireActivity {
    /// Surface fire only
    None,
    /// Intermittent torching of individual crowns
    Passive,
    /// Continuous crown involvement
    Active,
}

/// One concentric evacuation ring around a predicted ignition point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationZone {
    pub label: String,
    pub radius_miles: f64,
    pub urgency: EvacuationUrgency,
    /// Hours available to clear the ring before the front arrives
    pub time_to_evacuate: f64,
}

/// Downwind smoke transport estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmokeDispersion {
    /// Transport direction, degrees (downwind of station wind)
    pub direction_deg: f64,
    /// Downwind reach in km
    pub range_km: f64,
    /// Affected footprint in km²
    pub affected_area_km2: f64,
}

/// Output of the fire-behavior simulator. Immutable snapshot tied to the
/// input conditions at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireBehaviorPrediction {
    pub origin: GeoPoint,
    /// 16-vertex polygon approximating the projected fire perimeter
    pub fire_perimeter: Vec<GeoPoint>,
    /// Projected burned area over the simulation horizon, km²
    pub fire_area: f64,
    /// Fireline intensity, kW/m
    pub fire_intensity: f64,
    pub flame_length: f64,
    pub rate_of_spread: f64,
    /// Hours for the front to cover the innermost evacuation ring
    pub time_to_reach: f64,
    pub crown_fire_activity: CrownFireActivity,
    pub evacuation_zones: Vec<EvacuationZone>,
    pub evacuation_urgency: EvacuationUrgency,
    pub smoke_dispersion: SmokeDispersion,
    /// Combined FARSITE/`FlamMap`-style risk score, 0-100
    pub combined_risk: f64,
}

/// Raw sub-model outputs, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOutputs {
    pub risk: f64,
    pub spread: f64,
    pub ignition: f64,
    pub intensity: f64,
    pub evacuation: f64,
}

impl ModelOutputs {
    pub fn as_array(&self) -> [f64; 5] {
        [self.risk, self.spread, self.ignition, self.intensity, self.evacuation]
    }
}

/// Output of the ML ensemble predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsemblePrediction {
    /// Fused risk score, 0-100
    pub fire_risk: f64,
    /// Inter-model agreement, 0-100
    pub confidence: f64,
    /// Hours until predicted ignition
    pub time_to_ignition: f64,
    /// m/min
    pub spread_rate: f64,
    /// kW/m
    pub intensity: f64,
    pub evacuation_urgency: EvacuationUrgency,
    pub model_predictions: ModelOutputs,
}

/// How a fused prediction's risk score was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Ensemble and simulator both contributed
    Fused,
    /// Ensemble unavailable; the documented closed-form weather fallback
    /// supplied the score
    HeuristicFallback,
}

/// Where the sampler's coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleProvenance {
    /// Jittered around a known fire-prone zone
    FireZone,
    /// Uniform draw inside the boundary envelope
    Uniform,
    /// Degraded: retries exhausted or no boundary; region center used
    CenterFallback,
}

/// The final fused prediction record. Identity is `(region, date, index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedPrediction {
    pub region: String,
    pub date: NaiveDate,
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub risk_level: RiskLevel,
    /// Combined risk expressed as a probability in `[0, 1]`
    pub probability: f64,
    pub factors: RiskFactors,
    pub predicted_date: DateTime<Utc>,
    /// Ensemble confidence, 0-100 (0 when the fallback produced the score)
    pub confidence: f64,
    pub provenance: Provenance,
    pub sample_provenance: SampleProvenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_outputs_array_order() {
        let outputs = ModelOutputs {
            risk: 0.1,
            spread: 0.2,
            ignition: 0.3,
            intensity: 0.4,
            evacuation: 0.5,
        };
        assert_eq!(outputs.as_array(), [0.1, 0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_provenance_serializes_snake_case() {
        let json = serde_json::to_string(&Provenance::HeuristicFallback).unwrap();
        assert_eq!(json, "\"heuristic_fallback\"");
        let json = serde_json::to_string(&SampleProvenance::CenterFallback).unwrap();
        assert_eq!(json, "\"center_fallback\"");
    }
}
