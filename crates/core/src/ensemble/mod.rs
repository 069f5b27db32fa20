//! ML ensemble predictor
//!
//! Wraps independently-trained sub-models behind a uniform capability
//! interface and fuses their scalar outputs into one prediction with an
//! agreement-based confidence. The engine never knows how a model was
//! trained or loaded; models are registered explicitly at startup.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core_types::prediction::{EnsemblePrediction, ModelOutputs};
use crate::core_types::risk::EvacuationUrgency;
use crate::error::FusionError;

/// Number of features in the shared base vector.
pub const BASE_FEATURE_COUNT: usize = 10;

/// A trained model exposed as an opaque scoring capability.
///
/// Implementations must be deterministic given identical weights and input;
/// outputs are expected in `[0, 1]` and are clamped on the way in.
pub trait RiskModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> f64;
}

/// The five ensemble members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubModel {
    Risk,
    Spread,
    Ignition,
    Intensity,
    Evacuation,
}

impl SubModel {
    pub const ALL: [SubModel; 5] = [
        SubModel::Risk,
        SubModel::Spread,
        SubModel::Ignition,
        SubModel::Intensity,
        SubModel::Evacuation,
    ];

    /// Registry wire name, matching the trained-model artifact names.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SubModel::Risk => "wildfire-risk",
            SubModel::Spread => "fire-spread",
            SubModel::Ignition => "ignition-probability",
            SubModel::Intensity => "fire-intensity",
            SubModel::Evacuation => "evacuation-urgency",
        }
    }

    /// Indices into the base feature vector consumed by this member.
    /// The subsets are disjoint: no feature feeds two members.
    pub fn feature_indices(&self) -> &'static [usize] {
        match self {
            SubModel::Risk => &[0, 1],       // temperature, humidity
            SubModel::Spread => &[2, 3],     // wind_speed, slope
            SubModel::Ignition => &[6, 7],   // drought_index, days_since_rain
            SubModel::Intensity => &[5, 4],  // fuel_moisture, elevation
            SubModel::Evacuation => &[8, 9], // vegetation_density, population_proximity
        }
    }
}

/// The shared base feature vector, with a fixed index layout:
///
/// | index | feature |
/// |-------|---------|
/// | 0 | temperature (°C) |
/// | 1 | humidity (%) |
/// | 2 | wind_speed (km/h) |
/// | 3 | slope (degrees) |
/// | 4 | elevation (m) |
/// | 5 | fuel_moisture (%) |
/// | 6 | drought_index (0-10) |
/// | 7 | days_since_rain |
/// | 8 | vegetation_density (0-1) |
/// | 9 | population_proximity (0-1) |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFeatures {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub slope: f64,
    pub elevation: f64,
    pub fuel_moisture: f64,
    pub drought_index: f64,
    pub days_since_rain: f64,
    pub vegetation_density: f64,
    pub population_proximity: f64,
}

impl BaseFeatures {
    pub fn as_vector(&self) -> [f64; BASE_FEATURE_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.slope,
            self.elevation,
            self.fuel_moisture,
            self.drought_index,
            self.days_since_rain,
            self.vegetation_density,
            self.population_proximity,
        ]
    }
}

/// Explicit sub-model registry. Models are injected at construction; there
/// is no dynamic loading.
#[derive(Default)]
pub struct ModelRegistry {
    models: FxHashMap<SubModel, Box<dyn RiskModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: SubModel, model: Box<dyn RiskModel>) {
        self.models.insert(kind, model);
    }

    pub fn with_model(mut self, kind: SubModel, model: Box<dyn RiskModel>) -> Self {
        self.register(kind, model);
        self
    }

    pub fn is_complete(&self) -> bool {
        SubModel::ALL.iter().all(|k| self.models.contains_key(k))
    }

    /// Look up a registered model.
    ///
    /// # Errors
    /// `ModelUnavailable` when the member was never registered; the fusion
    /// layer recovers from this with its documented fallback.
    fn get(&self, kind: SubModel) -> Result<&dyn RiskModel, FusionError> {
        self.models
            .get(&kind)
            .map(|m| &**m)
            .ok_or_else(|| FusionError::ModelUnavailable(kind.wire_name()))
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered: Vec<&str> = SubModel::ALL
            .iter()
            .filter(|k| self.models.contains_key(*k))
            .map(|k| k.wire_name())
            .collect();
        f.debug_struct("ModelRegistry").field("registered", &registered).finish()
    }
}

/// Fuses the registered sub-models into one prediction.
#[derive(Debug, Default)]
pub struct EnsemblePredictor {
    registry: ModelRegistry,
}

impl EnsemblePredictor {
    pub fn new(registry: ModelRegistry) -> Self {
        EnsemblePredictor { registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Predict from a typed feature set (length mismatches are impossible
    /// by construction).
    ///
    /// # Errors
    /// `ModelUnavailable` when any ensemble member is missing.
    pub fn predict(&self, features: &BaseFeatures) -> Result<EnsemblePrediction, FusionError> {
        self.predict_vector(&features.as_vector())
    }

    /// Predict from a raw base feature vector.
    ///
    /// # Errors
    /// `InvalidInput` when the vector length differs from
    /// [`BASE_FEATURE_COUNT`]; `ModelUnavailable` when a member is missing.
    pub fn predict_vector(&self, base: &[f64]) -> Result<EnsemblePrediction, FusionError> {
        if base.len() != BASE_FEATURE_COUNT {
            return Err(FusionError::InvalidInput {
                model: "ensemble-base",
                expected: BASE_FEATURE_COUNT,
                actual: base.len(),
            });
        }

        let run = |kind: SubModel| -> Result<f64, FusionError> {
            let model = self.registry.get(kind).inspect_err(|_| {
                warn!(model = kind.wire_name(), "ensemble member missing, prediction degrades");
            })?;
            let sub: Vec<f64> = kind.feature_indices().iter().map(|&i| base[i]).collect();
            Ok(model.predict(&sub).clamp(0.0, 1.0))
        };

        let outputs = ModelOutputs {
            risk: run(SubModel::Risk)?,
            spread: run(SubModel::Spread)?,
            ignition: run(SubModel::Ignition)?,
            intensity: run(SubModel::Intensity)?,
            evacuation: run(SubModel::Evacuation)?,
        };

        Ok(fuse(outputs))
    }
}

/// Combine raw member outputs into the ensemble record.
fn fuse(outputs: ModelOutputs) -> EnsemblePrediction {
    let time_to_ignition = if outputs.ignition > 0.5 {
        (1.0 - outputs.ignition) * 48.0
    } else {
        72.0
    };

    EnsemblePrediction {
        fire_risk: outputs.risk * 100.0,
        confidence: confidence(&outputs.as_array()),
        time_to_ignition,
        spread_rate: outputs.spread * 50.0,
        intensity: outputs.intensity * 1000.0,
        evacuation_urgency: EvacuationUrgency::from_unit_interval(outputs.evacuation),
        model_predictions: outputs,
    }
}

/// Agreement-based confidence: `max(0, 1 - stddev(outputs)) * 100`.
///
/// A proxy for epistemic uncertainty, not a calibrated probability: members
/// that agree closely read as high confidence.
fn confidence(outputs: &[f64]) -> f64 {
    let n = outputs.len() as f64;
    let mean = outputs.iter().sum::<f64>() / n;
    let variance = outputs.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (1.0 - variance.sqrt()).max(0.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Model that returns a fixed score regardless of features.
    struct Constant(f64);

    impl RiskModel for Constant {
        fn predict(&self, _features: &[f64]) -> f64 {
            self.0
        }
    }

    fn registry_of(values: [f64; 5]) -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        for (kind, value) in SubModel::ALL.into_iter().zip(values) {
            registry.register(kind, Box::new(Constant(value)));
        }
        registry
    }

    fn features() -> BaseFeatures {
        BaseFeatures {
            temperature: 32.0,
            humidity: 25.0,
            wind_speed: 30.0,
            slope: 20.0,
            elevation: 600.0,
            fuel_moisture: 10.0,
            drought_index: 7.0,
            days_since_rain: 18.0,
            vegetation_density: 0.7,
            population_proximity: 0.4,
        }
    }

    #[test]
    fn test_feature_subsets_are_disjoint_and_in_bounds() {
        let mut seen = [false; BASE_FEATURE_COUNT];
        for kind in SubModel::ALL {
            for &idx in kind.feature_indices() {
                assert!(idx < BASE_FEATURE_COUNT, "{:?} index {idx} out of bounds", kind);
                assert!(!seen[idx], "feature {idx} feeds two members");
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn test_agreeing_models_yield_full_confidence() {
        let predictor = EnsemblePredictor::new(registry_of([0.9; 5]));
        let prediction = predictor.predict(&features()).unwrap();
        assert_relative_eq!(prediction.confidence, 100.0, epsilon = 1e-9);
        assert_relative_eq!(prediction.fire_risk, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_disagreeing_models_yield_lower_confidence() {
        let predictor = EnsemblePredictor::new(registry_of([0.1, 0.9, 0.1, 0.9, 0.1]));
        let prediction = predictor.predict(&features()).unwrap();
        assert!(
            prediction.confidence < 70.0,
            "confidence {} should drop well below agreement",
            prediction.confidence
        );
        assert!((0.0..=100.0).contains(&prediction.confidence));
    }

    #[test]
    fn test_confidence_always_bounded() {
        for spread in [[0.0, 1.0, 0.0, 1.0, 0.0], [0.5; 5], [1.0; 5], [0.0; 5]] {
            let predictor = EnsemblePredictor::new(registry_of(spread));
            let prediction = predictor.predict(&features()).unwrap();
            assert!(
                (0.0..=100.0).contains(&prediction.confidence),
                "confidence {} out of bounds for {:?}",
                prediction.confidence,
                spread
            );
        }
    }

    #[test]
    fn test_output_scaling() {
        let predictor = EnsemblePredictor::new(registry_of([0.8, 0.4, 0.75, 0.2, 0.55]));
        let prediction = predictor.predict(&features()).unwrap();
        assert_relative_eq!(prediction.fire_risk, 80.0, epsilon = 1e-9);
        assert_relative_eq!(prediction.spread_rate, 20.0, epsilon = 1e-9);
        // ignition 0.75 > 0.5: (1 - 0.75) * 48 = 12 hours
        assert_relative_eq!(prediction.time_to_ignition, 12.0, epsilon = 1e-9);
        assert_relative_eq!(prediction.intensity, 200.0, epsilon = 1e-9);
        // floor(0.55 * 5) = 2 → Medium
        assert_eq!(prediction.evacuation_urgency, EvacuationUrgency::Medium);
    }

    #[test]
    fn test_low_ignition_probability_reads_72_hours() {
        let predictor = EnsemblePredictor::new(registry_of([0.5, 0.5, 0.3, 0.5, 0.5]));
        let prediction = predictor.predict(&features()).unwrap();
        assert_relative_eq!(prediction.time_to_ignition, 72.0, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_member_is_model_unavailable() {
        let registry = ModelRegistry::new()
            .with_model(SubModel::Risk, Box::new(Constant(0.5)))
            .with_model(SubModel::Spread, Box::new(Constant(0.5)));
        assert!(!registry.is_complete());
        let predictor = EnsemblePredictor::new(registry);
        let err = predictor.predict(&features()).unwrap_err();
        assert_eq!(err, FusionError::ModelUnavailable("ignition-probability"));
    }

    #[test]
    fn test_wrong_vector_length_is_invalid_input() {
        let predictor = EnsemblePredictor::new(registry_of([0.5; 5]));
        let err = predictor.predict_vector(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(
            matches!(err, FusionError::InvalidInput { expected: 10, actual: 3, .. }),
            "got {err:?}"
        );
    }
}
