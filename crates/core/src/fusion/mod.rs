//! Fusion engine: deterministic per-region prediction lists
//!
//! Combines the ML ensemble, the fire-behavior simulator, and the weather
//! heuristic into ranked `FusedPrediction` lists, cached per region with a
//! time-boxed TTL. All randomness is seed-derived: the same region and
//! calendar day always produce the same list.
//!
//! The engine is built by explicit dependency construction — catalog,
//! ensemble, weather provider, and config are injected; there are no
//! process-wide singletons.

pub mod cache;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::behavior::{simulate, BehaviorInput};
use crate::config::EngineConfig;
use crate::core_types::fuel::FuelModel;
use crate::core_types::geo::GeoPoint;
use crate::core_types::prediction::{FusedPrediction, Provenance};
use crate::core_types::risk::{EnvironmentalFactors, RiskAssessment, RiskFactors, RiskLevel};
use crate::core_types::seeded::{seeded_in_range, seeded_random};
use crate::core_types::weather::WeatherSnapshot;
use crate::ensemble::{BaseFeatures, EnsemblePredictor};
use crate::error::FusionError;
use crate::fusion::cache::TtlCache;
use crate::geography::RegionCatalog;
use crate::risk::{assess_risk, weather_factor};
use crate::sampling::sample_location;
use crate::weather::WeatherProvider;

/// Daily count multiplier band: base counts scale by [0.7, 1.3] per
/// calendar day.
const COUNT_MULTIPLIER_MIN: f64 = 0.7;
const COUNT_MULTIPLIER_SPAN: f64 = 0.6;

/// Weights of the final fusion.
const ENSEMBLE_WEIGHT: f64 = 0.6;
const BEHAVIOR_WEIGHT: f64 = 0.4;

pub struct FusionEngine {
    catalog: RegionCatalog,
    ensemble: EnsemblePredictor,
    weather: Box<dyn WeatherProvider>,
    cache: TtlCache<Vec<FusedPrediction>>,
    config: EngineConfig,
    pool: Option<rayon::ThreadPool>,
}

impl FusionEngine {
    /// Build an engine from its dependencies.
    ///
    /// When `config.concurrency` is set, per-location work runs on a
    /// dedicated pool of that width; if the pool cannot be built the engine
    /// degrades to the global pool with a warning.
    pub fn new(
        catalog: RegionCatalog,
        ensemble: EnsemblePredictor,
        weather: Box<dyn WeatherProvider>,
        config: EngineConfig,
    ) -> Self {
        if !ensemble.registry().is_complete() {
            warn!("ensemble registry incomplete; predictions will use the weather fallback");
        }

        let pool = config.concurrency.and_then(|width| {
            match rayon::ThreadPoolBuilder::new().num_threads(width).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!("failed to build bounded pool ({e}), using the global pool");
                    None
                }
            }
        });

        FusionEngine {
            catalog,
            ensemble,
            weather,
            cache: TtlCache::new(),
            config,
            pool,
        }
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Deterministic prediction count for a region and calendar day:
    /// the region's base count scaled by a seeded multiplier in [0.7, 1.3].
    ///
    /// # Errors
    /// `UnknownRegion` for codes absent from the catalog.
    pub fn prediction_count(&self, code: &str, date: NaiveDate) -> Result<usize, FusionError> {
        let base = f64::from(self.catalog.base_prediction_count(code)?);
        let multiplier =
            COUNT_MULTIPLIER_MIN + seeded_random(&format!("count_{code}_{date}")) * COUNT_MULTIPLIER_SPAN;
        Ok(((base * multiplier).round() as usize).max(1))
    }

    /// Ranked predictions for a region, for today (UTC).
    ///
    /// # Errors
    /// `UnknownRegion` for unknown codes; `InvalidInput` if a sub-model
    /// rejects its feature vector (a caller/wiring error, never recovered).
    pub fn predictions(&self, code: &str) -> Result<Arc<Vec<FusedPrediction>>, FusionError> {
        self.predictions_for_date(code, Utc::now().date_naive())
    }

    /// Ranked predictions for a region and explicit calendar day.
    ///
    /// Within the prediction TTL, repeated calls return the cached list
    /// without re-running any estimator. The cache is keyed by region alone
    /// (the TTL window is far shorter than a calendar day); callers that
    /// switch dates mid-window should `invalidate` first. The cache commits
    /// only after the whole list computes successfully, so an aborted or
    /// failed run never leaves partial state behind.
    ///
    /// # Errors
    /// See [`Self::predictions`].
    pub fn predictions_for_date(
        &self,
        code: &str,
        date: NaiveDate,
    ) -> Result<Arc<Vec<FusedPrediction>>, FusionError> {
        // Fail fast on unknown regions before consulting the cache
        self.catalog.region(code)?;

        let key = format!("predictions_{code}");
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let count = self.prediction_count(code, date)?;
        let compute = || -> Result<Vec<FusedPrediction>, FusionError> {
            (0..count)
                .into_par_iter()
                .map(|index| self.fuse_one(code, date, index))
                .collect()
        };
        let mut predictions = match &self.pool {
            Some(pool) => pool.install(compute)?,
            None => compute()?,
        };

        // Descending by probability; index breaks ties so the order is
        // reproducible for identical inputs
        predictions.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.index.cmp(&b.index))
        });

        info!(region = code, count = predictions.len(), "fused prediction list computed");
        let predictions = Arc::new(predictions);
        self.cache.set(&key, Arc::clone(&predictions), self.config.cache.prediction_ttl);
        Ok(predictions)
    }

    /// Drop the cached list for a region.
    pub fn invalidate(&self, code: &str) {
        self.cache.invalidate(&format!("predictions_{code}"));
    }

    /// Heuristic risk assessment at a point, using the injected weather
    /// provider and caller-supplied environmental factors.
    pub fn assess_risk_at(&self, point: GeoPoint, env: &EnvironmentalFactors) -> RiskAssessment {
        let weather = self.weather.fetch(point.latitude, point.longitude);
        assess_risk(point, &weather, env, Utc::now())
    }

    /// Run the full pipeline for one seed.
    fn fuse_one(&self, code: &str, date: NaiveDate, index: usize) -> Result<FusedPrediction, FusionError> {
        let seed = format!("pred_{code}_{date}_{index}");
        let sampled = sample_location(&self.catalog, code, &seed)?;
        let point = sampled.point;

        // Synthetic seeded weather for this location: the reproducible
        // stand-in for the out-of-scope real feed
        let timestamp = date
            .and_hms_opt(12, 0, 0)
            .unwrap_or_default()
            .and_utc();
        let snapshot = WeatherSnapshot::new(
            seeded_in_range(&format!("{seed}_temp"), 15.0, 40.0),
            seeded_in_range(&format!("{seed}_hum"), 20.0, 80.0),
            seeded_in_range(&format!("{seed}_wind"), 5.0, 35.0),
            timestamp,
        )
        .with_wind_direction(seeded_in_range(&format!("{seed}_dir"), 0.0, 360.0));

        // Seeded site parameters
        let fuel_model_id = (seeded_random(&format!("{seed}_fuel")) * 13.0).floor() as u8 + 1;
        let slope = seeded_in_range(&format!("{seed}_slope"), 5.0, 45.0);
        let aspect = seeded_in_range(&format!("{seed}_aspect"), 0.0, 360.0);
        let elevation = seeded_in_range(&format!("{seed}_elev"), 50.0, 2500.0);
        let drought_index = seeded_in_range(&format!("{seed}_drought"), 0.0, 10.0);
        let days_since_rain = seeded_in_range(&format!("{seed}_rain"), 0.0, 30.0);
        let vegetation_density = seeded_random(&format!("{seed}_veg"));
        let population_proximity = seeded_random(&format!("{seed}_pop"));

        let station_name = self
            .catalog
            .nearest_sub_region(code, &point)?
            .map(|s| s.name.clone());
        let behavior_input = BehaviorInput {
            location: point,
            fuel_model_id,
            slope_deg: slope,
            aspect_deg: aspect,
            elevation_m: elevation,
            station: snapshot.clone(),
            station_name,
        };

        let fuel_moisture = FuelModel::from_id_or_default(fuel_model_id).fuel_moisture;
        let features = BaseFeatures {
            temperature: snapshot.temperature,
            humidity: snapshot.humidity,
            wind_speed: snapshot.wind_speed,
            slope,
            elevation,
            fuel_moisture,
            drought_index,
            days_since_rain,
            vegetation_density,
            population_proximity,
        };

        // The two estimators are independent; run them side by side
        let (ensemble_result, behavior) =
            rayon::join(|| self.ensemble.predict(&features), || simulate(&behavior_input));

        let (combined, confidence, provenance) = match ensemble_result {
            Ok(ensemble) => (
                (ensemble.fire_risk * ENSEMBLE_WEIGHT + behavior.combined_risk * BEHAVIOR_WEIGHT)
                    .round(),
                ensemble.confidence,
                Provenance::Fused,
            ),
            Err(FusionError::ModelUnavailable(name)) => {
                warn!(
                    region = code,
                    index,
                    model = name,
                    "ensemble unavailable, using closed-form weather fallback"
                );
                let fallback = snapshot.temperature / 45.0 * 40.0
                    + (100.0 - snapshot.humidity) / 100.0 * 30.0
                    + snapshot.wind_speed / 40.0 * 30.0;
                (fallback.round(), 0.0, Provenance::HeuristicFallback)
            }
            Err(other) => return Err(other),
        };

        Ok(FusedPrediction {
            region: code.to_string(),
            date,
            index,
            latitude: point.latitude,
            longitude: point.longitude,
            risk_level: RiskLevel::from_score(combined),
            probability: (combined / 100.0).clamp(0.0, 1.0),
            factors: RiskFactors {
                weather: weather_factor(&snapshot),
                vegetation: vegetation_density * 100.0,
                topography: slope / 45.0 * 100.0,
                human_activity: population_proximity * 100.0,
                historical: drought_index * 10.0,
            },
            predicted_date: timestamp,
            confidence,
            provenance,
            sample_provenance: sampled.provenance,
        })
    }
}

impl std::fmt::Debug for FusionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FusionEngine")
            .field("regions", &self.catalog.region_codes().len())
            .field("cached_lists", &self.cache.len())
            .field("concurrency", &self.config.concurrency)
            .finish_non_exhaustive()
    }
}
