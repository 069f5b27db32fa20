//! Weather-driven heuristic risk estimator
//!
//! Computes a composite 0-100 risk score from a weather snapshot plus
//! caller-supplied environmental factors, and derives simplified
//! fire-weather indices. The index formulas are linear adjustments from
//! base constants, not the real Canadian Forest Fire Weather Index System.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::geo::GeoPoint;
use crate::core_types::risk::{
    recommendations_for, EnvironmentalFactors, RiskAssessment, RiskFactors, RiskLevel,
};
use crate::core_types::weather::WeatherSnapshot;

/// Weighting of the composite score: weather dominates, then fuels and
/// terrain, with human activity and history trailing.
const WEIGHT_WEATHER: f64 = 0.30;
const WEIGHT_VEGETATION: f64 = 0.25;
const WEIGHT_TOPOGRAPHY: f64 = 0.20;
const WEIGHT_HUMAN: f64 = 0.15;
const WEIGHT_HISTORICAL: f64 = 0.10;

/// Assessments stay valid for six hours; callers recompute after that.
const VALIDITY_HOURS: i64 = 6;

/// Composite weather danger term, 0-100 nominal (can exceed 100 in extreme
/// heat/wind, by construction).
///
/// `(temp/35 + (100-humidity)/100 + wind/25) / 3 * 100`
///
/// Monotone by design: hotter, drier, windier never reads safer.
pub fn weather_factor(weather: &WeatherSnapshot) -> f64 {
    let temp_term = weather.temperature / 35.0;
    let dryness_term = (100.0 - weather.humidity) / 100.0;
    let wind_term = weather.wind_speed / 25.0;
    (temp_term + dryness_term + wind_term) / 3.0 * 100.0
}

/// Assess composite fire risk at a location.
///
/// Environmental contributions are explicit inputs (0-100 each) so the
/// assessment is a pure function of its arguments; nothing inside draws
/// randomness.
pub fn assess_risk(
    location: GeoPoint,
    weather: &WeatherSnapshot,
    env: &EnvironmentalFactors,
    now: DateTime<Utc>,
) -> RiskAssessment {
    let wf = weather_factor(weather);
    let score = wf * WEIGHT_WEATHER
        + env.vegetation * WEIGHT_VEGETATION
        + env.topography * WEIGHT_TOPOGRAPHY
        + env.human_activity * WEIGHT_HUMAN
        + env.historical * WEIGHT_HISTORICAL;

    let risk_level = RiskLevel::from_score(score);
    RiskAssessment {
        location,
        risk_level,
        score,
        factors: RiskFactors {
            weather: wf,
            vegetation: env.vegetation,
            topography: env.topography,
            human_activity: env.human_activity,
            historical: env.historical,
        },
        recommendations: recommendations_for(risk_level),
        valid_until: now + Duration::hours(VALIDITY_HOURS),
    }
}

/// Simplified fire-weather indices, each clamped to its conventional range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireWeatherIndex {
    /// Fine Fuel Moisture Code, 0-100
    pub ffmc: f64,
    /// Duff Moisture Code, 0-150
    pub dmc: f64,
    /// Drought Code, 0-800
    pub dc: f64,
    /// Initial Spread Index, 0-50
    pub isi: f64,
}

/// Estimate fire-weather indices by linear adjustment from base constants.
///
/// Each index starts from a mid-season base and shifts with temperature,
/// humidity, and rainfall offsets; ISI couples the FFMC estimate with wind.
pub fn fire_weather_index(weather: &WeatherSnapshot) -> FireWeatherIndex {
    let ffmc = (85.0 + (weather.temperature - 20.0) * 0.5 - (weather.humidity - 50.0) * 0.3
        - weather.rainfall * 2.0)
        .clamp(0.0, 100.0);

    let dmc = (50.0 + (weather.temperature - 20.0) * 1.2 - (weather.humidity - 50.0) * 0.4
        - weather.rainfall * 5.0)
        .clamp(0.0, 150.0);

    let dc = (300.0 + (weather.temperature - 20.0) * 3.0 - weather.rainfall * 10.0).clamp(0.0, 800.0);

    let isi = (5.0 + (ffmc - 85.0) * 0.2 + weather.wind_speed * 0.3).clamp(0.0, 50.0);

    FireWeatherIndex { ffmc, dmc, dc, isi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn at(temperature: f64, humidity: f64, wind_speed: f64) -> WeatherSnapshot {
        let ts = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        WeatherSnapshot::new(temperature, humidity, wind_speed, ts)
    }

    #[test]
    fn test_weather_factor_formula() {
        // 40°C, 10% humidity, 30 km/h: (40/35 + 0.9 + 1.2) / 3 * 100
        let wf = weather_factor(&at(40.0, 10.0, 30.0));
        let expected = (40.0 / 35.0 + 0.9 + 1.2) / 3.0 * 100.0;
        assert_relative_eq!(wf, expected, epsilon = 1e-9);
        assert!((108.0..108.2).contains(&wf), "extreme conditions read {wf}");
    }

    #[test]
    fn test_weather_factor_monotonicity() {
        let base = weather_factor(&at(30.0, 40.0, 15.0));
        assert!(weather_factor(&at(35.0, 40.0, 15.0)) > base, "hotter must not read safer");
        assert!(weather_factor(&at(30.0, 40.0, 25.0)) > base, "windier must not read safer");
        assert!(weather_factor(&at(30.0, 60.0, 15.0)) < base, "more humid must read safer");
    }

    #[test]
    fn test_extreme_weather_alone_stays_medium() {
        // With zero environmental contributions the weather weight caps the
        // composite at ~0.3 * weather_factor, which lands in "medium" even
        // for severe fire weather.
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let assessment = assess_risk(
            GeoPoint::new(36.7, -119.4),
            &at(40.0, 10.0, 30.0),
            &EnvironmentalFactors::default(),
            now,
        );
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_relative_eq!(assessment.score, weather_factor(&at(40.0, 10.0, 30.0)) * 0.3);
        assert_eq!(assessment.valid_until, now + Duration::hours(6));
    }

    #[test]
    fn test_loaded_factors_reach_critical() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let env = EnvironmentalFactors::new(90.0, 80.0, 70.0, 85.0);
        let assessment = assess_risk(GeoPoint::new(36.7, -119.4), &at(42.0, 8.0, 40.0), &env, now);
        assert_eq!(assessment.risk_level, RiskLevel::Critical);
        assert!(assessment.score >= 75.0, "score {} should cross critical", assessment.score);
        assert_eq!(assessment.recommendations, recommendations_for(RiskLevel::Critical));
    }

    #[test]
    fn test_indices_stay_in_range() {
        let cases = [
            at(45.0, 5.0, 60.0),
            at(-10.0, 100.0, 0.0),
            at(20.0, 50.0, 10.0).with_rainfall(80.0),
        ];
        for weather in cases {
            let idx = fire_weather_index(&weather);
            assert!((0.0..=100.0).contains(&idx.ffmc), "ffmc {} out of range", idx.ffmc);
            assert!((0.0..=150.0).contains(&idx.dmc), "dmc {} out of range", idx.dmc);
            assert!((0.0..=800.0).contains(&idx.dc), "dc {} out of range", idx.dc);
            assert!((0.0..=50.0).contains(&idx.isi), "isi {} out of range", idx.isi);
        }
    }

    #[test]
    fn test_rain_suppresses_indices() {
        let dry = fire_weather_index(&at(30.0, 30.0, 20.0));
        let wet = fire_weather_index(&at(30.0, 30.0, 20.0).with_rainfall(15.0));
        assert!(wet.ffmc < dry.ffmc);
        assert!(wet.dmc < dry.dmc);
        assert!(wet.dc < dry.dc);
    }
}
