//! Closed-form fire-behavior simulation
//!
//! A simplified FARSITE/`FlamMap`-style estimator: fuel-model baselines
//! adjusted by wind, slope, and moisture factors, projected over a fixed
//! 24-hour horizon. Outputs a perimeter polygon, flame/intensity metrics,
//! crown-fire classification, evacuation rings, and a combined 0-100 risk
//! score. This is an approximation of those tools' outputs, not an
//! integration with them.

use std::f64::consts::{PI, TAU};

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::core_types::fuel::FuelModel;
use crate::core_types::geo::GeoPoint;
use crate::core_types::prediction::{
    CrownFireActivity, EvacuationZone, FireBehaviorPrediction, SmokeDispersion,
};
use crate::core_types::risk::EvacuationUrgency;
use crate::core_types::weather::WeatherSnapshot;

/// Simulation horizon in hours.
const HORIZON_HOURS: f64 = 24.0;

/// Vertices in the generated perimeter polygon.
const PERIMETER_POINTS: usize = 16;

/// Degrees of latitude per kilometer, inverse.
const KM_PER_DEGREE: f64 = 111.0;

/// Evacuation ring distances (miles), labels, and urgencies, innermost
/// first.
const EVACUATION_RINGS: [(f64, &str, EvacuationUrgency); 4] = [
    (1.0, "Immediate", EvacuationUrgency::Critical),
    (3.0, "High Risk", EvacuationUrgency::High),
    (5.0, "Medium Risk", EvacuationUrgency::Medium),
    (10.0, "Low Risk", EvacuationUrgency::Low),
];

/// Input conditions for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorInput {
    pub location: GeoPoint,
    /// Standard fuel model id (1-13); unknown ids default to Chaparral
    pub fuel_model_id: u8,
    /// Terrain slope in degrees
    pub slope_deg: f64,
    /// Terrain aspect in degrees (0 = North)
    pub aspect_deg: f64,
    /// Site elevation in meters
    pub elevation_m: f64,
    /// Conditions at the nearest weather station
    pub station: WeatherSnapshot,
    /// Station label, when known
    pub station_name: Option<String>,
}

/// Wind adjustment: square-root response to station wind (km/h).
fn wind_factor(wind_speed: f64) -> f64 {
    (wind_speed / 20.0).max(0.0).sqrt()
}

/// Slope adjustment: `sin²(slope)`; flat terrain contributes nothing.
fn slope_factor(slope_deg: f64) -> f64 {
    slope_deg.to_radians().sin().powi(2)
}

/// Moisture damping: unity at the 12% reference moisture, floored at 0.1 so
/// wet fuels still produce a nonzero projection.
fn moisture_factor(fuel_moisture: f64) -> f64 {
    (1.0 - (fuel_moisture - 12.0) / 50.0).max(0.1)
}

/// Build the 16-vertex perimeter polygon, elongated toward the direction
/// the wind blows to.
fn fire_perimeter(origin: &GeoPoint, fire_area: f64, wind_direction: f64) -> Vec<GeoPoint> {
    let radius_deg = (fire_area / PI).sqrt() / KM_PER_DEGREE;
    // Wind direction is a compass bearing (degrees from north, blowing
    // from); the plume elongates downwind. Convert to a math angle with
    // east = 0.
    let downwind_bearing = (wind_direction + 180.0).rem_euclid(360.0);
    let downwind_math = (90.0 - downwind_bearing).to_radians();
    let lat_scale = origin.latitude.to_radians().cos().max(0.1);

    (0..PERIMETER_POINTS)
        .map(|i| {
            let theta = i as f64 / PERIMETER_POINTS as f64 * TAU;
            let stretch = 1.0 + 0.5 * (theta - downwind_math).cos();
            let offset = Rotation2::new(theta) * Vector2::new(radius_deg * stretch, 0.0);
            // x runs east (longitude, rescaled by latitude), y runs north
            GeoPoint::new(
                origin.latitude + offset.y,
                origin.longitude + offset.x / lat_scale,
            )
        })
        .collect()
}

/// Run the simulator for one set of input conditions.
pub fn simulate(input: &BehaviorInput) -> FireBehaviorPrediction {
    let fuel = FuelModel::from_id_or_default(input.fuel_model_id);

    let wind_f = wind_factor(input.station.wind_speed);
    let slope_f = slope_factor(input.slope_deg);
    let moisture_f = moisture_factor(fuel.fuel_moisture);
    let spread = fuel.spread_rate * wind_f * slope_f * moisture_f;

    let fire_area = PI * (spread * 0.66 * HORIZON_HOURS).powi(2) * 0.1;
    let perimeter = fire_perimeter(&input.location, fire_area, input.station.wind_direction);

    let flame = fuel.flame_length * (spread / fuel.spread_rate).max(0.0);
    let intensity = flame * 300.0;
    let crown = if flame > 8.0 {
        CrownFireActivity::Active
    } else if flame > 4.0 {
        CrownFireActivity::Passive
    } else {
        CrownFireActivity::None
    };

    // Front speed in ring units: miles cleared per hour at spread * 0.1
    let front_speed = (spread * 0.1).max(f64::EPSILON);
    let evacuation_zones: Vec<EvacuationZone> = EVACUATION_RINGS
        .iter()
        .map(|(radius_miles, label, urgency)| EvacuationZone {
            label: (*label).to_string(),
            radius_miles: *radius_miles,
            urgency: *urgency,
            time_to_evacuate: radius_miles / front_speed,
        })
        .collect();
    let time_to_reach = EVACUATION_RINGS[0].0 / front_speed;

    // Higher sites vent smoke further; +10% range per 1000 m
    // TODO: fold aspect into the slope factor once directional spread lands
    let elevation_boost = 1.0 + input.elevation_m.max(0.0) / 10000.0;
    let range_km = input.station.wind_speed * 2.5 * elevation_boost;
    let smoke_dispersion = SmokeDispersion {
        direction_deg: (input.station.wind_direction + 180.0).rem_euclid(360.0),
        range_km,
        affected_area_km2: 0.26 * range_km * range_km,
    };

    let farsite_risk = (spread * 5.0).min(100.0);
    let flammap_risk = (flame * 5.0).min(100.0);
    let intensity_risk = (intensity / 100.0).min(100.0);
    let combined_risk = (farsite_risk * 0.4 + flammap_risk * 0.4 + intensity_risk * 0.2).round();

    FireBehaviorPrediction {
        origin: input.location,
        fire_perimeter: perimeter,
        fire_area,
        fire_intensity: intensity,
        flame_length: flame,
        rate_of_spread: spread,
        time_to_reach,
        crown_fire_activity: crown,
        evacuation_zones,
        evacuation_urgency: EvacuationUrgency::from_behavior(spread, flame),
        smoke_dispersion,
        combined_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn input(fuel_model_id: u8, slope_deg: f64, wind_speed: f64) -> BehaviorInput {
        let ts = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        BehaviorInput {
            location: GeoPoint::new(38.9, -120.8),
            fuel_model_id,
            slope_deg,
            aspect_deg: 180.0,
            elevation_m: 500.0,
            station: WeatherSnapshot::new(32.0, 20.0, wind_speed, ts).with_wind_direction(270.0),
            station_name: Some("Sacramento".to_string()),
        }
    }

    #[test]
    fn test_chaparral_reference_conditions() {
        // Model 4 at reference conditions: wind 20 km/h, 90° slope,
        // 12% fuel moisture — every adjustment factor is unity.
        let prediction = simulate(&input(4, 90.0, 20.0));
        assert_relative_eq!(prediction.rate_of_spread, 15.0, epsilon = 1e-9);
        assert_eq!(
            prediction.evacuation_urgency,
            EvacuationUrgency::Medium,
            "spread 15 sits in the (10, 20] urgency band"
        );
        assert_relative_eq!(prediction.flame_length, 5.5, epsilon = 1e-9);
        assert_eq!(prediction.crown_fire_activity, CrownFireActivity::Passive);
    }

    #[test]
    fn test_unknown_fuel_model_defaults_to_chaparral() {
        let known = simulate(&input(4, 45.0, 15.0));
        let unknown = simulate(&input(200, 45.0, 15.0));
        assert_eq!(known.rate_of_spread, unknown.rate_of_spread);
        assert_eq!(known.combined_risk, unknown.combined_risk);
    }

    #[test]
    fn test_wind_increases_spread() {
        let calm = simulate(&input(3, 45.0, 5.0));
        let windy = simulate(&input(3, 45.0, 45.0));
        assert!(
            windy.rate_of_spread > calm.rate_of_spread * 2.0,
            "wind 45 ({}) should far outrun wind 5 ({})",
            windy.rate_of_spread,
            calm.rate_of_spread
        );
    }

    #[test]
    fn test_flat_terrain_projects_no_spread() {
        // sin²(0) = 0: the closed-form model projects no growth on flat
        // ground, and every downstream metric follows it to zero.
        let flat = simulate(&input(4, 0.0, 20.0));
        assert_eq!(flat.rate_of_spread, 0.0);
        assert_eq!(flat.fire_area, 0.0);
        assert_eq!(flat.evacuation_urgency, EvacuationUrgency::None);
    }

    #[test]
    fn test_perimeter_shape() {
        let prediction = simulate(&input(4, 60.0, 30.0));
        assert_eq!(prediction.fire_perimeter.len(), 16);
        // All vertices should sit within a few degrees of the origin
        for v in &prediction.fire_perimeter {
            assert!((v.latitude - 38.9).abs() < 5.0, "latitude {} strayed", v.latitude);
            assert!((v.longitude + 120.8).abs() < 7.0, "longitude {} strayed", v.longitude);
        }
    }

    #[test]
    fn test_evacuation_rings_ordered() {
        let prediction = simulate(&input(4, 90.0, 20.0));
        assert_eq!(prediction.evacuation_zones.len(), 4);
        let radii: Vec<f64> = prediction.evacuation_zones.iter().map(|z| z.radius_miles).collect();
        assert_eq!(radii, vec![1.0, 3.0, 5.0, 10.0]);
        // Inner rings leave less time
        for pair in prediction.evacuation_zones.windows(2) {
            assert!(pair[0].time_to_evacuate < pair[1].time_to_evacuate);
        }
        assert_relative_eq!(prediction.time_to_reach, 1.0 / 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_combined_risk_reference_value() {
        // spread 15 → farsite 75; flame 5.5 → flammap 27.5;
        // intensity 1650 → 16.5; 0.4*75 + 0.4*27.5 + 0.2*16.5 = 44.3 → 44
        let prediction = simulate(&input(4, 90.0, 20.0));
        assert_eq!(prediction.combined_risk, 44.0);
    }

    #[test]
    fn test_smoke_follows_wind() {
        let prediction = simulate(&input(4, 60.0, 30.0));
        // Station wind from 270° blows smoke toward 90°
        assert_relative_eq!(prediction.smoke_dispersion.direction_deg, 90.0, epsilon = 1e-9);
        assert!(prediction.smoke_dispersion.range_km > 0.0);
        assert!(prediction.smoke_dispersion.affected_area_km2 > 0.0);
    }
}
