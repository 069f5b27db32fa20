//! Weather source boundary
//!
//! The fusion core only requires the `WeatherSnapshot` shape; where the
//! values come from is a provider concern. Two providers ship with the
//! crate: a seed-deterministic synthesizer (the default for reproducible
//! pipelines) and a rand-jittered climate simulation standing in for a real
//! feed. Actual API ingestion is out of scope.

use chrono::Utc;
use rand::Rng;

use crate::core_types::seeded::seeded_in_range;
use crate::core_types::weather::WeatherSnapshot;

/// A source of weather observations for a coordinate.
pub trait WeatherProvider: Send + Sync {
    fn fetch(&self, latitude: f64, longitude: f64) -> WeatherSnapshot;
}

/// Deterministic provider: conditions derive from the coordinate alone, so
/// repeated fetches for the same point agree exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededWeather;

impl WeatherProvider for SeededWeather {
    fn fetch(&self, latitude: f64, longitude: f64) -> WeatherSnapshot {
        let key = format!("wx_{latitude:.4}_{longitude:.4}");
        WeatherSnapshot::new(
            seeded_in_range(&format!("{key}_temp"), 15.0, 40.0),
            seeded_in_range(&format!("{key}_hum"), 20.0, 80.0),
            seeded_in_range(&format!("{key}_wind"), 5.0, 35.0),
            Utc::now(),
        )
        .with_wind_direction(seeded_in_range(&format!("{key}_dir"), 0.0, 360.0))
    }
}

/// Simulated provider: jitters around a climate baseline on every fetch.
/// Useful for demos and soak tests; not reproducible by design.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedWeather {
    /// Climate-mean temperature, °C
    pub temperature: f64,
    /// Climate-mean relative humidity, %
    pub humidity: f64,
    /// Climate-mean wind speed, km/h
    pub wind_speed: f64,
}

impl Default for SimulatedWeather {
    fn default() -> Self {
        SimulatedWeather {
            temperature: 28.0,
            humidity: 40.0,
            wind_speed: 18.0,
        }
    }
}

impl WeatherProvider for SimulatedWeather {
    fn fetch(&self, _latitude: f64, _longitude: f64) -> WeatherSnapshot {
        let mut rng = rand::rng();
        WeatherSnapshot::new(
            self.temperature + rng.random_range(-6.0..6.0),
            (self.humidity + rng.random_range(-15.0..15.0)).clamp(5.0, 95.0),
            (self.wind_speed + rng.random_range(-8.0..12.0)).max(0.0),
            Utc::now(),
        )
        .with_wind_direction(rng.random_range(0.0..360.0))
    }
}
