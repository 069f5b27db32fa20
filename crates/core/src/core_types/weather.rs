//! Weather observation snapshot consumed by all three estimators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time weather observation at a location.
///
/// Constructed fresh per prediction call; how the values are obtained (real
/// feed, seeded synthesis, simulation) is the provider's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,    // °C
    pub humidity: f64,       // % relative
    pub wind_speed: f64,     // km/h
    pub wind_direction: f64, // degrees (0 = North, 90 = East)
    pub pressure: f64,       // hPa
    pub rainfall: f64,       // mm over the last 24h
    pub timestamp: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Snapshot with explicit fire-relevant fields; pressure and rainfall
    /// default to benign values.
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, timestamp: DateTime<Utc>) -> Self {
        WeatherSnapshot {
            temperature,
            humidity,
            wind_speed,
            wind_direction: 0.0,
            pressure: 1013.0,
            rainfall: 0.0,
            timestamp,
        }
    }

    pub fn with_wind_direction(mut self, degrees: f64) -> Self {
        self.wind_direction = degrees.rem_euclid(360.0);
        self
    }

    pub fn with_rainfall(mut self, mm: f64) -> Self {
        self.rainfall = mm.max(0.0);
        self
    }

    /// Wind speed in m/s.
    pub fn wind_speed_ms(&self) -> f64 {
        self.wind_speed / 3.6
    }
}
