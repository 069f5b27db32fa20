//! Risk classification types shared by the heuristic, simulator, and ensemble

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core_types::geo::GeoPoint;

/// Overall fire-risk bucket.
///
/// Threshold mapping is half-open on the upper edge: a score of exactly 25
/// is `Medium`, 50 is `High`, 75 is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bucket a 0-100 composite score: `<25` low, `<50` medium, `<75` high,
    /// else critical.
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            RiskLevel::Low
        } else if score < 50.0 {
            RiskLevel::Medium
        } else if score < 75.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Canonical evacuation urgency scale.
///
/// Two constructions exist in the system: the fire-behavior simulator
/// thresholds on spread rate and flame length, the ensemble buckets a unit
/// interval. Both map onto this one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvacuationUrgency {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl EvacuationUrgency {
    /// Classify from simulator outputs: spread rate (m/min) and flame
    /// length (m). Either metric alone can escalate the level.
    pub fn from_behavior(spread_rate: f64, flame_length: f64) -> Self {
        if spread_rate > 30.0 || flame_length > 8.0 {
            EvacuationUrgency::Critical
        } else if spread_rate > 20.0 || flame_length > 6.0 {
            EvacuationUrgency::High
        } else if spread_rate > 10.0 || flame_length > 4.0 {
            EvacuationUrgency::Medium
        } else if spread_rate > 5.0 || flame_length > 2.0 {
            EvacuationUrgency::Low
        } else {
            EvacuationUrgency::None
        }
    }

    /// Classify from a sub-model output in `[0, 1]` via `floor(x * 5)`,
    /// clamped so `x == 1.0` stays `Critical`.
    pub fn from_unit_interval(x: f64) -> Self {
        match (x.clamp(0.0, 1.0) * 5.0).floor() as u8 {
            0 => EvacuationUrgency::None,
            1 => EvacuationUrgency::Low,
            2 => EvacuationUrgency::Medium,
            3 => EvacuationUrgency::High,
            _ => EvacuationUrgency::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvacuationUrgency::None => "none",
            EvacuationUrgency::Low => "low",
            EvacuationUrgency::Medium => "medium",
            EvacuationUrgency::High => "high",
            EvacuationUrgency::Critical => "critical",
        }
    }
}

/// Environmental risk contributions supplied by the caller, 0-100 each.
///
/// These are explicit inputs rather than internally sampled values so the
/// assessment stays reproducible for a given input set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    pub vegetation: f64,
    pub topography: f64,
    pub human_activity: f64,
    pub historical: f64,
}

impl EnvironmentalFactors {
    pub fn new(vegetation: f64, topography: f64, human_activity: f64, historical: f64) -> Self {
        EnvironmentalFactors {
            vegetation,
            topography,
            human_activity,
            historical,
        }
    }
}

/// Per-factor breakdown carried on an assessment, 0-100 each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub weather: f64,
    pub vegetation: f64,
    pub topography: f64,
    pub human_activity: f64,
    pub historical: f64,
}

/// Output of the weather heuristic estimator. Immutable once returned;
/// recompute after `valid_until`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub location: GeoPoint,
    pub risk_level: RiskLevel,
    pub score: f64,
    pub factors: RiskFactors,
    pub recommendations: Vec<String>,
    pub valid_until: DateTime<Utc>,
}

/// Fixed recommendation list for a risk level.
pub fn recommendations_for(level: RiskLevel) -> Vec<String> {
    let lines: &[&str] = match level {
        RiskLevel::Low => &[
            "Maintain normal fire monitoring",
            "Review defensible space around structures",
        ],
        RiskLevel::Medium => &[
            "Increase patrol frequency in fire-prone areas",
            "Clear dry vegetation near structures",
            "Verify water sources and hydrant access",
        ],
        RiskLevel::High => &[
            "Pre-position firefighting resources",
            "Issue public fire-weather advisories",
            "Restrict open burning and equipment use",
            "Stage evacuation route signage",
        ],
        RiskLevel::Critical => &[
            "Activate emergency operations center",
            "Issue evacuation warnings for fire-prone zones",
            "Deploy strike teams to high-risk areas",
            "Close public lands in extreme-danger zones",
        ],
    };
    lines.iter().map(|s| (*s).to_string()).collect()
}
