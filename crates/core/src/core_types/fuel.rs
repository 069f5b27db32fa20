//! Standard fuel models parameterizing the fire-behavior simulator
//!
//! The 13 models follow the standard fire-behavior fuel classification
//! (Anderson 1982 grouping): grasses 1-3, shrubs 4-7, timber litter 8-10,
//! logging slash 11-13. Values are the modeled baselines consumed by the
//! spread-rate adjustment in `behavior`, not field measurements.

use serde::{Deserialize, Serialize};

/// A fuel classification with fixed baseline behavior values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    pub id: u8,
    pub name: String,
    pub fuel_load: f64,          // t/ha available fine fuel
    pub fuel_depth: f64,         // m
    pub fuel_moisture: f64,      // % dead fuel moisture baseline
    pub spread_rate: f64,        // m/min baseline rate of spread
    pub flame_length: f64,       // m baseline flame length
    pub heat_per_unit_area: f64, // kJ/m²
}

impl FuelModel {
    /// Short annual grass, fully cured.
    pub fn short_grass() -> Self {
        FuelModel {
            id: 1,
            name: "Short Grass".to_string(),
            fuel_load: 1.8,
            fuel_depth: 0.3,
            fuel_moisture: 8.0,
            spread_rate: 25.0,
            flame_length: 1.2,
            heat_per_unit_area: 8000.0,
        }
    }

    /// Open timber with grass understory.
    pub fn timber_grass() -> Self {
        FuelModel {
            id: 2,
            name: "Timber Grass and Understory".to_string(),
            fuel_load: 4.9,
            fuel_depth: 0.3,
            fuel_moisture: 10.0,
            spread_rate: 12.0,
            flame_length: 1.8,
            heat_per_unit_area: 9000.0,
        }
    }

    /// Tall continuous grass, the fastest-spreading model.
    pub fn tall_grass() -> Self {
        FuelModel {
            id: 3,
            name: "Tall Grass".to_string(),
            fuel_load: 7.4,
            fuel_depth: 0.8,
            fuel_moisture: 8.0,
            spread_rate: 35.0,
            flame_length: 3.7,
            heat_per_unit_area: 10000.0,
        }
    }

    /// Mature chaparral. The simulator's default when a fuel model id is
    /// unknown.
    pub fn chaparral() -> Self {
        FuelModel {
            id: 4,
            name: "Chaparral".to_string(),
            fuel_load: 12.4,
            fuel_depth: 1.8,
            fuel_moisture: 12.0,
            spread_rate: 15.0,
            flame_length: 5.5,
            heat_per_unit_area: 12000.0,
        }
    }

    /// Young green brush with some dead material.
    pub fn brush() -> Self {
        FuelModel {
            id: 5,
            name: "Brush".to_string(),
            fuel_load: 8.6,
            fuel_depth: 0.6,
            fuel_moisture: 14.0,
            spread_rate: 5.5,
            flame_length: 1.9,
            heat_per_unit_area: 9500.0,
        }
    }

    /// Dormant brush and hardwood shrub.
    pub fn dormant_brush() -> Self {
        FuelModel {
            id: 6,
            name: "Dormant Brush".to_string(),
            fuel_load: 14.8,
            fuel_depth: 0.8,
            fuel_moisture: 12.0,
            spread_rate: 9.8,
            flame_length: 1.8,
            heat_per_unit_area: 10500.0,
        }
    }

    /// Southern rough / palmetto-gallberry.
    pub fn southern_rough() -> Self {
        FuelModel {
            id: 7,
            name: "Southern Rough".to_string(),
            fuel_load: 12.1,
            fuel_depth: 0.8,
            fuel_moisture: 15.0,
            spread_rate: 6.1,
            flame_length: 1.6,
            heat_per_unit_area: 10000.0,
        }
    }

    /// Compact litter under a closed timber canopy.
    pub fn closed_timber_litter() -> Self {
        FuelModel {
            id: 8,
            name: "Closed Timber Litter".to_string(),
            fuel_load: 12.4,
            fuel_depth: 0.06,
            fuel_moisture: 18.0,
            spread_rate: 0.5,
            flame_length: 0.3,
            heat_per_unit_area: 7000.0,
        }
    }

    /// Loose hardwood litter.
    pub fn hardwood_litter() -> Self {
        FuelModel {
            id: 9,
            name: "Hardwood Litter".to_string(),
            fuel_load: 8.6,
            fuel_depth: 0.06,
            fuel_moisture: 16.0,
            spread_rate: 2.3,
            flame_length: 0.8,
            heat_per_unit_area: 7500.0,
        }
    }

    /// Timber litter with dead-down understory.
    pub fn timber_litter_understory() -> Self {
        FuelModel {
            id: 10,
            name: "Timber Litter and Understory".to_string(),
            fuel_load: 29.6,
            fuel_depth: 0.3,
            fuel_moisture: 16.0,
            spread_rate: 2.4,
            flame_length: 1.5,
            heat_per_unit_area: 9000.0,
        }
    }

    /// Light logging slash.
    pub fn light_slash() -> Self {
        FuelModel {
            id: 11,
            name: "Light Logging Slash".to_string(),
            fuel_load: 28.4,
            fuel_depth: 0.3,
            fuel_moisture: 15.0,
            spread_rate: 1.8,
            flame_length: 1.1,
            heat_per_unit_area: 9500.0,
        }
    }

    /// Medium logging slash.
    pub fn medium_slash() -> Self {
        FuelModel {
            id: 12,
            name: "Medium Logging Slash".to_string(),
            fuel_load: 85.4,
            fuel_depth: 0.7,
            fuel_moisture: 14.0,
            spread_rate: 4.0,
            flame_length: 2.4,
            heat_per_unit_area: 11000.0,
        }
    }

    /// Heavy logging slash.
    pub fn heavy_slash() -> Self {
        FuelModel {
            id: 13,
            name: "Heavy Logging Slash".to_string(),
            fuel_load: 143.4,
            fuel_depth: 0.9,
            fuel_moisture: 13.0,
            spread_rate: 6.8,
            flame_length: 3.2,
            heat_per_unit_area: 12500.0,
        }
    }

    /// Get a fuel model by its standard id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::short_grass()),
            2 => Some(Self::timber_grass()),
            3 => Some(Self::tall_grass()),
            4 => Some(Self::chaparral()),
            5 => Some(Self::brush()),
            6 => Some(Self::dormant_brush()),
            7 => Some(Self::southern_rough()),
            8 => Some(Self::closed_timber_litter()),
            9 => Some(Self::hardwood_litter()),
            10 => Some(Self::timber_litter_understory()),
            11 => Some(Self::light_slash()),
            12 => Some(Self::medium_slash()),
            13 => Some(Self::heavy_slash()),
            _ => None,
        }
    }

    /// Get a fuel model by id, defaulting to Chaparral for unknown ids.
    pub fn from_id_or_default(id: u8) -> Self {
        Self::from_id(id).unwrap_or_else(Self::chaparral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_thirteen_models_present() {
        for id in 1..=13u8 {
            let model = FuelModel::from_id(id).unwrap_or_else(|| panic!("model {id} missing"));
            assert_eq!(model.id, id);
            assert!(model.spread_rate > 0.0, "model {id} needs a positive spread rate");
            assert!(model.flame_length > 0.0, "model {id} needs a positive flame length");
        }
        assert!(FuelModel::from_id(0).is_none());
        assert!(FuelModel::from_id(14).is_none());
    }

    #[test]
    fn test_unknown_id_defaults_to_chaparral() {
        let model = FuelModel::from_id_or_default(99);
        assert_eq!(model.id, 4);
        assert_eq!(model.name, "Chaparral");
        assert_eq!(model.spread_rate, 15.0);
        assert_eq!(model.fuel_moisture, 12.0);
    }

    #[test]
    fn test_grass_spreads_faster_than_litter() {
        let grass = FuelModel::tall_grass();
        let litter = FuelModel::closed_timber_litter();
        assert!(
            grass.spread_rate > 10.0 * litter.spread_rate,
            "tall grass ({}) should far outrun closed timber litter ({})",
            grass.spread_rate,
            litter.spread_rate
        );
    }
}
