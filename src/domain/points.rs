//! Eco-point rate policy.

use serde::{Deserialize, Serialize};

use crate::domain::material::Material;

/// Points awarded per kilogram for each material category.
///
/// Points for an event are `floor(rate * weight_kg)`, saturating at `u64::MAX`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateTable {
    #[serde(default = "RateTable::default_plastic")]
    pub plastic: f64,
    #[serde(default = "RateTable::default_glass")]
    pub glass: f64,
    #[serde(default = "RateTable::default_metal")]
    pub metal: f64,
    #[serde(default = "RateTable::default_paper")]
    pub paper: f64,
    #[serde(default)]
    pub unknown: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            plastic: Self::default_plastic(),
            glass: Self::default_glass(),
            metal: Self::default_metal(),
            paper: Self::default_paper(),
            unknown: 0.0,
        }
    }
}

impl RateTable {
    pub fn default_plastic() -> f64 {
        1.0
    }

    pub fn default_glass() -> f64 {
        2.0
    }

    pub fn default_metal() -> f64 {
        3.0
    }

    pub fn default_paper() -> f64 {
        1.0
    }

    pub fn rate_for(&self, material: Material) -> f64 {
        match material {
            Material::Plastic => self.plastic,
            Material::Glass => self.glass,
            Material::Metal => self.metal,
            Material::Paper => self.paper,
            Material::Unknown => self.unknown,
        }
    }

    pub fn points_for(&self, material: Material, weight_kg: f64) -> u64 {
        let raw = (self.rate_for(material) * weight_kg).floor();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            // `as` saturates for values beyond u64::MAX.
            raw as u64
        }
    }

    /// Checks that every rate is finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let entries = [
            (Material::Plastic, self.plastic),
            (Material::Glass, self.glass),
            (Material::Metal, self.metal),
            (Material::Paper, self.paper),
            (Material::Unknown, self.unknown),
        ];
        for (material, rate) in entries {
            if !rate.is_finite() || rate < 0.0 {
                return Err(format!(
                    "rate for {} must be a non-negative number, got {}",
                    material, rate
                ));
            }
        }
        Ok(())
    }
}
