//! Recyclable material categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumerates the material categories accepted by the program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Plastic,
    Glass,
    Metal,
    Paper,
    /// Anything outside the known categories. Logged, but earns the minimal rate.
    Unknown,
}

impl Material {
    pub const KNOWN: [Material; 4] = [
        Material::Plastic,
        Material::Glass,
        Material::Metal,
        Material::Paper,
    ];

    /// Classifies a free-form label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for a blank label; unrecognised text maps to [`Material::Unknown`].
    pub fn classify(label: &str) -> Option<Material> {
        let normalized = label.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return None;
        }
        let material = Material::KNOWN
            .into_iter()
            .find(|known| known.as_str() == normalized)
            .unwrap_or(Material::Unknown);
        Some(material)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Material::Plastic => "plastic",
            Material::Glass => "glass",
            Material::Metal => "metal",
            Material::Paper => "paper",
            Material::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Material::Unknown)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
