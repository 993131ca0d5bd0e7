use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::RateTable;

const DEFAULT_DIR_NAME: &str = ".eco_tracker";

/// Stores user-configurable tracker preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the snapshot. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "Config::default_snapshot_file")]
    pub snapshot_file: String,

    #[serde(default)]
    pub rates: RateTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            snapshot_file: Self::default_snapshot_file(),
            rates: RateTable::default(),
        }
    }
}

impl Config {
    pub fn default_snapshot_file() -> String {
        "households.json".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DIR_NAME)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.resolve_data_dir().join(&self.snapshot_file)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.snapshot_file.trim().is_empty() {
            return Err("snapshot file name must not be empty".into());
        }
        self.rates.validate()
    }
}
