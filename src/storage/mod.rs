pub mod json_backend;
pub mod snapshot;

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::{core::registry::Registry, errors::Result};

/// Result of reading the persisted snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No snapshot exists yet; start with an empty registry.
    Fresh,
    Loaded {
        registry: Registry,
        saved_at: DateTime<Utc>,
    },
}

impl LoadOutcome {
    pub fn into_registry(self) -> Registry {
        match self {
            LoadOutcome::Fresh => Registry::new(),
            LoadOutcome::Loaded { registry, .. } => registry,
        }
    }
}

/// Abstraction over persistence backends capable of storing the registry snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Replaces the stored snapshot. On failure the previous snapshot is left intact.
    fn save(&self, registry: &Registry, saved_at: DateTime<Utc>) -> Result<()>;

    /// Reads the stored snapshot. A missing snapshot is [`LoadOutcome::Fresh`], not an error.
    fn load(&self) -> Result<LoadOutcome>;

    fn location(&self) -> &Path;
}

pub use json_backend::JsonSnapshotStore;
pub use snapshot::{EventRecord, HouseholdRecord, RegistrySnapshot, SNAPSHOT_SCHEMA_VERSION};
