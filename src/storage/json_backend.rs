use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    core::registry::Registry,
    errors::{EcoError, Result},
    utils::persistence::write_atomic,
};

use super::{snapshot::RegistrySnapshot, LoadOutcome, SnapshotStore};

/// Filesystem-backed JSON persistence for the registry snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, registry: &Registry, saved_at: DateTime<Utc>) -> Result<()> {
        save_snapshot_to_path(&RegistrySnapshot::capture(registry, saved_at), &self.path)?;
        debug!(
            path = %self.path.display(),
            households = registry.len(),
            "registry snapshot saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        let Some(snapshot) = load_snapshot_from_path(&self.path)? else {
            debug!(path = %self.path.display(), "no registry snapshot found");
            return Ok(LoadOutcome::Fresh);
        };
        let saved_at = snapshot.saved_at;
        let registry = snapshot.into_registry()?;
        debug!(
            path = %self.path.display(),
            households = registry.len(),
            "registry snapshot loaded"
        );
        Ok(LoadOutcome::Loaded { registry, saved_at })
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Writes a snapshot by staging it next to `path` and renaming it into place.
pub fn save_snapshot_to_path(snapshot: &RegistrySnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    write_atomic(path, &json)?;
    Ok(())
}

/// Reads a snapshot, returning `Ok(None)` when the file does not exist.
pub fn load_snapshot_from_path(path: &Path) -> Result<Option<RegistrySnapshot>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(EcoError::Persistence(format!(
                "cannot read snapshot `{}`: {}",
                path.display(),
                err
            )))
        }
    };
    let snapshot = serde_json::from_str(&data).map_err(|err| {
        EcoError::Persistence(format!(
            "snapshot `{}` is corrupt: {}",
            path.display(),
            err
        ))
    })?;
    Ok(Some(snapshot))
}
