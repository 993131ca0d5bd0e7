#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use eco_tracker::{
    config::ConfigManager,
    core::{EcoTracker, FixedClock},
    storage::JsonSnapshotStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// Allocates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Builds a tracker whose snapshot lives at `snapshot`, with a frozen clock.
pub fn tracker_at(snapshot: PathBuf) -> EcoTracker {
    EcoTracker::new(Box::new(JsonSnapshotStore::new(snapshot)))
        .with_clock(Box::new(FixedClock(fixed_now())))
}

/// Creates an isolated tracker and config manager backed by a unique directory.
pub fn setup_test_env() -> (EcoTracker, ConfigManager, PathBuf) {
    let base = temp_base();
    let snapshot = base.join("households.json");
    let tracker = tracker_at(snapshot.clone());
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");
    (tracker, config_manager, snapshot)
}
