mod common;

use std::fs;

use eco_tracker::{
    config::{Config, ConfigError, ConfigManager},
    utils::persistence::staging_path,
    EcoError, EcoTracker,
};

#[test]
fn missing_config_loads_defaults() {
    let (_, manager, _) = common::setup_test_env();
    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.snapshot_file, "households.json");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let (_, manager, _) = common::setup_test_env();

    let mut cfg = Config::default();
    cfg.snapshot_file = "community.json".to_string();
    cfg.rates.glass = 4.0;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.snapshot_file, "community.json");
    assert_eq!(loaded.rates.glass, 4.0);
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn invalid_rates_are_rejected() {
    let base = common::temp_base();
    let manager = ConfigManager::new(base.join("config.json"));
    fs::write(manager.config_path(), r#"{ "rates": { "metal": -3.0 } }"#).unwrap();

    assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));

    let mut cfg = Config::default();
    cfg.rates.metal = -3.0;
    assert!(matches!(manager.save(&cfg), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_config_is_a_serde_error() {
    let base = common::temp_base();
    let manager = ConfigManager::new(base.join("config.json"));
    fs::write(manager.config_path(), "not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn tracker_from_config_uses_snapshot_path_and_rates() {
    let base = common::temp_base();
    let mut cfg = Config::default();
    cfg.data_dir = Some(base.clone());
    cfg.rates.plastic = 5.0;

    let mut tracker = EcoTracker::from_config(&cfg).expect("tracker from config");
    assert_eq!(tracker.store().location(), base.join("households.json"));

    tracker.register_household("H1", "Alice", "1 Main St").unwrap();
    let event = tracker.log_event("H1", "plastic", 2.0).unwrap();
    assert_eq!(eco_tracker::domain::Scored::eco_points(&event), 10);
    tracker.save_all().unwrap();
    assert!(base.join("households.json").exists());
}

#[test]
fn tracker_from_invalid_config_fails() {
    let mut cfg = Config::default();
    cfg.rates.unknown = f64::NAN;
    assert!(matches!(
        EcoTracker::from_config(&cfg),
        Err(EcoError::Config(_))
    ));
}

#[test]
fn failed_config_save_leaves_no_staged_file() {
    let base = common::temp_base();
    let config_path = base.join("config.json");
    // A non-empty directory at the config path makes the final rename fail.
    fs::create_dir_all(config_path.join("occupied")).unwrap();
    let manager = ConfigManager::new(config_path.clone());

    assert!(matches!(
        manager.save(&Config::default()),
        Err(ConfigError::Io(_))
    ));
    assert!(!staging_path(&config_path).exists());
}
