//! Persistent tracker preferences: where the snapshot lives and how points are awarded.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
