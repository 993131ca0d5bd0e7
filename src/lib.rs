#![doc(test(attr(deny(warnings))))]

//! Eco Tracker records households in a recycling program, the recycling events
//! they log, and the eco-points those events earn. It persists the whole
//! registry as a versioned JSON snapshot between sessions.
//!
//! Interactive prompting and console output belong to the calling shell; this
//! crate only returns typed results and emits `tracing` diagnostics.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{EcoTracker, LoadStatus, Registry};
pub use errors::{EcoError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Eco Tracker tracing initialized.");
    });
}
