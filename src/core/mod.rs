//! Registry, services, and the session facade. Depends on `domain`; talks to
//! persistence only through [`crate::storage::SnapshotStore`].

pub mod registry;
pub mod services;
pub mod time;
pub mod tracker;

pub use registry::Registry;
pub use time::{Clock, FixedClock, SystemClock};
pub use tracker::{EcoTracker, LoadStatus};
