//! Facade the presentation shell talks to.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    config::Config,
    core::{
        registry::Registry,
        services::{CommunityReport, HouseholdService, HouseholdSummary, ReportService},
        time::{Clock, SystemClock},
    },
    domain::{Household, RateTable, RecyclingEvent},
    errors::{EcoError, Result},
    storage::{JsonSnapshotStore, LoadOutcome, SnapshotStore},
};

/// Describes what happened when the persisted snapshot was read.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// No snapshot existed; the registry starts empty.
    Fresh,
    Loaded {
        households: usize,
        saved_at: DateTime<Utc>,
    },
    /// The snapshot could not be used; the registry starts empty.
    Recovered { warning: String },
}

/// Owns the registry for one session and coordinates it with persistence.
pub struct EcoTracker {
    registry: Registry,
    rates: RateTable,
    store: Box<dyn SnapshotStore>,
    clock: Box<dyn Clock>,
}

impl EcoTracker {
    /// Creates a tracker with an empty registry and the default rate table.
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self {
            registry: Registry::new(),
            rates: RateTable::default(),
            store,
            clock: Box::new(SystemClock),
        }
    }

    /// Builds a JSON-backed tracker using the snapshot path and rates from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(EcoError::Config)?;
        let store = JsonSnapshotStore::new(config.snapshot_path());
        Ok(Self::new(Box::new(store)).with_rates(config.rates))
    }

    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    /// Loads the snapshot at session start. A corrupt or unreadable snapshot does not
    /// abort the session: the registry starts empty and the problem is returned as
    /// [`LoadStatus::Recovered`].
    pub fn open(&mut self) -> LoadStatus {
        match self.load_all() {
            Ok(status) => status,
            Err(err) => {
                warn!(
                    path = %self.store.location().display(),
                    error = %err,
                    "starting with an empty registry"
                );
                self.registry = Registry::new();
                LoadStatus::Recovered {
                    warning: err.to_string(),
                }
            }
        }
    }

    /// Replaces the in-memory registry with the stored snapshot. On error the current
    /// registry is kept.
    pub fn load_all(&mut self) -> Result<LoadStatus> {
        let status = match self.store.load()? {
            LoadOutcome::Fresh => {
                self.registry = Registry::new();
                LoadStatus::Fresh
            }
            LoadOutcome::Loaded { registry, saved_at } => {
                let households = registry.len();
                self.registry = registry;
                LoadStatus::Loaded {
                    households,
                    saved_at,
                }
            }
        };
        info!(status = ?status, "household data loaded");
        Ok(status)
    }

    pub fn save_all(&self) -> Result<()> {
        self.store.save(&self.registry, self.clock.now())
    }

    pub fn register_household(
        &mut self,
        id: &str,
        name: &str,
        address: &str,
    ) -> Result<&Household> {
        let joined_on = self.clock.today();
        HouseholdService::register(&mut self.registry, id, name, address, joined_on)
    }

    pub fn log_event(&mut self, id: &str, material: &str, weight_kg: f64) -> Result<RecyclingEvent> {
        let logged_at = self.clock.now();
        HouseholdService::log_event(
            &mut self.registry,
            id,
            material,
            weight_kg,
            logged_at,
            &self.rates,
        )
    }

    pub fn household(&self, id: &str) -> Result<&Household> {
        self.registry.get(id)
    }

    pub fn households(&self) -> Vec<&Household> {
        self.registry.all()
    }

    pub fn household_summaries(&self) -> Vec<HouseholdSummary> {
        ReportService::summaries(&self.registry)
    }

    pub fn events(&self, id: &str) -> Result<&[RecyclingEvent]> {
        HouseholdService::events(&self.registry, id)
    }

    pub fn top_household(&self) -> Result<&Household> {
        ReportService::top_by_points(&self.registry)
    }

    pub fn community_total_weight(&self) -> f64 {
        ReportService::total_community_weight(&self.registry)
    }

    pub fn community_report(&self) -> Result<CommunityReport> {
        ReportService::community_report(&self.registry)
    }
}
