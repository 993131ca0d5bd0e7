//! Versioned on-disk schema for the household registry.
//!
//! The records here are deliberately separate from the domain types so the file
//! layout only changes when [`SNAPSHOT_SCHEMA_VERSION`] does.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    core::registry::Registry,
    domain::{Household, Material, RecyclingEvent, Scored, Weighed},
    errors::{EcoError, Result},
};

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrySnapshot {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub households: Vec<HouseholdRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HouseholdRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub joined_on: NaiveDate,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: Uuid,
    pub material: Material,
    pub weight_kg: f64,
    pub eco_points: u64,
    pub logged_at: DateTime<Utc>,
}

impl RegistrySnapshot {
    /// Captures every household and event currently held by `registry`.
    pub fn capture(registry: &Registry, saved_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            saved_at,
            households: registry.iter().map(HouseholdRecord::from).collect(),
        }
    }

    /// Rebuilds a registry, rejecting snapshots that break model invariants.
    pub fn into_registry(self) -> Result<Registry> {
        if self.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(EcoError::Persistence(format!(
                "snapshot schema version {} is newer than supported version {}",
                self.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }
        let mut registry = Registry::new();
        for record in self.households {
            let household = record.into_household()?;
            let id = household.id().to_string();
            registry.add(household).map_err(|_| {
                EcoError::Persistence(format!("snapshot lists household `{}` twice", id))
            })?;
        }
        Ok(registry)
    }
}

impl From<&Household> for HouseholdRecord {
    fn from(household: &Household) -> Self {
        Self {
            id: household.id().to_string(),
            name: household.name().to_string(),
            address: household.address().to_string(),
            joined_on: household.joined_on(),
            events: household.events().iter().map(EventRecord::from).collect(),
        }
    }
}

impl HouseholdRecord {
    fn into_household(self) -> Result<Household> {
        let mut household = Household::new(self.id, self.name, self.address, self.joined_on)
            .map_err(|err| corrupt("household", err))?;
        for event in self.events {
            let restored = RecyclingEvent::restore(
                event.id,
                event.material,
                event.weight_kg,
                event.eco_points,
                event.logged_at,
            )
            .map_err(|err| corrupt(&format!("event {}", event.id), err))?;
            household.add_event(restored);
        }
        Ok(household)
    }
}

impl From<&RecyclingEvent> for EventRecord {
    fn from(event: &RecyclingEvent) -> Self {
        Self {
            id: event.id(),
            material: event.material(),
            weight_kg: event.weight_kg(),
            eco_points: event.eco_points(),
            logged_at: event.logged_at(),
        }
    }
}

fn corrupt(what: &str, err: EcoError) -> EcoError {
    EcoError::Persistence(format!("invalid {} in snapshot: {}", what, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RateTable;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap()
    }

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        let joined = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut household = Household::new("H1", "Alice", "1 Main St", joined).unwrap();
        let event = RecyclingEvent::new(Material::Metal, 1.0, saved_at(), &RateTable::default())
            .unwrap();
        household.add_event(event);
        registry.add(household).unwrap();
        registry
    }

    #[test]
    fn capture_then_restore_reproduces_registry() {
        let registry = sample_registry();
        let snapshot = RegistrySnapshot::capture(&registry, saved_at());
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(snapshot.households[0].events[0].eco_points, 3);
        assert_eq!(snapshot.into_registry().unwrap(), registry);
    }

    #[test]
    fn newer_schema_versions_are_rejected() {
        let mut snapshot = RegistrySnapshot::capture(&sample_registry(), saved_at());
        snapshot.schema_version = SNAPSHOT_SCHEMA_VERSION + 1;
        let err = snapshot.into_registry().unwrap_err();
        assert!(matches!(err, EcoError::Persistence(message) if message.contains("newer")));
    }

    #[test]
    fn duplicate_household_records_are_rejected() {
        let mut snapshot = RegistrySnapshot::capture(&sample_registry(), saved_at());
        let copy = snapshot.households[0].clone();
        snapshot.households.push(copy);
        assert!(matches!(
            snapshot.into_registry(),
            Err(EcoError::Persistence(_))
        ));
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        let mut snapshot = RegistrySnapshot::capture(&sample_registry(), saved_at());
        snapshot.households[0].events[0].weight_kg = 0.0;
        let err = snapshot.into_registry().unwrap_err();
        assert!(matches!(err, EcoError::Persistence(message) if message.contains("event")));
    }

    #[test]
    fn blank_household_ids_are_rejected() {
        let mut snapshot = RegistrySnapshot::capture(&sample_registry(), saved_at());
        snapshot.households[0].id = " ".into();
        assert!(matches!(
            snapshot.into_registry(),
            Err(EcoError::Persistence(_))
        ));
    }
}
