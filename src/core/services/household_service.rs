use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    core::registry::Registry,
    domain::{Household, Material, RateTable, RecyclingEvent},
    errors::{EcoError, Result},
};

/// Registration and event logging against a [`Registry`].
pub struct HouseholdService;

impl HouseholdService {
    /// Registers a new household joined on `joined_on`.
    pub fn register<'a>(
        registry: &'a mut Registry,
        id: &str,
        name: &str,
        address: &str,
        joined_on: NaiveDate,
    ) -> Result<&'a Household> {
        let household = Household::new(id, name, address, joined_on)?;
        let id = household.id().to_string();
        registry.add(household)?;
        registry.get(&id)
    }

    /// Builds an event from a free-form material label.
    pub fn create_event(
        material: &str,
        weight_kg: f64,
        logged_at: DateTime<Utc>,
        rates: &RateTable,
    ) -> Result<RecyclingEvent> {
        let material = Material::classify(material)
            .ok_or_else(|| EcoError::InvalidInput("material must not be empty".into()))?;
        RecyclingEvent::new(material, weight_kg, logged_at, rates)
    }

    /// Appends a new event to the household identified by `id` and returns a copy of it.
    pub fn log_event(
        registry: &mut Registry,
        id: &str,
        material: &str,
        weight_kg: f64,
        logged_at: DateTime<Utc>,
        rates: &RateTable,
    ) -> Result<RecyclingEvent> {
        let household = registry.get_mut(id)?;
        let event = Self::create_event(material, weight_kg, logged_at, rates)?;
        household.add_event(event.clone());
        Ok(event)
    }

    pub fn events<'a>(registry: &'a Registry, id: &str) -> Result<&'a [RecyclingEvent]> {
        Ok(registry.get(id)?.events())
    }
}
