//! Households registered in the recycling program.

use chrono::NaiveDate;

use crate::{
    domain::{common::*, event::RecyclingEvent},
    errors::{EcoError, Result},
};

/// A participant unit owning an ordered history of recycling events.
#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    id: String,
    name: String,
    address: String,
    joined_on: NaiveDate,
    events: Vec<RecyclingEvent>,
}

impl Household {
    /// Creates a household with no events. The id is trimmed and must not be blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        joined_on: NaiveDate,
    ) -> Result<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(EcoError::InvalidInput(
                "household ID must not be empty".into(),
            ));
        }
        Ok(Self {
            id,
            name: name.into().trim().to_string(),
            address: address.into().trim().to_string(),
            joined_on,
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn joined_on(&self) -> NaiveDate {
        self.joined_on
    }

    /// Events in the order they were logged.
    pub fn events(&self) -> &[RecyclingEvent] {
        &self.events
    }

    pub fn add_event(&mut self, event: RecyclingEvent) {
        self.events.push(event);
    }

    pub fn total_weight(&self) -> f64 {
        sum_weight(&self.events)
    }

    pub fn total_points(&self) -> u64 {
        sum_points(&self.events)
    }
}

impl Weighed for Household {
    fn weight_kg(&self) -> f64 {
        self.total_weight()
    }
}

impl Scored for Household {
    fn eco_points(&self) -> u64 {
        self.total_points()
    }
}

impl Displayable for Household {
    fn display_label(&self) -> String {
        format!(
            "ID: {}, Name: {}, Address: {}, Joined: {}",
            self.id, self.name, self.address, self.joined_on
        )
    }
}
