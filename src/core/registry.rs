//! The authoritative in-memory collection of households.

use std::collections::BTreeMap;

use crate::{
    domain::Household,
    errors::{EcoError, Result},
};

/// Maps household ids to households. Iteration follows id order, so listings and
/// reports are stable across calls and across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    households: BTreeMap<String, Household>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a household, refusing ids that are already taken.
    pub fn add(&mut self, household: Household) -> Result<()> {
        if self.households.contains_key(household.id()) {
            return Err(EcoError::DuplicateId(household.id().to_string()));
        }
        self.households
            .insert(household.id().to_string(), household);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Household> {
        self.households
            .get(id)
            .ok_or_else(|| EcoError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Household> {
        self.households
            .get_mut(id)
            .ok_or_else(|| EcoError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.households.contains_key(id)
    }

    /// Snapshot view of every household, ordered by id.
    pub fn all(&self) -> Vec<&Household> {
        self.households.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Household> {
        self.households.values()
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }
}
