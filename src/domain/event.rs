//! Recycling event records.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    domain::{common::*, material::Material, points::RateTable},
    errors::{EcoError, Result},
};

/// One logged recycling action and the points it earned.
///
/// Points are computed once from the rate table in force at creation and are never
/// recomputed, so the record stays stable even if the rates change later.
#[derive(Debug, Clone, PartialEq)]
pub struct RecyclingEvent {
    id: Uuid,
    material: Material,
    weight_kg: f64,
    eco_points: u64,
    logged_at: DateTime<Utc>,
}

impl RecyclingEvent {
    pub fn new(
        material: Material,
        weight_kg: f64,
        logged_at: DateTime<Utc>,
        rates: &RateTable,
    ) -> Result<Self> {
        validate_weight(weight_kg)?;
        Ok(Self {
            id: Uuid::new_v4(),
            material,
            weight_kg,
            eco_points: rates.points_for(material, weight_kg),
            logged_at,
        })
    }

    /// Rebuilds an event from persisted parts without recomputing its points.
    pub fn restore(
        id: Uuid,
        material: Material,
        weight_kg: f64,
        eco_points: u64,
        logged_at: DateTime<Utc>,
    ) -> Result<Self> {
        validate_weight(weight_kg)?;
        Ok(Self {
            id,
            material,
            weight_kg,
            eco_points,
            logged_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

fn validate_weight(weight_kg: f64) -> Result<()> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(EcoError::InvalidInput(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )))
    }
}

impl Weighed for RecyclingEvent {
    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl Scored for RecyclingEvent {
    fn eco_points(&self) -> u64 {
        self.eco_points
    }
}

impl fmt::Display for RecyclingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}: {:.2} kg -> {} pts",
            self.logged_at.date_naive(),
            self.material,
            self.weight_kg,
            self.eco_points
        )
    }
}
