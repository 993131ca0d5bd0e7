use chrono::NaiveDate;

use crate::{
    core::registry::Registry,
    domain::{common::sum_points, common::sum_weight, Household},
    errors::{EcoError, Result},
};

/// Read-only totals for a single household.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdSummary {
    pub id: String,
    pub name: String,
    pub address: String,
    pub joined_on: NaiveDate,
    pub event_count: usize,
    pub total_weight_kg: f64,
    pub total_points: u64,
}

impl From<&Household> for HouseholdSummary {
    fn from(household: &Household) -> Self {
        Self {
            id: household.id().to_string(),
            name: household.name().to_string(),
            address: household.address().to_string(),
            joined_on: household.joined_on(),
            event_count: household.events().len(),
            total_weight_kg: household.total_weight(),
            total_points: household.total_points(),
        }
    }
}

/// Community-wide figures backing the reports screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityReport {
    pub top_household: HouseholdSummary,
    pub total_weight_kg: f64,
    pub total_points: u64,
    pub household_count: usize,
    pub event_count: usize,
}

/// Aggregations across every household in a [`Registry`].
pub struct ReportService;

impl ReportService {
    /// Household with strictly the most points. Ties go to the first household in
    /// iteration order, which for [`Registry`] means the lowest id.
    pub fn top_by_points(registry: &Registry) -> Result<&Household> {
        let mut top: Option<&Household> = None;
        for household in registry.iter() {
            let leads = top.map_or(true, |current| {
                household.total_points() > current.total_points()
            });
            if leads {
                top = Some(household);
            }
        }
        top.ok_or(EcoError::EmptyRegistry)
    }

    pub fn total_community_weight(registry: &Registry) -> f64 {
        sum_weight(registry.iter())
    }

    pub fn total_community_points(registry: &Registry) -> u64 {
        sum_points(registry.iter())
    }

    pub fn summaries(registry: &Registry) -> Vec<HouseholdSummary> {
        registry.iter().map(HouseholdSummary::from).collect()
    }

    pub fn community_report(registry: &Registry) -> Result<CommunityReport> {
        let top = Self::top_by_points(registry)?;
        Ok(CommunityReport {
            top_household: HouseholdSummary::from(top),
            total_weight_kg: Self::total_community_weight(registry),
            total_points: Self::total_community_points(registry),
            household_count: registry.len(),
            event_count: registry.iter().map(|h| h.events().len()).sum(),
        })
    }
}
