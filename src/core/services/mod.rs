pub mod household_service;
pub mod report_service;

pub use household_service::HouseholdService;
pub use report_service::{CommunityReport, HouseholdSummary, ReportService};
