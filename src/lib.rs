//! Household Social Security - yearly retirement benefit projection for one or two people
//!
//! This library provides:
//! - Month-granularity calendar arithmetic with day clamping
//! - Benefit formulas (FRA schedule, early/delayed adjustments, spousal and survivor factors)
//! - Per-person and per-pair benefit resolution
//! - Yearly projection of own, spousal and survivor benefits, prorated by month
//! - Batch and claim-age comparison runs
//!
//! No cost-of-living adjustment is applied.

pub mod calendar;
pub mod error;
pub mod household;
pub mod projection;
pub mod rules;
pub mod scenario;

// Re-export commonly used types
pub use error::HouseholdError;
pub use household::{Household, Person};
pub use projection::{project, ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionRow};
pub use scenario::ScenarioRunner;
