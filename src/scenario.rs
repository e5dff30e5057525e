//! Scenario runner for batch projections and claim-age comparisons
//!
//! Holds one projection config and fans households or claim-age variants out
//! across threads with rayon. Each projection is independent, so results are
//! identical to running them one at a time.

use crate::error::HouseholdError;
use crate::household::Household;
use crate::projection::{worker_monthly_at_claim, ProjectionConfig, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of projecting one claim age
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimAgeOutcome {
    pub claim_years: u32,
    pub claim_months: u32,
    /// Adjusted monthly benefit at the claim age
    pub monthly_at_claim: f64,
    /// Household benefits summed over the whole horizon (unrounded)
    pub lifetime_household_total: f64,
}

/// Scenario runner with a fixed projection config
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::new(start, 30));
/// let outcomes = runner.compare_claim_ages(&household, "Alex", &[(62, 0), (67, 0), (70, 0)])?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, household: &Household) -> ProjectionResult {
        ProjectionEngine::new(self.config.clone()).project_household(household)
    }

    /// Run projections for multiple households in parallel, preserving order
    pub fn run_batch(&self, households: &[Household]) -> Vec<ProjectionResult> {
        households.par_iter().map(|h| self.run(h)).collect()
    }

    /// Re-project the household once per claim age for the named member
    pub fn compare_claim_ages(
        &self,
        household: &Household,
        name: &str,
        claim_ages: &[(u32, u32)],
    ) -> Result<Vec<ClaimAgeOutcome>, HouseholdError> {
        let variants = claim_ages
            .iter()
            .map(|&(years, months)| household.with_claim_age(name, years, months))
            .collect::<Result<Vec<_>, _>>()?;

        let idx = household
            .position(name)
            .ok_or_else(|| HouseholdError::UnknownPerson(name.to_string()))?;

        Ok(variants
            .par_iter()
            .zip(claim_ages.par_iter())
            .map(|(variant, &(claim_years, claim_months))| ClaimAgeOutcome {
                claim_years,
                claim_months,
                monthly_at_claim: worker_monthly_at_claim(&variant.people()[idx]),
                lifetime_household_total: self.run(variant).lifetime_household_total(),
            })
            .collect())
    }

    /// Every whole-year claim age from 62 through 70
    pub fn whole_year_claim_ages() -> Vec<(u32, u32)> {
        (62..=70).map(|y| (y, 0)).collect()
    }
}
