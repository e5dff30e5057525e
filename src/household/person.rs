//! Household member record and its derived dates

use crate::calendar::add_years_months;
use crate::error::HouseholdError;
use crate::rules::{full_retirement_age, FullRetirementAge};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Earliest claim age in years
pub const MIN_CLAIM_AGE_YEARS: u32 = 62;

/// Latest claim age in years
pub const MAX_CLAIM_AGE_YEARS: u32 = 70;

/// A single household member
///
/// FRA, claim date and end-of-life date are derived on every call from the
/// stored fields; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier, unique within a household
    pub name: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Age the person lives through (inclusive)
    pub life_age: u32,

    /// Claim age, whole years
    pub claim_age_years: u32,

    /// Claim age, additional months (0-11)
    pub claim_age_months: u32,

    /// Monthly Primary Insurance Amount if claimed exactly at FRA
    pub pia_at_fra: f64,
}

impl Person {
    /// Create a person, rejecting a blank name or a negative / non-finite PIA.
    ///
    /// Claim-age range is an input-layer concern and is not enforced here.
    pub fn new(
        name: impl Into<String>,
        dob: NaiveDate,
        life_age: u32,
        claim_age_years: u32,
        claim_age_months: u32,
        pia_at_fra: f64,
    ) -> Result<Self, HouseholdError> {
        let name: String = name.into();
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(HouseholdError::BlankName);
        }
        if !pia_at_fra.is_finite() || pia_at_fra < 0.0 {
            return Err(HouseholdError::InvalidPia { name, pia: pia_at_fra });
        }

        Ok(Self {
            name,
            dob,
            life_age,
            claim_age_years,
            claim_age_months,
            pia_at_fra,
        })
    }

    /// Copy of this person with a different claim age
    pub fn with_claim_age(&self, years: u32, months: u32) -> Self {
        Self {
            claim_age_years: years,
            claim_age_months: months,
            ..self.clone()
        }
    }

    /// Check the claim age against the 62y0m..=70y11m window
    pub fn check_claim_age(&self) -> Result<(), HouseholdError> {
        let in_range = (MIN_CLAIM_AGE_YEARS..=MAX_CLAIM_AGE_YEARS).contains(&self.claim_age_years)
            && self.claim_age_months <= 11;
        if in_range {
            Ok(())
        } else {
            Err(HouseholdError::ClaimAgeOutOfRange {
                name: self.name.clone(),
                years: self.claim_age_years,
                months: self.claim_age_months,
            })
        }
    }

    /// Full Retirement Age, from birth year only
    pub fn fra(&self) -> FullRetirementAge {
        full_retirement_age(self.dob.year())
    }

    /// Date the benefit is claimed: DOB advanced by the claim age, day clamped
    pub fn claim_date(&self) -> NaiveDate {
        add_years_months(self.dob, self.claim_age_years, self.claim_age_months)
    }

    /// Birthday on which the person turns `life_age + 1`.
    ///
    /// The person lives through `life_age`, so death falls just before this
    /// date. Feb 29 birthdays land on Feb 28 in non-leap years.
    pub fn eol_date(&self) -> NaiveDate {
        add_years_months(self.dob, self.life_age.saturating_add(1), 0)
    }
}
