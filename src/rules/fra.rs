//! Full retirement age schedule by birth year

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age at which delayed retirement credits stop accruing
pub const DELAYED_CREDIT_END_AGE: u32 = 70;

/// Full Retirement Age as (years, months)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FullRetirementAge {
    pub years: u32,
    pub months: u32,
}

impl FullRetirementAge {
    pub const fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    /// FRA expressed in whole months of age
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for FullRetirementAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.years, self.months)
    }
}

/// FRA step function
///
/// | Birth year  | FRA                          |
/// |-------------|------------------------------|
/// | <= 1937     | 65y0m                        |
/// | 1938..=1942 | 65y + 2 months per year      |
/// | 1943..=1954 | 66y0m                        |
/// | 1955..=1959 | 66y + 2 months per year      |
/// | >= 1960     | 67y0m                        |
pub fn full_retirement_age(birth_year: i32) -> FullRetirementAge {
    match birth_year {
        i32::MIN..=1937 => FullRetirementAge::new(65, 0),
        1938..=1942 => FullRetirementAge::new(65, ((birth_year - 1937) * 2) as u32),
        1943..=1954 => FullRetirementAge::new(66, 0),
        1955..=1959 => FullRetirementAge::new(66, ((birth_year - 1954) * 2) as u32),
        _ => FullRetirementAge::new(67, 0),
    }
}

/// Maximum delayed-credit months for a given FRA: `(70 - fra_years) * 12`.
///
/// Applied to both the worker's own claim and a decedent's at-death amount so
/// the two paths agree (FRA 67 caps at 36 months, FRA 66 at 48).
pub fn delayed_credit_cap_months(fra: FullRetirementAge) -> u32 {
    DELAYED_CREDIT_END_AGE.saturating_sub(fra.years) * 12
}
