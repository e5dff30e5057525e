//! Social Security benefit formulas
//!
//! Pure functions over birth years, month offsets and monthly amounts. No
//! cost-of-living adjustment is modelled anywhere.

mod adjustments;
mod fra;

pub use adjustments::{
    retirement_adjustment, spousal_base, spousal_reduction, survivor_reduction,
    MAX_DELAYED_CREDIT_MONTHS, SURVIVOR_REDUCTION_FLOOR,
};
pub use fra::{delayed_credit_cap_months, full_retirement_age, FullRetirementAge, DELAYED_CREDIT_END_AGE};
