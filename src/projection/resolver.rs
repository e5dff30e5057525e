//! Benefit resolution for individual people and survivor pairs
//!
//! Turns a [`Person`] (plus, for survivors, a decedent and death date) into
//! monthly or annual amounts using the formulas in [`crate::rules`].

use crate::calendar::{age_in_months, age_in_years_months, months_between};
use crate::household::Person;
use crate::rules::{
    delayed_credit_cap_months, retirement_adjustment, spousal_base, spousal_reduction,
    survivor_reduction,
};
use chrono::NaiveDate;
use log::debug;

/// Youngest age (in months) at which a survivor benefit is payable: 60 years
pub const SURVIVOR_ELIGIBILITY_MONTHS: u32 = 60 * 12;

/// Apply the retirement adjustment with delayed months capped at `(70 - fra_years) * 12`
fn adjusted_for_fra(person: &Person, months_from_fra: i32) -> f64 {
    let cap = delayed_credit_cap_months(person.fra()) as i32;
    retirement_adjustment(person.pia_at_fra, months_from_fra.min(cap))
}

/// Signed months between the claim age and FRA (negative = claimed early)
pub fn claim_months_from_fra(person: &Person) -> i32 {
    let fra = person.fra();
    months_between(person.claim_age_years, person.claim_age_months, fra.years, fra.months)
}

/// Months the person files before their own FRA (zero if at or after FRA)
pub fn claim_months_early(person: &Person) -> u32 {
    claim_months_from_fra(person).saturating_neg().max(0) as u32
}

/// Worker's own monthly benefit from the claim date onwards
pub fn worker_monthly_at_claim(person: &Person) -> f64 {
    adjusted_for_fra(person, claim_months_from_fra(person))
}

/// Monthly spousal supplement `person` draws on `spouse`'s record while both are alive and filed.
///
/// Base is half the spouse's PIA less the person's own PIA, floored at zero,
/// reduced by the person's own early-filing months.
pub fn spousal_monthly(person: &Person, spouse: &Person) -> f64 {
    let base = (spousal_base(spouse.pia_at_fra) - person.pia_at_fra).max(0.0);
    base * spousal_reduction(claim_months_early(person))
}

/// Decedent's monthly benefit as of `death_date`.
///
/// Already claimed: the adjusted amount at claim. Not yet claimed but past
/// FRA: PIA plus delayed credits accrued to death. Died before FRA without
/// claiming: raw PIA, no early reduction.
pub fn decedent_monthly_at_death(decedent: &Person, death_date: NaiveDate) -> f64 {
    if death_date >= decedent.claim_date() {
        return worker_monthly_at_claim(decedent);
    }

    let fra = decedent.fra();
    let (age_years, age_months) = age_in_years_months(decedent.dob, death_date);
    let months_from_fra = months_between(age_years, age_months, fra.years, fra.months);
    if months_from_fra >= 0 {
        adjusted_for_fra(decedent, months_from_fra)
    } else {
        decedent.pia_at_fra
    }
}

/// Annual survivor benefit payable to `survivor` after `decedent` dies on `death_date`.
///
/// Zero if the survivor is under 60 at the death date. Otherwise the
/// decedent's at-death amount reduced by the survivor's months before their
/// own FRA, never exceeding the at-death amount.
pub fn survivor_annual(survivor: &Person, decedent: &Person, death_date: NaiveDate) -> f64 {
    let survivor_age = age_in_months(survivor.dob, death_date);
    if survivor_age < SURVIVOR_ELIGIBILITY_MONTHS {
        return 0.0;
    }

    let decedent_monthly = decedent_monthly_at_death(decedent, death_date);

    let months_early = survivor.fra().total_months().saturating_sub(survivor_age);
    let survivor_monthly = (decedent_monthly * survivor_reduction(months_early)).min(decedent_monthly);

    debug!(
        "Survivor {} on {} at {}: decedent {:.2}/mo, {} months early -> {:.2}/mo",
        survivor.name, decedent.name, death_date, decedent_monthly, months_early, survivor_monthly
    );

    12.0 * survivor_monthly
}
