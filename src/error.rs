//! Error types for household input and construction
//!
//! The projection core itself is total and never returns these; they only
//! surface when building people from raw input.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error("Person name must not be blank")]
    BlankName,

    #[error("{name}: PIA must be a finite, non-negative amount (got {pia})")]
    InvalidPia { name: String, pia: f64 },

    #[error("{name}: claim age {years}y{months}m is outside 62y0m..=70y11m")]
    ClaimAgeOutOfRange { name: String, years: u32, months: u32 },

    #[error("{name}: date of birth {dob} is after {asof}")]
    BirthInFuture {
        name: String,
        dob: NaiveDate,
        asof: NaiveDate,
    },

    #[error("Duplicate person name in household: {0}")]
    DuplicateName(String),

    #[error("No person named {0} in household")]
    UnknownPerson(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
