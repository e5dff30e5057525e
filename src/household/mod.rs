//! Household members, input loading and summary tables

mod person;
pub mod loader;
pub mod summary;

pub use person::{Person, MAX_CLAIM_AGE_YEARS, MIN_CLAIM_AGE_YEARS};
pub use loader::{load_household, load_household_from_reader};
pub use summary::{ages_by_year, current_age, summarize, PersonSummary};

use crate::error::HouseholdError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered set of people projected together.
///
/// Spousal and survivor rules are pairwise: they only apply when the
/// household has exactly two members. Any other size projects own benefits
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    people: Vec<Person>,
}

impl Household {
    /// Build a household, rejecting duplicate names
    pub fn new(people: Vec<Person>) -> Result<Self, HouseholdError> {
        let mut seen = HashSet::new();
        for p in &people {
            if !seen.insert(p.name.as_str()) {
                return Err(HouseholdError::DuplicateName(p.name.clone()));
            }
        }
        Ok(Self { people })
    }

    pub fn single(person: Person) -> Self {
        Self { people: vec![person] }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// The two members when spousal/survivor rules apply
    pub fn pair(&self) -> Option<(&Person, &Person)> {
        match self.people.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|p| p.name == name)
    }

    /// Copy of the household with one member's claim age replaced
    pub fn with_claim_age(&self, name: &str, years: u32, months: u32) -> Result<Self, HouseholdError> {
        let idx = self
            .position(name)
            .ok_or_else(|| HouseholdError::UnknownPerson(name.to_string()))?;
        let mut people = self.people.clone();
        people[idx] = people[idx].with_claim_age(years, months);
        Ok(Self { people })
    }

    /// Reject anyone born after `asof`
    pub fn validate_as_of(&self, asof: NaiveDate) -> Result<(), HouseholdError> {
        match self.people.iter().find(|p| p.dob > asof) {
            Some(p) => Err(HouseholdError::BirthInFuture {
                name: p.name.clone(),
                dob: p.dob,
                asof,
            }),
            None => Ok(()),
        }
    }
}
