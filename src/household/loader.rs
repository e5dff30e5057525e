//! Load household members from CSV
//!
//! Expected header: `Name,DOB,LifeAge,ClaimAgeYears,ClaimAgeMonths,PIA`
//! with `DOB` as an ISO `YYYY-MM-DD` date.

use super::{Household, Person};
use crate::error::HouseholdError;
use chrono::NaiveDate;
use csv::Reader;
use log::info;
use std::path::Path;

/// Default household file used by the CLI
pub const DEFAULT_HOUSEHOLD_PATH: &str = "data/household.csv";

/// Raw CSV row matching the household file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "DOB")]
    dob: NaiveDate,
    #[serde(rename = "LifeAge")]
    life_age: u32,
    #[serde(rename = "ClaimAgeYears")]
    claim_age_years: u32,
    #[serde(rename = "ClaimAgeMonths")]
    claim_age_months: u32,
    #[serde(rename = "PIA")]
    pia: f64,
}

impl CsvRow {
    fn to_person(self) -> Result<Person, HouseholdError> {
        let person = Person::new(
            self.name,
            self.dob,
            self.life_age,
            self.claim_age_years,
            self.claim_age_months,
            self.pia,
        )?;
        person.check_claim_age()?;
        Ok(person)
    }
}

fn read_people<R: std::io::Read>(mut reader: Reader<R>) -> Result<Household, HouseholdError> {
    let mut people = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        people.push(row.to_person()?);
    }

    info!("Loaded {} household member(s)", people.len());
    Household::new(people)
}

/// Load a household from a CSV file
pub fn load_household<P: AsRef<Path>>(path: P) -> Result<Household, HouseholdError> {
    let reader = Reader::from_path(path)?;
    read_people(reader)
}

/// Load a household from any reader (e.g., string buffer, stdin)
pub fn load_household_from_reader<R: std::io::Read>(reader: R) -> Result<Household, HouseholdError> {
    read_people(Reader::from_reader(reader))
}
