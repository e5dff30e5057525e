//! Per-person summary and ages-by-year tables

use super::Person;
use crate::rules::FullRetirementAge;
use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::Serialize;

/// Age in whole years at `asof`; zero if `asof` precedes `dob`
pub fn current_age(dob: NaiveDate, asof: NaiveDate) -> u32 {
    let mut years = asof.year() - dob.year();
    if (asof.month(), asof.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// One summary line for a household member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSummary {
    pub name: String,
    pub dob: NaiveDate,
    pub current_age: u32,
    pub life_age: u32,
    pub years_remaining: u32,
    pub eol_date: NaiveDate,
    pub claim_age_years: u32,
    pub claim_age_months: u32,
    pub fra: FullRetirementAge,
    pub pia_at_fra: f64,
}

impl PersonSummary {
    pub fn from_person(person: &Person, asof: NaiveDate) -> Self {
        let age = current_age(person.dob, asof);
        if person.life_age < age {
            warn!(
                "{}: life expectancy ({}) is below current age ({})",
                person.name, person.life_age, age
            );
        }

        Self {
            name: person.name.clone(),
            dob: person.dob,
            current_age: age,
            life_age: person.life_age,
            years_remaining: person.life_age.saturating_sub(age),
            eol_date: person.eol_date(),
            claim_age_years: person.claim_age_years,
            claim_age_months: person.claim_age_months,
            fra: person.fra(),
            pia_at_fra: person.pia_at_fra,
        }
    }
}

pub fn summarize(people: &[Person], asof: NaiveDate) -> Vec<PersonSummary> {
    people.iter().map(|p| PersonSummary::from_person(p, asof)).collect()
}

/// Age of each person in each future year `1..=years`, `None` once past `life_age`
pub fn ages_by_year(people: &[Person], asof: NaiveDate, years: u32) -> Vec<(u32, Vec<Option<u32>>)> {
    let now: Vec<u32> = people.iter().map(|p| current_age(p.dob, asof)).collect();

    (1..=years)
        .map(|y| {
            let ages = people
                .iter()
                .zip(&now)
                .map(|(p, &age)| Some(age.saturating_add(y)).filter(|&a| a <= p.life_age))
                .collect();
            (y, ages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_current_age() {
        let dob = d(1959, 6, 11);
        assert_eq!(current_age(dob, d(2025, 6, 10)), 65);
        assert_eq!(current_age(dob, d(2025, 6, 11)), 66);
        assert_eq!(current_age(dob, d(1950, 1, 1)), 0);
    }

    #[test]
    fn test_summary() {
        let p = Person::new("A", d(1959, 6, 11), 85, 66, 10, 3500.0).unwrap();
        let s = PersonSummary::from_person(&p, d(2025, 8, 9));
        assert_eq!(s.current_age, 66);
        assert_eq!(s.years_remaining, 19);
        assert_eq!(s.eol_date, d(2045, 6, 11));
        assert_eq!(s.fra, FullRetirementAge::new(66, 10));

        // Already past life expectancy
        let old = Person::new("Old", d(1930, 1, 1), 80, 65, 0, 900.0).unwrap();
        assert_eq!(PersonSummary::from_person(&old, d(2025, 8, 9)).years_remaining, 0);
    }

    #[test]
    fn test_ages_by_year() {
        let a = Person::new("A", d(1959, 6, 11), 68, 66, 10, 3500.0).unwrap();
        let b = Person::new("B", d(1962, 1, 1), 95, 67, 0, 1000.0).unwrap();
        let table = ages_by_year(&[a, b], d(2025, 8, 9), 3);

        assert_eq!(table.len(), 3);
        assert_eq!(table[0], (1, vec![Some(67), Some(64)]));
        assert_eq!(table[1], (2, vec![Some(68), Some(65)]));
        // A lives through 68 only
        assert_eq!(table[2], (3, vec![None, Some(66)]));
    }
}
