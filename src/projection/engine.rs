//! Yearly household benefit projection with month-level proration

use super::resolver::{spousal_monthly, survivor_annual, worker_monthly_at_claim};
use super::rows::{round_cents, MemberYear, ProjectionResult, ProjectionRow, ZeroDisplay};
use super::state::SupportStatus;
use crate::calendar::{add_months, add_years_months, first_of_month, whole_months_in_overlap};
use crate::household::{summarize, Household, Person};
use chrono::NaiveDate;
use log::{debug, info, warn};

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Projection origin; year 1 starts one year after this date
    pub start_date: NaiveDate,

    /// Number of yearly rows to produce
    pub horizon_years: u32,

    /// How zero amounts render in the column view
    pub zero_display: ZeroDisplay,
}

impl ProjectionConfig {
    pub fn new(start_date: NaiveDate, horizon_years: u32) -> Self {
        Self {
            start_date,
            horizon_years,
            zero_display: ZeroDisplay::default(),
        }
    }

    /// Horizon long enough to cover the longest remaining life in the household
    pub fn horizon_from_life_expectancy(people: &[Person], asof: NaiveDate) -> u32 {
        summarize(people, asof)
            .iter()
            .map(|s| s.years_remaining)
            .max()
            .unwrap_or(0)
    }
}

/// Per-person facts fixed for the whole run (all month boundaries are firsts of month)
#[derive(Debug, Clone)]
struct MemberFacts {
    claim_month: NaiveDate,
    death_month: NaiveDate,
    monthly_at_claim: f64,
}

impl MemberFacts {
    fn from_person(person: &Person) -> Self {
        Self {
            claim_month: first_of_month(person.claim_date()),
            death_month: first_of_month(person.eol_date()),
            monthly_at_claim: worker_monthly_at_claim(person),
        }
    }
}

/// Half-open month window `[start, end)` for one projection year
#[derive(Debug, Clone, Copy)]
struct YearWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl YearWindow {
    fn new(start_date: NaiveDate, year: u32) -> Self {
        let asof = add_years_months(start_date, year, 0);
        Self {
            start: first_of_month(asof),
            end: first_of_month(add_years_months(asof, 1, 0)),
        }
    }

    fn months_of(&self, range_start: NaiveDate, range_end: NaiveDate) -> u32 {
        whole_months_in_overlap(self.start, self.end, range_start, range_end)
    }

    fn last_month(&self) -> NaiveDate {
        add_months(self.end, -1)
    }
}

/// Main projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run projection for a household
    pub fn project_household(&self, household: &Household) -> ProjectionResult {
        self.project_people(household.people())
    }

    /// Run projection for an ordered list of people.
    ///
    /// Spousal and survivor terms apply only when there are exactly two
    /// people; any other count gets own benefits only.
    pub fn project_people(&self, people: &[Person]) -> ProjectionResult {
        let mut result = ProjectionResult::new(people.iter().map(|p| p.name.clone()));
        if self.config.horizon_years == 0 {
            return result;
        }
        if people.len() > 2 {
            warn!(
                "Household has {} members; spousal and survivor benefits are only modelled for two",
                people.len()
            );
        }

        info!(
            "Projecting {} member(s) for {} years from {}",
            people.len(),
            self.config.horizon_years,
            self.config.start_date
        );

        let facts: Vec<MemberFacts> = people.iter().map(MemberFacts::from_person).collect();
        let paired = people.len() == 2;

        for year in 1..=self.config.horizon_years {
            let window = YearWindow::new(self.config.start_date, year);
            let (row, totals) = self.calculate_year(people, &facts, paired, year, window);
            debug!("Year {} ({} .. {}): household {:.2}", year, window.start, window.end, row.household_total);
            result.add_row(row, &totals);
        }

        info!("Projection complete: lifetime household total {:.2}", result.lifetime_household_total());
        result
    }

    /// Calculate one year's row, returning it with the unrounded member totals.
    ///
    /// The survivor switch pays from the month after the spouse's death (or
    /// the whole year when the death month opens it) but stops at the
    /// survivor's own death month, so a deceased survivor is never paid.
    fn calculate_year(
        &self,
        people: &[Person],
        facts: &[MemberFacts],
        paired: bool,
        year: u32,
        window: YearWindow,
    ) -> (ProjectionRow, Vec<f64>) {
        let n = people.len();
        let other = |i: usize| if paired { Some(1 - i) } else { None };

        // Own benefit; for couples it stops at the spouse's death month so the
        // survivor switch below does not double-count
        let own: Vec<f64> = (0..n)
            .map(|i| {
                let f = &facts[i];
                let end = match other(i) {
                    Some(j) => f.death_month.min(facts[j].death_month),
                    None => f.death_month,
                };
                f.monthly_at_claim * window.months_of(f.claim_month, end) as f64
            })
            .collect();

        // Spousal supplement while both are alive and both have filed
        let spousal: Vec<f64> = (0..n)
            .map(|i| match other(i) {
                Some(j) => {
                    let start = facts[i].claim_month.max(facts[j].claim_month);
                    let end = facts[i].death_month.min(facts[j].death_month);
                    spousal_monthly(&people[i], &people[j]) * window.months_of(start, end) as f64
                }
                None => 0.0,
            })
            .collect();

        let mut total: Vec<f64> = own.iter().zip(&spousal).map(|(o, s)| o + s).collect();

        // Survivor switch: higher of survivor and own benefit once the spouse
        // has died. Nothing is paid in the death month itself unless the death
        // month opens the year.
        if paired {
            for surv in 0..n {
                let dec = 1 - surv;
                let death = facts[dec].death_month;
                let start = if death <= window.start { window.start } else { add_months(death, 1) };
                let months = window.months_of(start, facts[surv].death_month);
                if months > 0 {
                    let survivor_monthly = survivor_annual(&people[surv], &people[dec], death) / 12.0;
                    total[surv] += survivor_monthly.max(facts[surv].monthly_at_claim) * months as f64;
                }
            }
        }

        let members = (0..n)
            .map(|i| MemberYear {
                name: people[i].name.clone(),
                own: round_cents(own[i]),
                spousal: round_cents(spousal[i]),
                total: round_cents(total[i]),
                status: self.status_at(people, facts, i, other(i), window.last_month()),
            })
            .collect();

        let row = ProjectionRow {
            year,
            members,
            household_total: round_cents(total.iter().sum()),
        };
        (row, total)
    }

    /// Lifecycle status of person `i` in `month`
    fn status_at(
        &self,
        people: &[Person],
        facts: &[MemberFacts],
        i: usize,
        spouse: Option<usize>,
        month: NaiveDate,
    ) -> SupportStatus {
        let f = &facts[i];
        if month >= f.death_month {
            return SupportStatus::Deceased;
        }
        match spouse {
            Some(j) if month >= facts[j].death_month => SupportStatus::Survivor,
            _ if month < f.claim_month => SupportStatus::PreClaim,
            Some(j) if month >= facts[j].claim_month && spousal_monthly(&people[i], &people[j]) > 0.0 => {
                SupportStatus::OwnAndSpousal
            }
            _ => SupportStatus::Own,
        }
    }
}

/// Project a household of people from `start_date` over `horizon_years`.
///
/// Total for any input: zero horizon yields no rows, and households that are
/// not exactly two people get own benefits only.
pub fn project(people: &[Person], start_date: NaiveDate, horizon_years: u32) -> Vec<ProjectionRow> {
    ProjectionEngine::new(ProjectionConfig::new(start_date, horizon_years))
        .project_people(people)
        .rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::months_between;
    use crate::projection::resolver::decedent_monthly_at_death;
    use crate::rules::retirement_adjustment;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn alex() -> Person {
        Person::new("A", d(1959, 6, 11), 85, 66, 10, 3500.0).unwrap()
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        assert!(project(&[alex()], d(2026, 1, 1), 0).is_empty());
    }

    #[test]
    fn test_single_person_year_one() {
        // Claims 2026-04-11, well before year 1 (2027-01..2028-01)
        let a = alex();
        let rows = project(&[a.clone()], d(2026, 1, 1), 5);
        assert_eq!(rows.len(), 5);

        let fra = a.fra();
        let expected = retirement_adjustment(3500.0, months_between(66, 10, fra.years, fra.months)) * 12.0;
        let year1 = rows[0].member("A").unwrap();
        assert_eq!(year1.own, round_cents(expected));
        assert_eq!(year1.spousal, 0.0);
        assert_eq!(year1.total, year1.own);
        assert_eq!(rows[0].household_total, year1.total);
        assert_eq!(year1.status, SupportStatus::Own);
    }

    #[test]
    fn test_claim_year_is_prorated() {
        // Claim month April 2026; year 1 window is 2025-07..2026-07 -> 3 months paid
        let rows = project(&[alex()], d(2024, 7, 20), 2);
        assert_eq!(rows[0].members[0].own, 3.0 * 3500.0);
        assert_eq!(rows[1].members[0].own, 12.0 * 3500.0);

        // Before the claim the person is pre-claim and paid nothing
        let rows = project(&[alex()], d(2020, 1, 1), 1);
        assert_eq!(rows[0].members[0].own, 0.0);
        assert_eq!(rows[0].members[0].status, SupportStatus::PreClaim);
    }

    #[test]
    fn test_own_benefit_stops_at_death_month() {
        // Death month June 2045; window 2045-01..2046-01 pays Jan..May
        let rows = project(&[alex()], d(2044, 1, 1), 2);
        assert_eq!(rows[0].members[0].own, 5.0 * 3500.0);
        assert_eq!(rows[0].members[0].status, SupportStatus::Deceased);
        assert_eq!(rows[1].members[0].own, 0.0);
        assert_eq!(rows[1].household_total, 0.0);
    }

    #[test]
    fn test_more_than_two_people_is_own_only() {
        let a = Person::new("A", d(1960, 1, 1), 95, 67, 0, 3000.0).unwrap();
        let b = Person::new("B", d(1960, 1, 1), 70, 67, 0, 500.0).unwrap();
        let c = Person::new("C", d(1960, 1, 1), 95, 67, 0, 800.0).unwrap();
        let rows = project(&[a, b, c], d(2030, 1, 1), 10);
        for row in &rows {
            for m in &row.members {
                assert_eq!(m.spousal, 0.0);
                assert_eq!(m.total, m.own);
            }
        }
    }

    /// Couple where B dies in month 7 of projection year 3
    fn couple() -> (Person, Person) {
        // A: FRA 67, claims at 67 on 2029-03-01
        let a = Person::new("A", d(1962, 3, 1), 95, 67, 0, 1000.0).unwrap();
        // B: FRA 67, claims at 67 on 2027-07-01, eol 2033-07-01 (lives through 72)
        let b = Person::new("B", d(1960, 7, 1), 72, 67, 0, 3000.0).unwrap();
        (a, b)
    }

    #[test]
    fn test_couple_spousal_and_survivor_switch() {
        let (a, b) = couple();
        // Year 1 window: 2031-01..2032-01, year 3: 2033-01..2034-01
        let rows = project(&[a.clone(), b.clone()], d(2030, 1, 1), 5);

        // Year 1: both claimed, A draws a spousal supplement of 1500 - 1000
        let y1 = &rows[0];
        assert_eq!(y1.member("A").unwrap().own, 12_000.0);
        assert_eq!(y1.member("A").unwrap().spousal, 6_000.0);
        assert_eq!(y1.member("A").unwrap().status, SupportStatus::OwnAndSpousal);
        assert_eq!(y1.member("B").unwrap().own, 36_000.0);
        assert_eq!(y1.member("B").unwrap().spousal, 0.0);
        assert_eq!(y1.household_total, 54_000.0);

        // Year 3: B dies in July (month 7). Own and spousal prorated for Jan..Jun
        let y3 = &rows[2];
        let b3 = y3.member("B").unwrap();
        assert_eq!(b3.own, 6.0 * 3000.0);
        assert_eq!(b3.total, 6.0 * 3000.0);
        assert_eq!(b3.status, SupportStatus::Deceased);

        let a3 = y3.member("A").unwrap();
        assert_eq!(a3.own, 6.0 * 1000.0);
        assert_eq!(a3.spousal, 6.0 * 500.0);
        // Survivor months Aug..Dec; A is 71 at B's death, past FRA, so 100% of B's 3000
        let survivor_monthly = survivor_annual(&a, &b, d(2033, 7, 1)) / 12.0;
        assert_relative_eq!(survivor_monthly, 3000.0, epsilon = 1e-9);
        assert_eq!(a3.total, 6.0 * 1000.0 + 6.0 * 500.0 + 5.0 * 3000.0);
        assert_eq!(a3.status, SupportStatus::Survivor);

        // Year 4 onwards: full year of survivor benefit, B paid nothing
        for row in &rows[3..] {
            let a = row.member("A").unwrap();
            assert_eq!(a.own, 0.0);
            assert_eq!(a.spousal, 0.0);
            assert_eq!(a.total, 12.0 * 3000.0);
            assert_eq!(row.member("B").unwrap().total, 0.0);
            assert_eq!(row.household_total, 36_000.0);
        }
    }

    #[test]
    fn test_spousal_starts_mid_year_with_second_claim() {
        // A claims 2029-03, B has been drawing since 2027-07; window 2029-01..2030-01
        let (a, b) = couple();
        let rows = project(&[a, b], d(2028, 1, 1), 1);

        let a1 = rows[0].member("A").unwrap();
        assert_eq!(a1.own, 10.0 * 1000.0);
        assert_eq!(a1.spousal, 10.0 * 500.0);
        assert_eq!(a1.total, 15_000.0);
        assert_eq!(a1.status, SupportStatus::OwnAndSpousal);

        let b1 = rows[0].member("B").unwrap();
        assert_eq!(b1.own, 12.0 * 3000.0);
        assert_eq!(b1.spousal, 0.0);
        assert_eq!(rows[0].household_total, 51_000.0);
    }

    #[test]
    fn test_extreme_claim_age_does_not_panic() {
        // Claim-age range is not enforced by Person::new; the projection must stay total
        let a = Person::new("A", d(1962, 3, 1), 95, 200_000_000, 0, 1000.0).unwrap();
        let rows = project(&[a.clone()], d(2028, 1, 1), 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members[0].own, 0.0);
        assert_eq!(rows[0].members[0].status, SupportStatus::PreClaim);

        // Same in a couple, where spousal and survivor terms also read the claim age
        let b = Person::new("B", d(1960, 7, 1), 72, u32::MAX, u32::MAX, 3000.0).unwrap();
        let rows = project(&[a, b], d(2028, 1, 1), 10);
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.household_total >= 0.0));
    }

    #[test]
    fn test_survivor_keeps_own_when_higher() {
        // Survivor's own benefit beats the decedent's
        let a = Person::new("A", d(1962, 3, 1), 95, 67, 0, 2500.0).unwrap();
        let b = Person::new("B", d(1960, 7, 1), 72, 67, 0, 1000.0).unwrap();
        let rows = project(&[a, b], d(2030, 1, 1), 5);
        assert_eq!(rows[3].member("A").unwrap().total, 12.0 * 2500.0);
        // Year 3: 6 own months, death month unpaid, 5 survivor months at own rate
        assert_eq!(rows[2].member("A").unwrap().total, 11.0 * 2500.0);
    }

    #[test]
    fn test_death_at_year_start_pays_full_year() {
        // B's death month is exactly the first month of year 2 (2032-01)
        let a = Person::new("A", d(1962, 3, 1), 95, 67, 0, 1000.0).unwrap();
        let b = Person::new("B", d(1960, 1, 10), 71, 67, 0, 3000.0).unwrap();
        let rows = project(&[a, b.clone()], d(2030, 1, 1), 2);
        assert_eq!(first_of_month(b.eol_date()), d(2032, 1, 1));
        assert_eq!(rows[1].member("A").unwrap().total, 12.0 * 3000.0);
        assert_eq!(rows[1].member("B").unwrap().total, 0.0);
    }

    #[test]
    fn test_young_survivor_falls_back_to_own() {
        // Survivor under 60 at the death date: survivor benefit is zero, own applies
        let a = Person::new("A", d(1975, 3, 1), 95, 62, 0, 800.0).unwrap();
        let b = Person::new("B", d(1960, 5, 1), 70, 67, 0, 3000.0).unwrap();
        assert_eq!(survivor_annual(&a, &b, first_of_month(b.eol_date())), 0.0);

        // A claims 2037-03, so the fallback own amount is already in payment
        let rows = project(&[a.clone(), b], d(2040, 1, 1), 2);
        let own_monthly = worker_monthly_at_claim(&a);
        assert_relative_eq!(rows[1].member("A").unwrap().total, round_cents(12.0 * own_monthly), epsilon = 1e-9);
    }

    #[test]
    fn test_deceased_survivor_is_not_paid() {
        // Both have died by year 8; neither is paid as a survivor
        let a = Person::new("A", d(1960, 5, 1), 72, 67, 0, 3000.0).unwrap();
        let b = Person::new("B", d(1962, 3, 1), 74, 67, 0, 1000.0).unwrap();
        let rows = project(&[a, b], d(2030, 1, 1), 10);
        // B's death month is 2037-03; window for year 8 is 2038-01..2039-01
        let last = &rows[7];
        assert_eq!(last.member("A").unwrap().total, 0.0);
        assert_eq!(last.member("B").unwrap().total, 0.0);
        assert_eq!(last.household_total, 0.0);
    }

    #[test]
    fn test_full_year_without_events_is_twelve_months() {
        let a = Person::new("A", d(1955, 8, 20), 99, 62, 3, 1777.77).unwrap();
        let rows = project(&[a.clone()], d(2030, 1, 1), 3);
        let monthly = worker_monthly_at_claim(&a);
        for row in &rows {
            assert_eq!(row.members[0].own, round_cents(monthly * 12.0));
        }
    }

    #[test]
    fn test_survivor_never_exceeds_decedent_at_death() {
        let (a, b) = couple();
        let death = first_of_month(b.eol_date());
        let annual = survivor_annual(&a, &b, death);
        assert!(annual >= 0.0);
        assert!(annual <= 12.0 * decedent_monthly_at_death(&b, death));
    }

    #[test]
    fn test_projection_is_deterministic() {
        let (a, b) = couple();
        let first = project(&[a.clone(), b.clone()], d(2030, 1, 1), 30);
        let second = project(&[a, b], d(2030, 1, 1), 30);
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_never_moves_backwards() {
        let (a, b) = couple();
        let rows = project(&[a, b], d(2020, 1, 1), 40);
        for i in 0..2 {
            let statuses: Vec<SupportStatus> = rows.iter().map(|r| r.members[i].status).collect();
            assert!(statuses.windows(2).all(|w| w[0] <= w[1]), "{:?}", statuses);
        }
    }

    #[test]
    fn test_horizon_from_life_expectancy() {
        let (a, b) = couple();
        // At 2030-01-01 A is 67 (life 95 -> 28 left), B is 69 (life 72 -> 3 left)
        assert_eq!(ProjectionConfig::horizon_from_life_expectancy(&[a, b], d(2030, 1, 1)), 28);
        assert_eq!(ProjectionConfig::horizon_from_life_expectancy(&[], d(2030, 1, 1)), 0);
    }
}
