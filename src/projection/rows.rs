//! Output structures for household projections

use super::state::SupportStatus;
use serde::{Deserialize, Serialize};

/// Round to cents for presentation
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// How zero amounts appear in the column view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroDisplay {
    /// Zero amounts are left blank (`None`)
    #[default]
    Blank,
    /// Zero amounts are shown as `0.0`
    Zero,
}

/// One cell of the column view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Year(u32),
    Amount(f64),
    Blank,
}

impl Cell {
    fn amount(value: f64, zeros: ZeroDisplay) -> Self {
        if value == 0.0 && zeros == ZeroDisplay::Blank {
            Cell::Blank
        } else {
            Cell::Amount(value)
        }
    }
}

/// Benefits for one person over one projection year (amounts in cents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberYear {
    pub name: String,
    pub own: f64,
    pub spousal: f64,
    pub total: f64,
    /// Status in the last month of the year window
    pub status: SupportStatus,
}

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Projection year (1-indexed)
    pub year: u32,
    pub members: Vec<MemberYear>,
    pub household_total: f64,
}

impl ProjectionRow {
    pub fn member(&self, name: &str) -> Option<&MemberYear> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Ordered column view: `Year`, then `<name> Own`, `<name> Spousal`,
    /// `<name> Total SS` per person, then `Household Total SS`.
    ///
    /// The household total is always a number; other zeros follow `zeros`.
    pub fn columns(&self, zeros: ZeroDisplay) -> Vec<(String, Cell)> {
        let mut cols = Vec::with_capacity(2 + self.members.len() * 3);
        cols.push(("Year".to_string(), Cell::Year(self.year)));
        for m in &self.members {
            cols.push((format!("{} Own", m.name), Cell::amount(m.own, zeros)));
            cols.push((format!("{} Spousal", m.name), Cell::amount(m.spousal, zeros)));
            cols.push((format!("{} Total SS", m.name), Cell::amount(m.total, zeros)));
        }
        cols.push(("Household Total SS".to_string(), Cell::Amount(self.household_total)));
        cols
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly rows in order
    pub rows: Vec<ProjectionRow>,

    /// Unrounded lifetime total per member, in household order
    lifetime_totals: Vec<(String, f64)>,
}

impl ProjectionResult {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            rows: Vec::new(),
            lifetime_totals: names.into_iter().map(|n| (n, 0.0)).collect(),
        }
    }

    /// Add a row along with the unrounded member totals it was built from
    pub fn add_row(&mut self, row: ProjectionRow, unrounded_totals: &[f64]) {
        for (acc, t) in self.lifetime_totals.iter_mut().zip(unrounded_totals) {
            acc.1 += t;
        }
        self.rows.push(row);
    }

    pub fn summary(&self) -> ProjectionSummary {
        let household: f64 = self.lifetime_totals.iter().map(|(_, t)| t).sum();
        ProjectionSummary {
            total_years: self.rows.len() as u32,
            member_totals: self
                .lifetime_totals
                .iter()
                .map(|(n, t)| (n.clone(), round_cents(*t)))
                .collect(),
            household_total: round_cents(household),
        }
    }

    /// Unrounded household total across all years
    pub fn lifetime_household_total(&self) -> f64 {
        self.lifetime_totals.iter().map(|(_, t)| t).sum()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub member_totals: Vec<(String, f64)>,
    pub household_total: f64,
}
