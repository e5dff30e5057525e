//! Benefit resolution and the yearly household projection engine

mod engine;
pub mod resolver;
mod rows;
mod state;

pub use engine::{project, ProjectionConfig, ProjectionEngine};
pub use resolver::{survivor_annual, worker_monthly_at_claim};
pub use rows::{round_cents, Cell, MemberYear, ProjectionResult, ProjectionRow, ProjectionSummary, ZeroDisplay};
pub use state::SupportStatus;
