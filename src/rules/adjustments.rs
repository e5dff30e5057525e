//! Early-claim reductions, delayed retirement credits, spousal and survivor factors
//!
//! Rates are kept as exact fractions (5/9 of 1% is `5.0 / 900.0`, not 0.00556)
//! so that multi-year projections do not drift.

/// Months of reduction charged at the first-tier rate
const FIRST_TIER_MONTHS: u32 = 36;

/// Worker reduction per early month, first 36 months: 5/9 of 1%
const WORKER_FIRST_TIER_RATE: f64 = 5.0 / 900.0;

/// Reduction per early month beyond 36 (worker and spousal): 5/12 of 1%
const SECOND_TIER_RATE: f64 = 5.0 / 1200.0;

/// Spousal reduction per early month, first 36 months: 25/36 of 1%
const SPOUSAL_FIRST_TIER_RATE: f64 = 25.0 / 3600.0;

/// Delayed retirement credit per month after FRA: 2/3 of 1%
const DELAYED_CREDIT_RATE: f64 = 2.0 / 300.0;

/// Fixed ceiling on delayed-credit months inside [`retirement_adjustment`]
pub const MAX_DELAYED_CREDIT_MONTHS: u32 = 48;

/// Survivor reduction per month claimed before the survivor's FRA
const SURVIVOR_MONTHLY_REDUCTION: f64 = 0.00396;

/// Survivor benefit never falls below 71.5% of the decedent's amount
pub const SURVIVOR_REDUCTION_FLOOR: f64 = 0.715;

/// Two-tier early reduction shared by the worker and spousal schedules
fn tiered_reduction(months_early: u32, first_tier_rate: f64) -> f64 {
    let first = months_early.min(FIRST_TIER_MONTHS) as f64;
    let extra = months_early.saturating_sub(FIRST_TIER_MONTHS) as f64;
    first * first_tier_rate + extra * SECOND_TIER_RATE
}

/// Worker monthly benefit given PIA and signed months from FRA.
///
/// Negative months (early claim) reduce by 5/9% per month for the first 36
/// months and 5/12% per month beyond, floored at zero. Positive months
/// (delayed claim) add 2/3% per month up to [`MAX_DELAYED_CREDIT_MONTHS`].
pub fn retirement_adjustment(pia: f64, months_from_fra: i32) -> f64 {
    if months_from_fra == 0 {
        return pia;
    }
    if months_from_fra < 0 {
        let reduction = tiered_reduction(months_from_fra.unsigned_abs(), WORKER_FIRST_TIER_RATE);
        return pia * (1.0 - reduction).max(0.0);
    }
    let delayed = (months_from_fra as u32).min(MAX_DELAYED_CREDIT_MONTHS) as f64;
    pia * (1.0 + delayed * DELAYED_CREDIT_RATE)
}

/// Maximum spousal benefit: half of the worker's PIA
pub fn spousal_base(worker_pia: f64) -> f64 {
    0.5 * worker_pia
}

/// Spousal reduction factor in [0, 1] for a spouse filing before their own FRA.
/// 25/36% per month for the first 36 months, 5/12% per month beyond.
pub fn spousal_reduction(months_early: u32) -> f64 {
    if months_early == 0 {
        return 1.0;
    }
    (1.0 - tiered_reduction(months_early, SPOUSAL_FIRST_TIER_RATE)).max(0.0)
}

/// Survivor reduction factor: linear 0.396% per early month, floored at 71.5%
pub fn survivor_reduction(months_early: u32) -> f64 {
    if months_early == 0 {
        return 1.0;
    }
    (1.0 - months_early as f64 * SURVIVOR_MONTHLY_REDUCTION).max(SURVIVOR_REDUCTION_FLOOR)
}
