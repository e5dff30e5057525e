//! Month-granularity calendar arithmetic
//!
//! Every function here is total: day-of-month is clamped to the last valid
//! day of the target month and month counts saturate at zero instead of
//! going negative.

use chrono::{Datelike, Months, NaiveDate};

/// Advance `date` by `n` whole months (negative moves backwards).
/// Day-of-month is clamped, so Jan 31 + 1 month lands on Feb 28/29.
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_months(Months::new(n.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(n.unsigned_abs()))
    };
    // Only fails at the edge of chrono's representable range
    shifted.unwrap_or(if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Advance `date` by whole years and months with the same clamping as [`add_months`]
pub fn add_years_months(date: NaiveDate, years: u32, months: u32) -> NaiveDate {
    let total = years.saturating_mul(12).saturating_add(months);
    add_months(date, i32::try_from(total).unwrap_or(i32::MAX))
}

/// Truncate to day 1 of the same month
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whole elapsed (years, months) from `dob` to `asof`, months in 0..=11.
///
/// A month only counts once the day-of-month has been reached. If `asof`
/// precedes `dob` the age is (0, 0).
pub fn age_in_years_months(dob: NaiveDate, asof: NaiveDate) -> (u32, u32) {
    let mut months = (asof.year() - dob.year()) * 12 + asof.month() as i32 - dob.month() as i32;
    if asof.day() < dob.day() {
        months -= 1;
    }
    if months <= 0 {
        return (0, 0);
    }
    let months = months as u32;
    (months / 12, months % 12)
}

/// Total age in whole months at `asof`
pub fn age_in_months(dob: NaiveDate, asof: NaiveDate) -> u32 {
    let (years, months) = age_in_years_months(dob, asof);
    years * 12 + months
}

/// Signed month distance `(y1*12 + m1) - (y2*12 + m2)`, saturating at the `i32` bounds
pub fn months_between(y1: u32, m1: u32, y2: u32, m2: u32) -> i32 {
    let diff = (y1 as i64 * 12 + m1 as i64) - (y2 as i64 * 12 + m2 as i64);
    diff.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Signed month distance between the calendar months of two dates (a - b); days are ignored
pub fn months_between_dates(a: NaiveDate, b: NaiveDate) -> i32 {
    (a.year() - b.year()) * 12 + a.month() as i32 - b.month() as i32
}

/// Count whole calendar months in the intersection of the half-open month
/// ranges `[win_start, win_end)` and `[range_start, range_end)`.
/// Empty or inverted intersections count as zero.
pub fn whole_months_in_overlap(
    win_start: NaiveDate,
    win_end: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> u32 {
    let start = first_of_month(win_start.max(range_start));
    let end = first_of_month(win_end.min(range_end));
    months_between_dates(end, start).max(0) as u32
}
