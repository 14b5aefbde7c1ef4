//! Recurring-date expansion — converts a date range plus repeat pattern into
//! the concrete calendar dates a schedule series occupies.
//!
//! The schedule form feeds the result straight into batch row creation: one
//! occurrence row per returned date.

use chrono::{Days, Months};
use serde::{Deserialize, Serialize};

use crate::types::parse_date;

/// Repeat pattern for a recurring schedule series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// Same day of month, clamped to the last day of shorter months.
    Monthly,
}

/// Expand a recurring series into its concrete calendar dates.
///
/// Starts at `start_date` and steps by the pattern's interval, keeping every
/// stepped date that is <= `end_date`. Both bounds are `YYYY-MM-DD` strings.
/// The result is strictly increasing and duplicate-free; `end_date` itself
/// appears only when it falls exactly on a step.
///
/// Monthly stepping preserves the day of month, clamping to the last valid
/// day of shorter months. Stepping continues from the clamped date, so
/// Jan 31 → Feb 28 → Mar 28: the drift is intentional and matches what the
/// production schedule data already contains.
///
/// An inverted range or a malformed/empty bound produces an empty vec — the
/// caller surfaces its own validation message and treats empty as "nothing
/// to generate".
pub fn generate_recurring_dates(
    start_date: &str,
    end_date: &str,
    pattern: RecurrencePattern,
) -> Vec<String> {
    let (Ok(start), Ok(end)) = (parse_date(start_date), parse_date(end_date)) else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current.format("%Y-%m-%d").to_string());
        let next = match pattern {
            RecurrencePattern::Weekly => current.checked_add_days(Days::new(7)),
            RecurrencePattern::Biweekly => current.checked_add_days(Days::new(14)),
            // checked_add_months clamps to the last day of the target month.
            RecurrencePattern::Monthly => current.checked_add_months(Months::new(1)),
        };
        match next {
            Some(date) => current = date,
            None => break,
        }
    }
    dates
}
