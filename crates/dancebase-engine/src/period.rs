//! Reporting-period filtering over attendance records.
//!
//! Comparison is lexicographic on `YYYY-MM-DD` strings, which is
//! date-order-correct. A record whose date is malformed simply falls outside
//! every bounded window; nothing panics.
//!
//! The reference date is an explicit parameter rather than ambient wall-clock
//! time, so the same inputs always produce the same window.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::AttendanceRecord;

/// Window selector for the statistics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    /// Current Monday through the reference date, inclusive.
    Weekly,
    /// First day of the reference date's month through the reference date.
    Monthly,
    /// No filtering.
    #[default]
    All,
}

/// Keep the records whose date falls inside the period's window, preserving
/// input order. `today` anchors the window.
pub fn filter_by_period(
    records: &[AttendanceRecord],
    period: ReportingPeriod,
    today: NaiveDate,
) -> Vec<AttendanceRecord> {
    let window_start = match period {
        ReportingPeriod::All => return records.to_vec(),
        ReportingPeriod::Weekly => {
            let back = u64::from(today.weekday().num_days_from_monday());
            today.checked_sub_days(Days::new(back)).unwrap_or(today)
        }
        ReportingPeriod::Monthly => today.with_day(1).unwrap_or(today),
    };

    let start = window_start.format("%Y-%m-%d").to_string();
    let end = today.format("%Y-%m-%d").to_string();
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect()
}
