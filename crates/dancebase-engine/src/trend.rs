//! Rolling monthly attendance trend for the dashboard bar chart.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::summary::percentage;
use crate::types::AttendanceRecord;

/// One month's pooled attendance rate.
///
/// `record_count` is forwarded so a renderer can tell a month with no data
/// (drawn as an empty bar) from a month with records and a 0% rate — the
/// numeric rate is 0 in both cases but the meaning differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// Abbreviated month name, e.g. "Mar".
    pub label: String,
    pub rate: u32,
    pub record_count: u32,
}

/// Pooled attendance rate for each of the most recent `months_back` calendar
/// months, oldest first, ending with the month containing `today`.
///
/// Always returns exactly `months_back` points; months with no records
/// report rate 0 rather than being omitted.
pub fn monthly_trend(
    records: &[AttendanceRecord],
    months_back: u32,
    today: NaiveDate,
) -> Vec<MonthlyTrendPoint> {
    (0..months_back)
        .rev()
        .map(|back| {
            let month = today
                .checked_sub_months(Months::new(back))
                .unwrap_or(today);
            // Month membership by date-string prefix; malformed dates match
            // no month.
            let prefix = month.format("%Y-%m-").to_string();
            let in_month: Vec<&AttendanceRecord> = records
                .iter()
                .filter(|r| r.date.starts_with(&prefix))
                .collect();
            let attended = in_month.iter().filter(|r| r.status.attended()).count() as u32;
            let record_count = in_month.len() as u32;
            MonthlyTrendPoint {
                label: month.format("%b").to_string(),
                rate: percentage(attended, record_count),
                record_count,
            }
        })
        .collect()
}
