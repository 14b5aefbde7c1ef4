//! Per-member attendance rollups: status counts, attendance rate, streaks.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{filter_by_period, ReportingPeriod};
use crate::types::{AttendanceRecord, AttendanceStatus};

/// Derived per-member rollup for one reporting period. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub member_name: String,
    pub present_count: u32,
    pub late_count: u32,
    pub early_leave_count: u32,
    pub absent_count: u32,
    pub total_count: u32,
    /// round(100 × (present + late + early_leave) / total); 0 when empty.
    /// Late and early-leave count toward the numerator but not as "present".
    pub attendance_rate: u32,
    /// Consecutive trailing `present` records, walking back from the member's
    /// latest date in the filtered set. Any other status breaks the run.
    pub current_streak: u32,
    /// Longest `present` run anywhere in the member's filtered records.
    pub longest_streak: u32,
}

/// Percentage rounded to the nearest integer, half away from zero.
/// Matches the UI layer's `Math.round` on the non-negative domain.
pub(crate) fn percentage(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (f64::from(numerator) * 100.0 / f64::from(denominator)).round() as u32
}

/// Compute one summary per member over the period's records.
///
/// Members are grouped by exact name. The result is ordered by
/// `attendance_rate` descending; the sort is stable, so ties keep the order
/// in which each member first appears in `records`.
pub fn member_summaries(
    records: &[AttendanceRecord],
    period: ReportingPeriod,
    today: NaiveDate,
) -> Vec<MemberSummary> {
    let filtered = filter_by_period(records, period, today);

    // Group by member, remembering first-encountered order for stable ties.
    let mut order: Vec<String> = Vec::new();
    let mut by_member: HashMap<String, Vec<&AttendanceRecord>> = HashMap::new();
    for record in &filtered {
        if !by_member.contains_key(&record.member_name) {
            order.push(record.member_name.clone());
        }
        by_member
            .entry(record.member_name.clone())
            .or_default()
            .push(record);
    }

    let mut summaries: Vec<MemberSummary> = order
        .into_iter()
        .map(|name| {
            let mut rows = by_member.remove(&name).unwrap_or_default();
            // Streaks walk record history in date order.
            rows.sort_by(|a, b| a.date.cmp(&b.date));
            summarize(name, &rows)
        })
        .collect();

    summaries.sort_by(|a, b| b.attendance_rate.cmp(&a.attendance_rate));
    summaries
}

fn summarize(member_name: String, rows: &[&AttendanceRecord]) -> MemberSummary {
    let mut present_count = 0;
    let mut late_count = 0;
    let mut early_leave_count = 0;
    let mut absent_count = 0;
    for row in rows {
        match row.status {
            AttendanceStatus::Present => present_count += 1,
            AttendanceStatus::Late => late_count += 1,
            AttendanceStatus::EarlyLeave => early_leave_count += 1,
            AttendanceStatus::Absent => absent_count += 1,
        }
    }

    let total_count = rows.len() as u32;
    let attended = present_count + late_count + early_leave_count;

    let current_streak = rows
        .iter()
        .rev()
        .take_while(|row| row.status == AttendanceStatus::Present)
        .count() as u32;

    let mut longest_streak = 0u32;
    let mut run = 0u32;
    for row in rows {
        if row.status == AttendanceStatus::Present {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
    }

    MemberSummary {
        member_name,
        present_count,
        late_count,
        early_leave_count,
        absent_count,
        total_count,
        attendance_rate: percentage(attended, total_count),
        current_streak,
        longest_streak,
    }
}
