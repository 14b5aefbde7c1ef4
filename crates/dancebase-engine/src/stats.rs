//! Group-wide attendance statistics for one reporting period.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{filter_by_period, ReportingPeriod};
use crate::summary::{member_summaries, percentage};
use crate::types::{AttendanceRecord, AttendanceStatus};

/// Rollup across all members in the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_records: u32,
    /// Pooled over all records, not averaged per member.
    pub overall_attendance_rate: u32,
    /// Member with the highest `attendance_rate`; ties go to whoever appears
    /// first in the record set. `None` when there are no records.
    pub top_attendee: Option<String>,
    /// Member with the highest raw absence count; ties go to whoever appears
    /// first in the record set. `None` when there are no records, and also
    /// `None` when nobody has an absence — "most absent" with zero absences
    /// is not meaningful and is suppressed here rather than by every caller.
    pub most_absentee: Option<String>,
    /// Members with at least one record and every record `present`.
    pub perfect_attendance_members: Vec<String>,
}

/// Compute the group-wide statistics over the period's records.
pub fn overall_stats(
    records: &[AttendanceRecord],
    period: ReportingPeriod,
    today: NaiveDate,
) -> OverallStats {
    let filtered = filter_by_period(records, period, today);

    let total_records = filtered.len() as u32;
    let attended = filtered.iter().filter(|r| r.status.attended()).count() as u32;

    let summaries = member_summaries(&filtered, ReportingPeriod::All, today);
    let top_attendee = summaries.first().map(|s| s.member_name.clone());

    let perfect_attendance_members: Vec<String> = summaries
        .iter()
        .filter(|s| {
            s.total_count > 0
                && s.absent_count == 0
                && s.late_count == 0
                && s.early_leave_count == 0
        })
        .map(|s| s.member_name.clone())
        .collect();

    OverallStats {
        total_records,
        overall_attendance_rate: percentage(attended, total_records),
        top_attendee,
        most_absentee: most_absentee(&filtered),
        perfect_attendance_members,
    }
}

/// First-encountered member with the highest absence count, or `None` when
/// no member has any absence. Works over raw record order, not the
/// rate-sorted summary order, so ties resolve to first appearance.
fn most_absentee(records: &[AttendanceRecord]) -> Option<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut absences: HashMap<&str, u32> = HashMap::new();
    for record in records {
        let entry = absences.entry(record.member_name.as_str()).or_insert_with(|| {
            order.push(record.member_name.as_str());
            0
        });
        if record.status == AttendanceStatus::Absent {
            *entry += 1;
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for name in order {
        let count = absences.get(name).copied().unwrap_or(0);
        if count > 0 && best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}
