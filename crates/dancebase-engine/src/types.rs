//! Record shapes consumed by the engine, plus boundary parse helpers.
//!
//! Calendar days are carried as `YYYY-MM-DD` strings at the API edge —
//! lexicographic comparison on that form is date-order-correct, and it is the
//! shape the surrounding data layer stores. Instants are `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Attendance status for one member on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Late,
    EarlyLeave,
    Absent,
}

impl AttendanceStatus {
    /// Whether this status counts toward the attendance-rate numerator.
    /// Late and early-leave members still showed up, so everything but
    /// `Absent` counts.
    pub fn attended(self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// One member's attendance on one date.
///
/// `member_name` is free text, not a foreign key — the statistics dashboard
/// groups purely by name. The engine does not deduplicate `(member, date)`
/// pairs; callers must ensure uniqueness or duplicates will double-count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub member_name: String,
    /// Calendar day in `YYYY-MM-DD` form, no time component.
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One concrete calendar instance of a schedule, as seen by the conflict
/// detector. Occurrences generated from the same recurring series share a
/// non-null `recurrence_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_id: Option<String>,
}

/// Parse a `YYYY-MM-DD` calendar date string.
///
/// # Errors
/// Returns `EngineError::InvalidDate` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Parse an ISO 8601 instant string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g. "2026-02-17T14:00:00+09:00")
/// and naive local time (e.g. "2026-02-17T14:00:00"), which is interpreted as UTC.
///
/// # Errors
/// Returns `EngineError::InvalidInstant` if neither form parses.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|_| EngineError::InvalidInstant(s.to_string()))
}
