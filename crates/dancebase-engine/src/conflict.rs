//! Time-conflict detection for candidate schedule slots.
//!
//! Advisory only — the form warns before submission, it never blocks it.
//! Adjacent events (one ending exactly when another starts) are NOT conflicts.

use chrono::{DateTime, Utc};

use crate::types::ScheduleEvent;

/// Return the existing events whose time ranges overlap the candidate slot.
///
/// Two intervals overlap when `candidate_start < e.ends_at && e.starts_at <
/// candidate_end` — half-open comparison, so touching endpoints do not count.
/// The result keeps the relative order of `existing`. `exclude_id` removes
/// one event from consideration (used when editing an event against itself);
/// an id that matches nothing is a no-op.
///
/// The candidate interval is not validated here: an inverted candidate simply
/// overlaps nothing. Pre-validation is the caller's job.
pub fn find_conflicts(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    existing: &[ScheduleEvent],
    exclude_id: Option<&str>,
) -> Vec<ScheduleEvent> {
    existing
        .iter()
        .filter(|e| exclude_id != Some(e.id.as_str()))
        .filter(|e| candidate_start < e.ends_at && e.starts_at < candidate_end)
        .cloned()
        .collect()
}
