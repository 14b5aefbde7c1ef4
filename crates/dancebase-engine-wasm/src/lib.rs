//! WASM bindings for dancebase-engine.
//!
//! Exposes recurring-date expansion, conflict detection, and attendance
//! statistics to the JavaScript UI layer via `wasm-bindgen`. All complex
//! values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dancebase-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/dancebase_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use dancebase_engine::types::{parse_date, parse_instant};
use dancebase_engine::{AttendanceRecord, RecurrencePattern, ReportingPeriod, ScheduleEvent};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Boundary parsing helpers
// ---------------------------------------------------------------------------

fn parse_pattern(s: &str) -> Result<RecurrencePattern, JsValue> {
    match s {
        "weekly" => Ok(RecurrencePattern::Weekly),
        "biweekly" => Ok(RecurrencePattern::Biweekly),
        "monthly" => Ok(RecurrencePattern::Monthly),
        _ => Err(JsValue::from_str(&format!(
            "Invalid recurrence pattern '{}'",
            s
        ))),
    }
}

fn parse_period(s: &str) -> Result<ReportingPeriod, JsValue> {
    match s {
        "weekly" => Ok(ReportingPeriod::Weekly),
        "monthly" => Ok(ReportingPeriod::Monthly),
        "all" => Ok(ReportingPeriod::All),
        _ => Err(JsValue::from_str(&format!(
            "Invalid reporting period '{}'",
            s
        ))),
    }
}

/// Parse the caller-supplied reference date (`YYYY-MM-DD`). The UI passes its
/// local "today" explicitly so results never depend on the WASM host clock.
fn parse_reference_date(s: &str) -> Result<NaiveDate, JsValue> {
    parse_date(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_records_json(json: &str) -> Result<Vec<AttendanceRecord>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid attendance records JSON: {}", e)))
}

fn parse_events_json(json: &str) -> Result<Vec<ScheduleEvent>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Expand a recurring series into its concrete calendar dates.
///
/// Returns a JSON array of `YYYY-MM-DD` strings. `pattern` is one of
/// `"weekly"`, `"biweekly"`, `"monthly"`. An inverted or malformed date range
/// yields `[]`, matching the engine's degrade-to-empty contract.
#[wasm_bindgen(js_name = "generateRecurringDates")]
pub fn generate_recurring_dates(
    start_date: &str,
    end_date: &str,
    pattern: &str,
) -> Result<String, JsValue> {
    let pattern = parse_pattern(pattern)?;
    let dates = dancebase_engine::generate_recurring_dates(start_date, end_date, pattern);
    to_json(&dates)
}

/// Return the existing events whose time ranges overlap the candidate slot.
///
/// `events_json` is a JSON array of `{id, title, startsAt, endsAt,
/// recurrenceId?}` objects with ISO 8601 instants. `exclude_id` removes one
/// event from consideration (editing an event against itself). The result is
/// the conflicting subset, same shape, input order preserved.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(
    candidate_start: &str,
    candidate_end: &str,
    events_json: &str,
    exclude_id: Option<String>,
) -> Result<String, JsValue> {
    let start = parse_instant(candidate_start).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let end = parse_instant(candidate_end).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let events = parse_events_json(events_json)?;

    let conflicts = dancebase_engine::find_conflicts(start, end, &events, exclude_id.as_deref());
    to_json(&conflicts)
}

/// Keep the attendance records whose date falls inside the period's window.
///
/// `period` is one of `"weekly"`, `"monthly"`, `"all"`; `today` is the
/// caller's reference date as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "filterByPeriod")]
pub fn filter_by_period(
    records_json: &str,
    period: &str,
    today: &str,
) -> Result<String, JsValue> {
    let records = parse_records_json(records_json)?;
    let period = parse_period(period)?;
    let today = parse_reference_date(today)?;

    let filtered = dancebase_engine::filter_by_period(&records, period, today);
    to_json(&filtered)
}

/// Compute per-member attendance summaries, ordered by rate descending.
///
/// Returns a JSON array of summary objects with camelCase keys
/// (`memberName`, `presentCount`, ..., `attendanceRate`, `currentStreak`,
/// `longestStreak`).
#[wasm_bindgen(js_name = "getMemberSummaries")]
pub fn get_member_summaries(
    records_json: &str,
    period: &str,
    today: &str,
) -> Result<String, JsValue> {
    let records = parse_records_json(records_json)?;
    let period = parse_period(period)?;
    let today = parse_reference_date(today)?;

    let summaries = dancebase_engine::member_summaries(&records, period, today);
    to_json(&summaries)
}

/// Compute group-wide statistics: pooled rate, top attendee, most-absent
/// member, and perfect-attendance members.
#[wasm_bindgen(js_name = "getOverallStats")]
pub fn get_overall_stats(
    records_json: &str,
    period: &str,
    today: &str,
) -> Result<String, JsValue> {
    let records = parse_records_json(records_json)?;
    let period = parse_period(period)?;
    let today = parse_reference_date(today)?;

    let stats = dancebase_engine::overall_stats(&records, period, today);
    to_json(&stats)
}

/// Compute the rolling monthly attendance trend, oldest month first.
///
/// Returns exactly `months_back` points of `{label, rate, recordCount}`;
/// months with no records report rate 0 with a zero `recordCount` so the
/// chart can draw them as empty bars.
#[wasm_bindgen(js_name = "getMonthlyTrend")]
pub fn get_monthly_trend(
    records_json: &str,
    months_back: u32,
    today: &str,
) -> Result<String, JsValue> {
    let records = parse_records_json(records_json)?;
    let today = parse_reference_date(today)?;

    let trend = dancebase_engine::monthly_trend(&records, months_back, today);
    to_json(&trend)
}
