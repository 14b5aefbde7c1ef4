//! Tests for recurring-date expansion.

use dancebase_engine::{generate_recurring_dates, RecurrencePattern};

// ---------------------------------------------------------------------------
// Weekly / biweekly stepping
// ---------------------------------------------------------------------------

#[test]
fn weekly_steps_by_seven_days() {
    let dates = generate_recurring_dates("2025-01-01", "2025-01-20", RecurrencePattern::Weekly);
    assert_eq!(dates, vec!["2025-01-01", "2025-01-08", "2025-01-15"]);
}

#[test]
fn weekly_single_day_range_yields_start_only() {
    let dates = generate_recurring_dates("2025-01-01", "2025-01-01", RecurrencePattern::Weekly);
    assert_eq!(dates, vec!["2025-01-01"]);
}

#[test]
fn weekly_end_on_exact_step_is_included() {
    let dates = generate_recurring_dates("2025-01-01", "2025-01-15", RecurrencePattern::Weekly);
    assert_eq!(
        dates,
        vec!["2025-01-01", "2025-01-08", "2025-01-15"],
        "end date falling exactly on a step must be included"
    );
}

#[test]
fn biweekly_steps_by_fourteen_days() {
    let dates = generate_recurring_dates("2025-01-01", "2025-02-15", RecurrencePattern::Biweekly);
    assert_eq!(
        dates,
        vec!["2025-01-01", "2025-01-15", "2025-01-29", "2025-02-12"]
    );
}

#[test]
fn weekly_crosses_month_boundary() {
    let dates = generate_recurring_dates("2025-01-28", "2025-02-11", RecurrencePattern::Weekly);
    assert_eq!(dates, vec!["2025-01-28", "2025-02-04", "2025-02-11"]);
}

// ---------------------------------------------------------------------------
// Monthly stepping and day-of-month clamping
// ---------------------------------------------------------------------------

#[test]
fn monthly_same_day_of_month() {
    let dates = generate_recurring_dates("2025-01-15", "2025-04-15", RecurrencePattern::Monthly);
    assert_eq!(
        dates,
        vec!["2025-01-15", "2025-02-15", "2025-03-15", "2025-04-15"]
    );
}

#[test]
fn monthly_clamps_to_short_month_and_drifts() {
    // Jan 31 clamps to Feb 28, and stepping continues from the clamped date:
    // the rest of the series lands on the 28th, not back on the 31st.
    let dates = generate_recurring_dates("2025-01-31", "2025-04-30", RecurrencePattern::Monthly);
    assert_eq!(
        dates,
        vec!["2025-01-31", "2025-02-28", "2025-03-28", "2025-04-28"]
    );
}

#[test]
fn monthly_clamps_to_leap_day() {
    let dates = generate_recurring_dates("2024-01-31", "2024-04-30", RecurrencePattern::Monthly);
    assert_eq!(
        dates,
        vec!["2024-01-31", "2024-02-29", "2024-03-29", "2024-04-29"]
    );
}

#[test]
fn monthly_thirtieth_skips_february_day() {
    let dates = generate_recurring_dates("2025-01-30", "2025-03-31", RecurrencePattern::Monthly);
    assert_eq!(dates, vec!["2025-01-30", "2025-02-28", "2025-03-28"]);
}

// ---------------------------------------------------------------------------
// Degenerate inputs — empty result, never an error
// ---------------------------------------------------------------------------

#[test]
fn end_before_start_is_empty() {
    let dates = generate_recurring_dates("2025-02-01", "2025-01-01", RecurrencePattern::Weekly);
    assert!(dates.is_empty(), "inverted range should produce no dates");
}

#[test]
fn malformed_start_is_empty() {
    let dates = generate_recurring_dates("not-a-date", "2025-01-20", RecurrencePattern::Weekly);
    assert!(dates.is_empty());
}

#[test]
fn malformed_end_is_empty() {
    let dates = generate_recurring_dates("2025-01-01", "2025-13-99", RecurrencePattern::Monthly);
    assert!(dates.is_empty());
}

#[test]
fn empty_strings_are_empty() {
    let dates = generate_recurring_dates("", "", RecurrencePattern::Biweekly);
    assert!(dates.is_empty());
}

// ---------------------------------------------------------------------------
// Long range — no cap inside the expander
// ---------------------------------------------------------------------------

#[test]
fn multi_year_weekly_range_is_uncapped() {
    let dates = generate_recurring_dates("2024-01-01", "2026-01-01", RecurrencePattern::Weekly);
    // 2024 is a leap year: 731 days in the range, 105 weekly steps fit.
    assert_eq!(dates.len(), 105);
    assert_eq!(dates.first().map(String::as_str), Some("2024-01-01"));
    assert_eq!(dates.last().map(String::as_str), Some("2025-12-29"));
}
