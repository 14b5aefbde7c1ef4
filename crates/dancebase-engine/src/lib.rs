//! # dancebase-engine
//!
//! Pure scheduling and attendance-statistics logic for dance group
//! management.
//!
//! ## Modules
//!
//! - [`recurrence`] — date range + repeat pattern → concrete calendar dates
//! - [`conflict`] — candidate time slot vs. existing events → overlapping subset
//! - [`period`] — reporting-period window filtering over attendance records
//! - [`summary`] — per-member rollups (status counts, rate, streaks)
//! - [`stats`] — group-wide statistics (top attendee, perfect attendance, ...)
//! - [`trend`] — rolling monthly attendance rates
//! - [`types`] — record shapes and boundary parse helpers
//! - [`error`] — error types
//!
//! Everything is synchronous and side-effect-free: each call receives its
//! full input and returns a fresh result, so the engine is safe to call from
//! any concurrency model. Time-dependent queries take an explicit reference
//! date instead of reading the wall clock, keeping results reproducible.
//! Malformed input degrades to an empty or zero result; the query functions
//! never panic and never return an error.

pub mod conflict;
pub mod error;
pub mod period;
pub mod recurrence;
pub mod stats;
pub mod summary;
pub mod trend;
pub mod types;

pub use conflict::find_conflicts;
pub use error::EngineError;
pub use period::{filter_by_period, ReportingPeriod};
pub use recurrence::{generate_recurring_dates, RecurrencePattern};
pub use stats::{overall_stats, OverallStats};
pub use summary::{member_summaries, MemberSummary};
pub use trend::{monthly_trend, MonthlyTrendPoint};
pub use types::{AttendanceRecord, AttendanceStatus, ScheduleEvent};
