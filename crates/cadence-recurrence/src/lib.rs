//! Recurrence rules and next-run calculation for Cadence.
//!
//! This crate is the calendar-arithmetic core of a job scheduler:
//! - Fluent, validating construction of recurrence rules
//!   (`Schedule::every(2).months().on_the(WeekOfMonth::First, Weekday::Mon).at(3, 15)`)
//! - A pure, deterministic next-run calculation that always lands strictly
//!   after the reference instant
//! - Day-selection rules narrowing a period to a single date: nth or last
//!   weekday, fixed or last day of the month, weekday within a week
//!
//! Task execution, polling, and persistence of schedules belong to the
//! caller; the whole contract is [`Schedule::next_run_after`].

mod builder;
mod error;
mod next_run;
mod types;

pub use builder::ScheduleBuilder;
pub use error::ScheduleError;
pub use types::{DaySelection, IntervalUnit, Schedule, TimeOfDay, WeekOfMonth};

// Weekdays in rule definitions are chrono's.
pub use chrono::Weekday;
