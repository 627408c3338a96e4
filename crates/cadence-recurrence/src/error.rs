//! Error types for schedule configuration.

use thiserror::Error;

use crate::IntervalUnit;

/// Errors reported while building a [`Schedule`](crate::Schedule).
///
/// These are configuration mistakes, caught synchronously at build time so
/// that an invalid schedule can never be constructed. The calculation itself
/// has no failure mode for a schedule that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Interval count below one.
    #[error("interval count must be at least 1, got {0}")]
    InvalidIntervalCount(u32),

    /// No interval unit was configured.
    #[error("no interval unit configured")]
    MissingIntervalUnit,

    /// Hour or minute out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Day of month outside 1 through 31.
    #[error("day of month must be between 1 and 31, got {0}")]
    InvalidDayOfMonth(u32),

    /// The configured day selection cannot be combined with the interval unit.
    #[error("day selection is not supported for {unit:?} schedules")]
    UnsupportedDaySelection { unit: IntervalUnit },

    /// A fixed time of day cannot be combined with the interval unit.
    #[error("time of day is not supported for {unit:?} schedules")]
    UnsupportedTimeOfDay { unit: IntervalUnit },
}
