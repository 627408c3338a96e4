//! Recurrence rule types.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar unit an interval count multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl IntervalUnit {
    /// Whether candidates for this unit are whole calendar dates rather than
    /// clock-aligned instants.
    pub(crate) fn is_date_grain(self) -> bool {
        matches!(self, Self::Days | Self::Weeks | Self::Months | Self::Years)
    }

    /// Whether periods of this unit are calendar months.
    pub(crate) fn is_month_period(self) -> bool {
        matches!(self, Self::Months | Self::Years)
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekOfMonth {
    /// Whole weeks past the first occurrence, or `None` for [`Self::Last`].
    pub(crate) fn weeks_from_first(self) -> Option<i64> {
        match self {
            Self::First => Some(0),
            Self::Second => Some(1),
            Self::Third => Some(2),
            Self::Fourth => Some(3),
            Self::Last => None,
        }
    }
}

/// Rule narrowing a period to a single date.
///
/// Selections are pure and never produce a date outside the period they are
/// applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DaySelection {
    /// The nth (or last) occurrence of a weekday within the month.
    WeekdayOccurrence { week: WeekOfMonth, weekday: Weekday },
    /// A fixed day of the month. Days past a short month's end clamp to the
    /// month's final day.
    DayOfMonth { day: u32 },
    /// The final day of the month.
    LastDayOfMonth,
    /// A weekday within the week, for weekly schedules.
    DayOfWeek { weekday: Weekday },
}

impl DaySelection {
    /// Whether this selection can be combined with `unit`.
    pub(crate) fn supports_unit(self, unit: IntervalUnit) -> bool {
        match self {
            Self::WeekdayOccurrence { .. } | Self::DayOfMonth { .. } | Self::LastDayOfMonth => {
                unit.is_month_period()
            }
            Self::DayOfWeek { .. } => unit == IntervalUnit::Weeks,
        }
    }
}

/// Wall-clock firing time. Seconds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub(crate) fn as_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).expect("time of day validated at build")
    }
}

/// An immutable recurrence rule: how often to fire, which day within each
/// period, and at what time of day.
///
/// Schedules are constructed through the fluent builder starting at
/// [`Schedule::every`] and cannot be mutated afterwards. A schedule holds no
/// state about past runs; callers re-ask for the next run whenever they need
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub(crate) unit: IntervalUnit,
    pub(crate) count: u32,
    pub(crate) day_selection: Option<DaySelection>,
    pub(crate) time_of_day: Option<TimeOfDay>,
}

impl Schedule {
    /// Unit the interval count multiplies.
    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Number of units per period.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Rule narrowing each period to a single date, if any.
    pub fn day_selection(&self) -> Option<DaySelection> {
        self.day_selection
    }

    /// Fixed firing time, if any.
    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        self.time_of_day
    }
}
