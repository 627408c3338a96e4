//! Fluent construction of [`Schedule`] values.

use chrono::Weekday;

use crate::{DaySelection, IntervalUnit, Schedule, ScheduleError, TimeOfDay, WeekOfMonth};

impl Schedule {
    /// Start building a schedule that fires every `count` interval units.
    ///
    /// ```
    /// use cadence_recurrence::{Schedule, WeekOfMonth, Weekday};
    ///
    /// let schedule = Schedule::every(2)
    ///     .months()
    ///     .on_the(WeekOfMonth::First, Weekday::Mon)
    ///     .at(3, 15)
    ///     .build()?;
    /// # Ok::<(), cadence_recurrence::ScheduleError>(())
    /// ```
    pub fn every(count: u32) -> ScheduleBuilder {
        ScheduleBuilder {
            count,
            unit: None,
            day_selection: None,
            time_of_day: None,
        }
    }
}

/// Builder for [`Schedule`].
///
/// Setters record the configuration; [`ScheduleBuilder::build`] validates the
/// combination and is the only way to obtain a [`Schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    count: u32,
    unit: Option<IntervalUnit>,
    day_selection: Option<DaySelection>,
    time_of_day: Option<TimeOfDay>,
}

impl ScheduleBuilder {
    /// Fire every `count` minutes.
    pub fn minutes(mut self) -> Self {
        self.unit = Some(IntervalUnit::Minutes);
        self
    }

    /// Fire every `count` hours.
    pub fn hours(mut self) -> Self {
        self.unit = Some(IntervalUnit::Hours);
        self
    }

    /// Fire every `count` days.
    pub fn days(mut self) -> Self {
        self.unit = Some(IntervalUnit::Days);
        self
    }

    /// Fire every `count` weeks.
    pub fn weeks(mut self) -> Self {
        self.unit = Some(IntervalUnit::Weeks);
        self
    }

    /// Fire every `count` months.
    pub fn months(mut self) -> Self {
        self.unit = Some(IntervalUnit::Months);
        self
    }

    /// Fire every `count` years.
    pub fn years(mut self) -> Self {
        self.unit = Some(IntervalUnit::Years);
        self
    }

    /// Fire on the nth (or last) occurrence of `weekday` in the month.
    ///
    /// Monthly and yearly schedules only.
    pub fn on_the(mut self, week: WeekOfMonth, weekday: Weekday) -> Self {
        self.day_selection = Some(DaySelection::WeekdayOccurrence { week, weekday });
        self
    }

    /// Fire on day `day` of the month, clamped to the month's final day.
    ///
    /// Monthly and yearly schedules only.
    pub fn on_day(mut self, day: u32) -> Self {
        self.day_selection = Some(DaySelection::DayOfMonth { day });
        self
    }

    /// Fire on the final day of the month.
    ///
    /// Monthly and yearly schedules only.
    pub fn on_last_day(mut self) -> Self {
        self.day_selection = Some(DaySelection::LastDayOfMonth);
        self
    }

    /// Fire on `weekday`. Weekly schedules only.
    pub fn on_weekday(mut self, weekday: Weekday) -> Self {
        self.day_selection = Some(DaySelection::DayOfWeek { weekday });
        self
    }

    /// Fire at `hour:minute:00` instead of midnight.
    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.time_of_day = Some(TimeOfDay { hour, minute });
        self
    }

    /// Validate the configuration and produce the immutable [`Schedule`].
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        if self.count == 0 {
            return Err(ScheduleError::InvalidIntervalCount(self.count));
        }
        let unit = self.unit.ok_or(ScheduleError::MissingIntervalUnit)?;

        if let Some(selection) = self.day_selection {
            if !selection.supports_unit(unit) {
                return Err(ScheduleError::UnsupportedDaySelection { unit });
            }
            if let DaySelection::DayOfMonth { day } = selection {
                if !(1..=31).contains(&day) {
                    return Err(ScheduleError::InvalidDayOfMonth(day));
                }
            }
        }

        if let Some(TimeOfDay { hour, minute }) = self.time_of_day {
            if !unit.is_date_grain() {
                return Err(ScheduleError::UnsupportedTimeOfDay { unit });
            }
            if hour > 23 || minute > 59 {
                return Err(ScheduleError::InvalidTimeOfDay { hour, minute });
            }
        }

        Ok(Schedule {
            unit,
            count: self.count,
            day_selection: self.day_selection,
            time_of_day: self.time_of_day,
        })
    }
}
