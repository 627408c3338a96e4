//! Next-run calculation: the forward-stepping search over candidate periods.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use tracing::trace;

use crate::{DaySelection, IntervalUnit, Schedule};

/// Upper bound on period advances before the search is declared broken.
///
/// A well-formed schedule converges within one advance past the reference's
/// period; the cap turns a latent period-arithmetic bug into a loud failure
/// instead of an infinite loop or a wrong answer.
const ITERATION_CAP: u32 = 10_000;

impl Schedule {
    /// Compute the earliest instant strictly after `reference` at which this
    /// schedule fires.
    ///
    /// The comparison is on the full instant, never the date alone: a
    /// candidate on the same date as `reference` but at a later time-of-day
    /// wins, while a candidate equal to `reference` (to the second) does not,
    /// and the search advances by a full interval of `count` periods.
    ///
    /// The calculation is pure and stateless; it may be called with any
    /// reference, in any order, from any thread.
    ///
    /// # Panics
    ///
    /// Panics if the search fails to converge within 10,000 period advances.
    /// That is an internal invariant violation, not a reachable condition for
    /// schedules produced by the builder.
    pub fn next_run_after(&self, reference: NaiveDateTime) -> NaiveDateTime {
        if self.unit.is_date_grain() {
            self.next_date_grain(reference)
        } else {
            self.next_clock_aligned(reference)
        }
    }

    /// Search over date-grain periods: days, weeks, months, years.
    fn next_date_grain(&self, reference: NaiveDateTime) -> NaiveDateTime {
        let fire_time = self
            .time_of_day
            .map(|t| t.as_naive_time())
            .unwrap_or(NaiveTime::MIN);

        let mut start = period_start(self.unit, reference.date());
        for _ in 0..ITERATION_CAP {
            let date = match self.day_selection {
                Some(selection) => locate(selection, start),
                None => start,
            };
            let candidate = date.and_time(fire_time);
            if candidate > reference {
                return candidate;
            }
            trace!(%candidate, %reference, "candidate not after reference, advancing period");
            start = advance(self.unit, start, self.count);
        }
        panic!("next-run search did not converge within {ITERATION_CAP} periods");
    }

    /// Stepping for clock-aligned units: truncate the reference to the
    /// containing minute or hour, then advance in `count`-sized steps.
    fn next_clock_aligned(&self, reference: NaiveDateTime) -> NaiveDateTime {
        let time = reference.time();
        let (floor, step) = match self.unit {
            IntervalUnit::Minutes => (
                NaiveTime::from_hms_opt(time.hour(), time.minute(), 0),
                Duration::minutes(i64::from(self.count)),
            ),
            IntervalUnit::Hours => (
                NaiveTime::from_hms_opt(time.hour(), 0, 0),
                Duration::hours(i64::from(self.count)),
            ),
            _ => unreachable!("date-grain units use the period search"),
        };
        let floor = floor.expect("truncation keeps clock fields in range");

        let mut candidate = reference.date().and_time(floor);
        for _ in 0..ITERATION_CAP {
            if candidate > reference {
                return candidate;
            }
            candidate = candidate + step;
        }
        panic!("next-run search did not converge within {ITERATION_CAP} periods");
    }
}

/// First day of the period containing `date`.
fn period_start(unit: IntervalUnit, date: NaiveDate) -> NaiveDate {
    match unit {
        IntervalUnit::Days => date,
        IntervalUnit::Weeks => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        IntervalUnit::Months | IntervalUnit::Years => {
            date.with_day(1).expect("every month has a first day")
        }
        IntervalUnit::Minutes | IntervalUnit::Hours => {
            unreachable!("clock-aligned units have no date period")
        }
    }
}

/// Advance a period start by `count` units.
fn advance(unit: IntervalUnit, start: NaiveDate, count: u32) -> NaiveDate {
    match unit {
        IntervalUnit::Days => start + Duration::days(i64::from(count)),
        IntervalUnit::Weeks => start + Duration::days(7 * i64::from(count)),
        IntervalUnit::Months => start + Months::new(count),
        IntervalUnit::Years => start + Months::new(count.saturating_mul(12)),
        IntervalUnit::Minutes | IntervalUnit::Hours => {
            unreachable!("clock-aligned units have no date period")
        }
    }
}

/// Locate the selected date within the period starting at `start`.
///
/// Month selections expect `start` to be the first of a month; the weekly
/// selection expects a Monday. The result always lies within the period.
fn locate(selection: DaySelection, start: NaiveDate) -> NaiveDate {
    match selection {
        DaySelection::WeekdayOccurrence { week, weekday } => match week.weeks_from_first() {
            Some(weeks) => first_weekday_on_or_after(start, weekday) + Duration::days(7 * weeks),
            None => last_weekday_on_or_before(month_end(start), weekday),
        },
        DaySelection::DayOfMonth { day } => {
            let last = month_end(start).day();
            start
                .with_day(day.min(last))
                .expect("clamped day is within the month")
        }
        DaySelection::LastDayOfMonth => month_end(start),
        DaySelection::DayOfWeek { weekday } => {
            start + Duration::days(i64::from(weekday.num_days_from_monday()))
        }
    }
}

/// Earliest date on or after `start` falling on `weekday`.
fn first_weekday_on_or_after(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let gap =
        (7 + weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
    start + Duration::days(i64::from(gap))
}

/// Latest date on or before `end` falling on `weekday`.
fn last_weekday_on_or_before(end: NaiveDate, weekday: Weekday) -> NaiveDate {
    let gap =
        (7 + end.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    end - Duration::days(i64::from(gap))
}

/// Final day of the month whose first day is `start`.
fn month_end(start: NaiveDate) -> NaiveDate {
    start + Months::new(1) - Duration::days(1)
}
