//! Recurrence rules and their date predicates.
//!
//! A [`Schedule`] pairs a name and a [`TimeOfDay`] with one of four rule kinds
//! ([`ScheduleKind`]). Every kind answers the same question, "does this rule
//! produce an occurrence on date D?", through [`Schedule::occurs_on`]. The
//! answer only depends on the date, so predicates are pure and can be evaluated
//! in any order.
//!
//! # Definition format
//!
//! Schedules (de)serialize as flat objects tagged by `kind`:
//!
//! ```
//! use schedule_engine::Schedule;
//!
//! let json = r#"[
//!     {"name": "Meet Bob for Pint", "time": "19:30", "kind": "single", "date": "2012-05-08"},
//!     {"name": "Sprint Planning Meeting", "time": "10:00", "kind": "interval_repeating",
//!      "range": {"start": "2012-01-02", "end": "2012-12-31"}, "days_between": 7},
//!     {"name": "Check Backup Reliability", "time": "08:00", "kind": "weekly",
//!      "range": {"start": "2012-05-28", "end": "2012-06-08"}, "days": ["Mon", "Wed", "Fri"]},
//!     {"name": "Check Wages", "time": "18:00", "kind": "monthly",
//!      "range": {"start": "2012-01-02", "end": "2100-01-01"}, "day_of_month": 31}
//! ]"#;
//! let schedules: Vec<Schedule> = serde_json::from_str(json).unwrap();
//! assert_eq!(schedules.len(), 4);
//! ```

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::day_of_month::DayOfMonth;
use crate::error::{Result, ScheduleError};
use crate::generator::Appointment;
use crate::period::Period;
use crate::time_of_day::TimeOfDay;

// ── Schedule ────────────────────────────────────────────────────────────────

/// A named recurrence rule placed at a fixed time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    name: String,
    #[serde(rename = "time")]
    time_of_day: TimeOfDay,
    #[serde(flatten)]
    kind: ScheduleKind,
}

/// The four supported recurrence rules.
///
/// Every payload is already validated by its own type, so any value of this
/// enum is a well-formed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Fires exactly once, on `date`.
    Single { date: NaiveDate },

    /// Fires every `days_between` days inside `scheduling_range`, counting from
    /// the range's first day. Moving the range start moves the whole cadence.
    IntervalRepeating {
        #[serde(rename = "range")]
        scheduling_range: Period,
        days_between: NonZeroU32,
    },

    /// Fires on every date inside `scheduling_range` whose weekday is in `days`.
    /// An empty set never fires.
    Weekly {
        #[serde(rename = "range")]
        scheduling_range: Period,
        days: WeekdaySet,
    },

    /// Fires on `day_of_month` of every month inside `scheduling_range`.
    ///
    /// When a month is shorter than `day_of_month`, the month's last day fires
    /// instead (day 31 lands on 30 April, 28 or 29 February). Only the last day
    /// is substituted: day 31 never fires on 29 April.
    Monthly {
        #[serde(rename = "range")]
        scheduling_range: Period,
        day_of_month: DayOfMonth,
    },
}

impl Schedule {
    pub fn new(name: impl Into<String>, time_of_day: TimeOfDay, kind: ScheduleKind) -> Self {
        Self {
            name: name.into(),
            time_of_day,
            kind,
        }
    }

    /// A one-off appointment on `date`.
    pub fn single(name: impl Into<String>, time_of_day: TimeOfDay, date: NaiveDate) -> Self {
        Self::new(name, time_of_day, ScheduleKind::Single { date })
    }

    /// An appointment every `days_between` days, starting on the range's first day.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::OutOfRange`] if `days_between` is zero.
    pub fn interval_repeating(
        name: impl Into<String>,
        time_of_day: TimeOfDay,
        scheduling_range: Period,
        days_between: u32,
    ) -> Result<Self> {
        let days_between = NonZeroU32::new(days_between).ok_or_else(|| {
            ScheduleError::OutOfRange("days between must be greater than 0".to_string())
        })?;
        Ok(Self::new(
            name,
            time_of_day,
            ScheduleKind::IntervalRepeating {
                scheduling_range,
                days_between,
            },
        ))
    }

    /// An appointment on each of the given weekdays. Duplicates are ignored.
    pub fn weekly(
        name: impl Into<String>,
        time_of_day: TimeOfDay,
        scheduling_range: Period,
        days: impl IntoIterator<Item = Weekday>,
    ) -> Self {
        Self::new(
            name,
            time_of_day,
            ScheduleKind::Weekly {
                scheduling_range,
                days: days.into_iter().collect(),
            },
        )
    }

    /// An appointment on the same day of every month, clamped to short months' last day.
    pub fn monthly(
        name: impl Into<String>,
        time_of_day: TimeOfDay,
        scheduling_range: Period,
        day_of_month: DayOfMonth,
    ) -> Self {
        Self::new(
            name,
            time_of_day,
            ScheduleKind::Monthly {
                scheduling_range,
                day_of_month,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn kind(&self) -> &ScheduleKind {
        &self.kind
    }

    /// The window a repeating rule is confined to. `None` for single schedules.
    pub fn scheduling_range(&self) -> Option<&Period> {
        self.kind.scheduling_range()
    }

    /// Whether this schedule produces an occurrence on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.kind.occurs_on(date)
    }

    /// The appointment this schedule produces on `date`, if any.
    pub fn appointment_on(&self, date: NaiveDate) -> Option<Appointment> {
        self.occurs_on(date)
            .then(|| Appointment::new(self.time_of_day.on(date), self.name.clone()))
    }

    /// Dates inside `period` on which this schedule occurs, ascending.
    pub fn occurrences<'a>(&'a self, period: &Period) -> impl Iterator<Item = NaiveDate> + 'a {
        period.days().filter(move |date| self.occurs_on(*date))
    }
}

impl ScheduleKind {
    /// The window a repeating rule is confined to. `None` for [`ScheduleKind::Single`].
    pub fn scheduling_range(&self) -> Option<&Period> {
        match self {
            ScheduleKind::Single { .. } => None,
            ScheduleKind::IntervalRepeating {
                scheduling_range, ..
            }
            | ScheduleKind::Weekly {
                scheduling_range, ..
            }
            | ScheduleKind::Monthly {
                scheduling_range, ..
            } => Some(scheduling_range),
        }
    }

    /// Whether this rule produces an occurrence on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            ScheduleKind::Single { date: scheduled } => *scheduled == date,
            ScheduleKind::IntervalRepeating {
                scheduling_range,
                days_between,
            } => {
                if !scheduling_range.contains(date) {
                    return false;
                }
                let delta = (date - scheduling_range.start()).num_days();
                delta % i64::from(days_between.get()) == 0
            }
            ScheduleKind::Weekly {
                scheduling_range,
                days,
            } => scheduling_range.contains(date) && days.contains(date.weekday()),
            ScheduleKind::Monthly {
                scheduling_range,
                day_of_month,
            } => scheduling_range.contains(date) && matches_day_of_month(date, *day_of_month),
        }
    }
}

/// Exact day match, or the month's last day standing in for a day the month lacks.
fn matches_day_of_month(date: NaiveDate, day_of_month: DayOfMonth) -> bool {
    let day = date.day();
    if day == day_of_month.value() {
        return true;
    }
    is_last_day_of_month(date) && day_of_month.value() > day
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

// ── WeekdaySet ──────────────────────────────────────────────────────────────

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of weekdays. Inserting a day twice has no effect.
///
/// Serialized as a Monday-first list such as `["Mon", "Fri"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn new() -> Self {
        Self(0)
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    /// Returns `false` if the day was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let fresh = !self.contains(day);
        self.0 |= Self::bit(day);
        fresh
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Weekday> for WeekdaySet {
    fn extend<I: IntoIterator<Item = Weekday>>(&mut self, iter: I) {
        for day in iter {
            self.insert(day);
        }
    }
}

impl From<Vec<Weekday>> for WeekdaySet {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}
