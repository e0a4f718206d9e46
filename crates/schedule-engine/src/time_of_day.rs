//! Validated hour/minute values used to place an appointment on its date.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{check_range, Result, ScheduleError};

/// A time of day with minute precision (`00:00` through `23:59`).
///
/// Serialized as an `"HH:MM"` string. Deserialization goes through
/// [`TimeOfDay::new`], so an out-of-range value can never be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// Returns [`ScheduleError::OutOfRange`] if `hours` is not in `0..=23` or
    /// `minutes` is not in `0..=59`.
    pub fn new(hours: u32, minutes: u32) -> Result<Self> {
        let hours = check_range("hours", hours, 0, 23)?;
        let minutes = check_range("minutes", minutes, 0, 59)?;
        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
        })
    }

    pub fn hours(&self) -> u32 {
        u32::from(self.hours)
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.minutes)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::MIN + self.to_duration()
    }

    /// Offset from midnight.
    pub fn to_duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.hours) * 60 + i64::from(self.minutes))
    }

    /// Timestamp for this time of day on `date`. Never spills into the next day.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

/// Seconds and sub-second parts of the source time are dropped.
impl TryFrom<NaiveTime> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(time: NaiveTime) -> Result<Self> {
        TimeOfDay::new(time.hour(), time.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parse `"HH:MM"` (a single-digit hour such as `"8:00"` is accepted).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidValue(format!("expected HH:MM, got '{s}'"));

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        let well_formed = (1..=2).contains(&hours.len()) && minutes.len() == 2;
        if !well_formed || !digits(hours) || !digits(minutes) {
            return Err(invalid());
        }
        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        TimeOfDay::new(hours, minutes)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
