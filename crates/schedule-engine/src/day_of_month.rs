//! Validated day-of-month numbers for monthly schedules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_range, Result, ScheduleError};

/// A day number in `1..=31`.
///
/// Not every month has every day; see [`crate::ScheduleKind::Monthly`] for how
/// days past a short month's end are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// # Errors
    ///
    /// Returns [`ScheduleError::OutOfRange`] if `day` is not in `1..=31`.
    pub fn new(day: u32) -> Result<Self> {
        let day = check_range("day of month", day, 1, 31)?;
        Ok(Self(day as u8))
    }

    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u32> for DayOfMonth {
    type Error = ScheduleError;

    fn try_from(day: u32) -> Result<Self> {
        DayOfMonth::new(day)
    }
}

impl From<DayOfMonth> for u32 {
    fn from(day: DayOfMonth) -> Self {
        day.value()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
