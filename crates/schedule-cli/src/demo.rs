//! Built-in sample schedules used by `schedule demo`.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Weekday};
use schedule_engine::{DayOfMonth, Period, Schedule, TimeOfDay};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("invalid date {year}-{month}-{day}"))
}

/// A pint, a meeting confirmation, weekly sprint planning, a Mon/Wed/Fri backup
/// check over two weeks and a month-end wage check.
pub fn schedules() -> Result<Vec<Schedule>> {
    Ok(vec![
        Schedule::single("Meet Bob for Pint", TimeOfDay::new(19, 30)?, date(2012, 5, 8)?),
        Schedule::single("Confirm Meeting", TimeOfDay::new(9, 30)?, date(2012, 5, 12)?),
        Schedule::interval_repeating(
            "Sprint Planning Meeting",
            TimeOfDay::new(10, 0)?,
            Period::new(date(2012, 1, 2)?, date(2012, 12, 31)?)?,
            7,
        )?,
        Schedule::weekly(
            "Check Backup Reliability",
            TimeOfDay::new(8, 0)?,
            Period::new(date(2012, 5, 28)?, date(2012, 6, 8)?)?,
            [Weekday::Mon, Weekday::Wed, Weekday::Fri],
        ),
        Schedule::monthly(
            "Check Wages",
            TimeOfDay::new(18, 0)?,
            Period::new(date(2012, 1, 2)?, date(2100, 1, 1)?)?,
            DayOfMonth::new(31)?,
        ),
    ])
}
