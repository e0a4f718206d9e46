//! Inclusive, date-only ranges.
//!
//! A [`Period`] bounds both the calendar a caller queries and the window in
//! which a repeating schedule is allowed to fire. Periods carry no time of
//! day: anything finer than a date is truncated at construction.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A closed date range `[start, end]` with `start <= end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::Period;
///
/// let may = Period::new(
///     NaiveDate::from_ymd_opt(2012, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 5, 31).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(may.num_days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unvalidated wire shape; every deserialized period passes through [`Period::new`].
#[derive(Deserialize)]
struct RawPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawPeriod> for Period {
    type Error = ScheduleError;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        Period::new(raw.start, raw.end)
    }
}

impl Period {
    /// Create a period from two dates.
    ///
    /// A one-day period (`start == end`) is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ScheduleError::InvalidRange(format!(
                "start date {start} may not be after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a period from two timestamps, discarding their time of day.
    ///
    /// `2012-05-01T23:00` to `2012-05-01T08:00` is therefore a valid one-day
    /// period: only the dates are compared.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRange`] if the start date is after the end date.
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        Self::new(start.date(), end.date())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the period, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date of the period in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_valid_period() {
        let period = Period::new(date(2012, 1, 2), date(2012, 12, 31)).unwrap();
        assert_eq!(period.start(), date(2012, 1, 2));
        assert_eq!(period.end(), date(2012, 12, 31));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        let period = Period::new(date(2012, 5, 8), date(2012, 5, 8)).unwrap();
        assert_eq!(period.num_days(), 1);
        assert_eq!(period.days().collect::<Vec<_>>(), vec![date(2012, 5, 8)]);
    }

    #[test]
    fn test_start_after_end_rejected() {
        let err = Period::new(date(2012, 5, 9), date(2012, 5, 8)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRange(_)));
        assert!(err.to_string().contains("2012-05-09"));
    }

    #[test]
    fn test_from_datetimes_truncates_time() {
        let start = date(2012, 5, 1).and_hms_opt(23, 0, 0).unwrap();
        let end = date(2012, 5, 1).and_hms_opt(8, 0, 0).unwrap();
        let period = Period::from_datetimes(start, end).unwrap();
        assert_eq!(period.start(), date(2012, 5, 1));
        assert_eq!(period.end(), date(2012, 5, 1));
    }

    #[test]
    fn test_from_datetimes_rejects_later_start_date() {
        let start = date(2012, 5, 2).and_hms_opt(0, 0, 0).unwrap();
        let end = date(2012, 5, 1).and_hms_opt(23, 59, 59).unwrap();
        assert!(matches!(
            Period::from_datetimes(start, end),
            Err(ScheduleError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::new(date(2012, 5, 28), date(2012, 6, 8)).unwrap();
        assert!(period.contains(date(2012, 5, 28)));
        assert!(period.contains(date(2012, 6, 8)));
        assert!(!period.contains(date(2012, 5, 27)));
        assert!(!period.contains(date(2012, 6, 9)));
    }

    #[test]
    fn test_days_crosses_month_and_leap_day() {
        let period = Period::new(date(2012, 2, 28), date(2012, 3, 1)).unwrap();
        let days: Vec<_> = period.days().collect();
        assert_eq!(days, vec![date(2012, 2, 28), date(2012, 2, 29), date(2012, 3, 1)]);
        assert_eq!(period.num_days(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Period =
            serde_json::from_str(r#"{"start":"2012-05-01","end":"2012-06-30"}"#).unwrap();
        assert_eq!(ok.num_days(), 61);

        let bad = serde_json::from_str::<Period>(r#"{"start":"2012-07-01","end":"2012-06-30"}"#);
        assert!(bad.is_err());
    }
}
