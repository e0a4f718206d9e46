//! Expand a set of schedules into a chronologically ordered list of appointments.
//!
//! The generator walks the queried period one calendar day at a time and asks
//! every schedule whether it occurs on that day. Work is proportional to
//! `days × schedules`, which stays small for realistic calendars; the
//! [`GeneratorOptions::max_days`] limit bounds it for unrealistic ones.
//!
//! # Ordering
//!
//! Appointments are sorted by timestamp with a stable sort. Two appointments
//! with the same timestamp keep the order in which they were found: earlier
//! day first, then the order of the schedules passed in.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::period::Period;
use crate::schedule::Schedule;

/// Default upper bound on the length of a queried period, roughly a century.
pub const DEFAULT_MAX_DAYS: u64 = 36_600;

/// A concrete occurrence of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Appointment {
    time: NaiveDateTime,
    name: String,
}

impl Appointment {
    pub(crate) fn new(time: NaiveDateTime, name: String) -> Self {
        Self { time, name }
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Options for [`generate_calendar_with_options`].
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Longest period, in days, the generator agrees to scan.
    pub max_days: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

/// Generate every appointment the given schedules produce inside `period`.
///
/// Uses the default [`GeneratorOptions`]. See
/// [`generate_calendar_with_options`] for details.
///
/// # Errors
///
/// Returns [`ScheduleError::PeriodTooLong`] if `period` spans more than
/// [`DEFAULT_MAX_DAYS`] days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_engine::{generate_calendar, Period, Schedule, TimeOfDay};
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2012, 5, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 6, 30).unwrap(),
/// )
/// .unwrap();
/// let pint = Schedule::single(
///     "Meet Bob for Pint",
///     TimeOfDay::new(19, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2012, 5, 8).unwrap(),
/// );
///
/// let appointments = generate_calendar(&period, &[pint]).unwrap();
/// assert_eq!(appointments.len(), 1);
/// assert_eq!(appointments[0].time().to_string(), "2012-05-08 19:30:00");
/// ```
pub fn generate_calendar(period: &Period, schedules: &[Schedule]) -> Result<Vec<Appointment>> {
    generate_calendar_with_options(period, schedules, &GeneratorOptions::default())
}

/// Generate every appointment the given schedules produce inside `period`.
///
/// # Arguments
///
/// * `period` — The queried date range, both ends included
/// * `schedules` — The rules to evaluate; may be empty
/// * `options` — Generation limits
///
/// # Returns
///
/// One [`Appointment`] per (date, schedule) match, sorted by timestamp. A
/// schedule contributes at most one appointment per date. Calling this twice
/// with the same inputs yields the same sequence.
///
/// # Errors
///
/// Returns [`ScheduleError::PeriodTooLong`] if `period` spans more than
/// `options.max_days` days. Nothing is scanned in that case.
#[tracing::instrument(
    level = "debug",
    skip(schedules, options),
    fields(start = %period.start(), end = %period.end(), schedules = schedules.len())
)]
pub fn generate_calendar_with_options(
    period: &Period,
    schedules: &[Schedule],
    options: &GeneratorOptions,
) -> Result<Vec<Appointment>> {
    let days = period.num_days();
    if u64::try_from(days)
        .ok()
        .is_none_or(|days| days > options.max_days)
    {
        tracing::warn!(days, max_days = options.max_days, "Rejecting oversized period");
        return Err(ScheduleError::PeriodTooLong(format!(
            "{} to {} spans {days} days, limit is {}",
            period.start(),
            period.end(),
            options.max_days
        )));
    }

    let mut appointments = Vec::new();
    for date in period.days() {
        let before = appointments.len();
        appointments.extend(
            schedules
                .iter()
                .filter_map(|schedule| schedule.appointment_on(date)),
        );
        if appointments.len() > before {
            tracing::trace!(%date, found = appointments.len() - before, "Matched schedules");
        }
    }

    // Stable: equal timestamps keep day-major, input-order discovery order.
    appointments.sort_by_key(|appointment| appointment.time);

    tracing::debug!(count = appointments.len(), "Generated calendar");
    Ok(appointments)
}
