//! # schedule-engine
//!
//! Deterministic appointment generation from declarative schedule rules.
//!
//! A caller describes *what happens on which day* with a handful of
//! [`Schedule`] values (a single event, a fixed-interval repeat, a weekly
//! day-of-week pattern or a monthly day-of-month pattern), then asks
//! [`generate_calendar`] for every concrete [`Appointment`] inside a queried
//! [`Period`], ordered by timestamp.
//!
//! ## Modules
//!
//! - [`period`] — Inclusive, date-only ranges
//! - [`time_of_day`] — Validated hour/minute values
//! - [`day_of_month`] — Validated 1–31 day numbers
//! - [`schedule`] — The four recurrence rules and their date predicates
//! - [`generator`] — Day-by-day expansion of schedules into appointments
//! - [`error`] — Error types

pub mod day_of_month;
pub mod error;
pub mod generator;
pub mod period;
pub mod schedule;
pub mod time_of_day;

pub use day_of_month::DayOfMonth;
pub use error::ScheduleError;
pub use generator::{
    generate_calendar, generate_calendar_with_options, Appointment, GeneratorOptions,
    DEFAULT_MAX_DAYS,
};
pub use period::Period;
pub use schedule::{Schedule, ScheduleKind, WeekdaySet};
pub use time_of_day::TimeOfDay;
