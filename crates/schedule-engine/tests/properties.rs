//! Property-based tests for value validation, schedule predicates and calendar generation.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use schedule_engine::{
    generate_calendar, DayOfMonth, Period, Schedule, ScheduleError, TimeOfDay,
};

/// Dates between 2000-01-01 and roughly 2050.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..18_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

/// A period of 1 to 400 days.
fn arb_period() -> impl Strategy<Value = Period> {
    (arb_date(), 0i64..400).prop_map(|(start, len)| {
        Period::new(start, start + chrono::Duration::days(len)).unwrap()
    })
}

fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap())
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Mon),
        Just(Weekday::Tue),
        Just(Weekday::Wed),
        Just(Weekday::Thu),
        Just(Weekday::Fri),
        Just(Weekday::Sat),
        Just(Weekday::Sun),
    ]
}

fn arb_schedule() -> impl Strategy<Value = Schedule> {
    prop_oneof![
        (arb_time(), arb_date()).prop_map(|(t, d)| Schedule::single("single", t, d)),
        (arb_time(), arb_period(), 1u32..40).prop_map(|(t, p, n)| {
            Schedule::interval_repeating("interval", t, p, n).unwrap()
        }),
        (arb_time(), arb_period(), prop::collection::vec(arb_weekday(), 0..10))
            .prop_map(|(t, p, days)| Schedule::weekly("weekly", t, p, days)),
        (arb_time(), arb_period(), 1u32..=31).prop_map(|(t, p, d)| {
            Schedule::monthly("monthly", t, p, DayOfMonth::new(d).unwrap())
        }),
    ]
}

proptest! {
    #[test]
    fn prop_period_orders_bounds(a in arb_date(), b in arb_date()) {
        match Period::new(a, b) {
            Ok(period) => {
                prop_assert!(a <= b);
                prop_assert!(period.start() <= period.end());
            }
            Err(err) => {
                prop_assert!(a > b);
                prop_assert!(matches!(err, ScheduleError::InvalidRange(_)), "unexpected error: {:?}", err);
            }
        }
    }

    #[test]
    fn prop_time_of_day_round_trips(h in 0u32..24, m in 0u32..60) {
        let time = TimeOfDay::new(h, m).unwrap();
        prop_assert_eq!((time.hours(), time.minutes()), (h, m));
        prop_assert_eq!(time.to_string().parse::<TimeOfDay>().unwrap(), time);
    }

    #[test]
    fn prop_time_of_day_rejects_out_of_range(h in 24u32..1000, m in 60u32..1000) {
        prop_assert!(TimeOfDay::new(h, 0).is_err());
        prop_assert!(TimeOfDay::new(0, m).is_err());
    }

    #[test]
    fn prop_day_of_month_domain(d in 0u32..100) {
        prop_assert_eq!(DayOfMonth::new(d).is_ok(), (1..=31).contains(&d));
    }

    #[test]
    fn prop_interval_hits_are_arithmetic_progression(period in arb_period(), n in 1u32..30) {
        let schedule = Schedule::interval_repeating("x", TimeOfDay::new(0, 0).unwrap(), period, n).unwrap();
        let hits: Vec<_> = schedule.occurrences(&period).collect();
        let expected: Vec<_> = period
            .days()
            .step_by(n as usize)
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn prop_weekly_hits_match_weekday_set(
        period in arb_period(),
        days in prop::collection::vec(arb_weekday(), 0..7),
    ) {
        let schedule = Schedule::weekly("x", TimeOfDay::new(0, 0).unwrap(), period, days.clone());
        for date in period.days() {
            prop_assert_eq!(schedule.occurs_on(date), days.contains(&date.weekday()));
        }
    }

    #[test]
    fn prop_monthly_fires_once_per_full_month(year in 2000i32..2050, month in 1u32..=12, d in 1u32..=31) {
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let last = first
            .checked_add_months(chrono::Months::new(1))
            .unwrap()
            .pred_opt()
            .unwrap();
        let whole_month = Period::new(first, last).unwrap();
        let schedule = Schedule::monthly("x", TimeOfDay::new(0, 0).unwrap(), whole_month, DayOfMonth::new(d).unwrap());

        let hits: Vec<_> = schedule.occurrences(&whole_month).collect();
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0].day(), d.min(last.day()));
    }

    #[test]
    fn prop_calendar_sorted_and_idempotent(
        query in arb_period(),
        schedules in prop::collection::vec(arb_schedule(), 0..6),
    ) {
        let first = generate_calendar(&query, &schedules).unwrap();
        let second = generate_calendar(&query, &schedules).unwrap();

        prop_assert!(first.windows(2).all(|w| w[0].time() <= w[1].time()));
        prop_assert!(first.iter().all(|a| query.contains(a.time().date())));
        prop_assert_eq!(&first, &second);

        let expected: usize = schedules.iter().map(|s| s.occurrences(&query).count()).sum();
        prop_assert_eq!(first.len(), expected);
    }

    #[test]
    fn prop_empty_schedules_empty_calendar(query in arb_period()) {
        prop_assert!(generate_calendar(&query, &[]).unwrap().is_empty());
    }
}
