use chrono::{NaiveDate, Weekday};
use study_planner::{PlannerError, StudyCalendar, StudyCalendarConfig};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn no_dates() -> Vec<NaiveDate> {
    Vec::new()
}

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[test]
fn default_calendar_uses_every_day() {
    let calendar = StudyCalendar::default();
    let dates = calendar.dates_for_days(d(2025, 1, 3), 4).unwrap();
    assert_eq!(
        dates,
        vec![d(2025, 1, 3), d(2025, 1, 4), d(2025, 1, 5), d(2025, 1, 6)]
    );
}

#[test]
fn rest_days_are_skipped() {
    let calendar = StudyCalendar::custom(WEEKDAYS, no_dates()).unwrap();
    // 2025-01-03 is a Friday
    let dates = calendar.dates_for_days(d(2025, 1, 3), 3).unwrap();
    assert_eq!(dates, vec![d(2025, 1, 3), d(2025, 1, 6), d(2025, 1, 7)]);
    assert!(!calendar.is_available(d(2025, 1, 4)));
}

#[test]
fn start_on_rest_day_moves_forward() {
    let calendar = StudyCalendar::custom(WEEKDAYS, no_dates()).unwrap();
    assert_eq!(calendar.first_available(d(2025, 1, 4)), Some(d(2025, 1, 6)));
    assert_eq!(calendar.next_available(d(2025, 1, 6)), Some(d(2025, 1, 7)));
}

#[test]
fn blocked_dates_are_skipped() {
    let calendar = StudyCalendar::custom(
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ],
        [d(2025, 1, 2), d(2025, 1, 4)],
    )
    .unwrap();
    let dates = calendar.dates_for_days(d(2025, 1, 1), 3).unwrap();
    assert_eq!(dates, vec![d(2025, 1, 1), d(2025, 1, 3), d(2025, 1, 5)]);
    assert!(!calendar.is_available(d(2025, 1, 2)));
}

#[test]
fn calendar_requires_a_study_day() {
    assert!(StudyCalendar::custom(Vec::<Weekday>::new(), no_dates()).is_err());
    assert!(StudyCalendarConfig::new(Vec::<Weekday>::new(), [d(2025, 1, 1)]).is_err());
}

#[test]
fn config_round_trip_preserves_rules() {
    let calendar = StudyCalendar::custom(
        [Weekday::Sat, Weekday::Mon, Weekday::Mon],
        [d(2025, 2, 1), d(2025, 1, 6)],
    )
    .unwrap();
    let config = StudyCalendarConfig::from(&calendar);
    assert_eq!(config.study_days(), &[Weekday::Mon, Weekday::Sat]);
    assert_eq!(config.blocked_dates(), &[d(2025, 1, 6), d(2025, 2, 1)]);

    let json = serde_json::to_string(&config).unwrap();
    let parsed: StudyCalendarConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(StudyCalendar::from_config(&parsed).unwrap(), calendar);
}

#[test]
fn zero_days_yields_no_dates() {
    assert!(
        StudyCalendar::default()
            .dates_for_days(d(2025, 1, 1), 0)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn dates_past_the_calendar_end_are_an_error() {
    let calendar = StudyCalendar::default();
    assert_eq!(
        calendar.dates_for_days(NaiveDate::MAX, 1).unwrap(),
        vec![NaiveDate::MAX]
    );
    assert_eq!(calendar.next_available(NaiveDate::MAX), None);

    let err = calendar.dates_for_days(NaiveDate::MAX, 3).unwrap_err();
    assert!(matches!(err, PlannerError::DateOutOfRange { days: 3, .. }));
}

#[test]
fn blocked_last_date_has_no_first_available() {
    let calendar = StudyCalendar::custom(WEEKDAYS, [NaiveDate::MAX]).unwrap();
    assert_eq!(calendar.first_available(NaiveDate::MAX), None);
    assert!(calendar.dates_for_days(NaiveDate::MAX, 1).is_err());
}
