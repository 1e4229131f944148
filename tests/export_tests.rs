use chrono::NaiveDate;
use std::fs;
use study_planner::export::{
    build_timeline, render_text_plan, save_report_to_json, save_text_plan, save_timeline_to_csv,
    save_topics_to_csv, write_timeline_csv,
};
use study_planner::{ExportError, PlanReport, PlanRequest, Planner};
use tempfile::NamedTempFile;

const SCENARIO: &str = "Math: Algebra (hard), Calculus (easy)\nPython: Basics (easy)";

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dated_report() -> PlanReport {
    Planner::default()
        .generate(&PlanRequest::new(SCENARIO, 2, 3.0).with_start_date(d(2025, 3, 10)))
        .unwrap()
}

#[test]
fn text_plan_lists_each_day() {
    let text = render_text_plan(&dated_report());
    let expected = "Day 1 (2025-03-10)\n\
                    - Math - Algebra (hard): 3 hrs\n\
                    \n\
                    Day 2 (2025-03-11)\n\
                    - Math - Algebra (hard): 36 mins\n\
                    - Math - Calculus (easy): 1 hrs 12 mins\n\
                    - Python - Basics (easy): 1 hrs 12 mins\n";
    assert_eq!(text, expected);
}

#[test]
fn text_plan_without_dates_uses_day_numbers() {
    let report = Planner::default()
        .generate(&PlanRequest::new("Math: Algebra (hard)", 1, 1.0))
        .unwrap();
    assert_eq!(render_text_plan(&report), "Day 1\n- Math - Algebra (hard): 1 hrs\n");
}

#[test]
fn save_text_plan_writes_file() {
    let tmp = NamedTempFile::new().unwrap();
    let report = dated_report();
    save_text_plan(&report, tmp.path()).unwrap();
    assert_eq!(fs::read_to_string(tmp.path()).unwrap(), render_text_plan(&report));
}

#[test]
fn topics_csv_has_one_row_per_topic() {
    let tmp = NamedTempFile::new().unwrap();
    save_topics_to_csv(&dated_report(), tmp.path()).unwrap();

    let mut reader = csv::Reader::from_path(tmp.path()).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["index", "subject", "topic", "difficulty", "hours", "formatted_time"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "Math");
    assert_eq!(&rows[0][2], "Algebra");
    assert_eq!(&rows[0][4], "3.60");
    assert_eq!(&rows[0][5], "3 hrs 36 mins");
    assert_eq!(&rows[2][2], "Basics");
}

#[test]
fn timeline_starts_each_day_at_configured_hour() {
    let entries = build_timeline(&dated_report(), 9).unwrap();
    assert_eq!(entries.len(), 4);

    let dt = |day, h, m| d(2025, 3, day).and_hms_opt(h, m, 0).unwrap();
    assert_eq!(entries[0].start, dt(10, 9, 0));
    assert_eq!(entries[0].finish, dt(10, 12, 0));
    assert_eq!(entries[1].start, dt(11, 9, 0));
    assert_eq!(entries[1].finish, dt(11, 9, 36));
    assert_eq!(entries[2].start, dt(11, 9, 36));
    assert_eq!(entries[3].finish, dt(11, 12, 0));
}

#[test]
fn timeline_csv_uses_iso_timestamps() {
    let tmp = NamedTempFile::new().unwrap();
    save_timeline_to_csv(&dated_report(), 8, tmp.path()).unwrap();
    let contents = fs::read_to_string(tmp.path()).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("day,subject,topic,difficulty,hours,start,finish")
    );
    assert_eq!(
        lines.next(),
        Some("1,Math,Algebra,hard,3.00,2025-03-10T08:00:00,2025-03-10T11:00:00")
    );
}

#[test]
fn timeline_requires_dates() {
    let report = Planner::default()
        .generate(&PlanRequest::new(SCENARIO, 2, 3.0))
        .unwrap();
    let mut buffer = Vec::new();
    let err = write_timeline_csv(&report, 9, &mut buffer).unwrap_err();
    assert!(matches!(err, ExportError::MissingDate(1)));
}

#[test]
fn timeline_rejects_invalid_start_hour() {
    let err = build_timeline(&dated_report(), 24).unwrap_err();
    assert!(matches!(err, ExportError::InvalidDayStart(24)));
}

#[test]
fn json_report_round_trips() {
    let tmp = NamedTempFile::new().unwrap();
    let report = dated_report();
    save_report_to_json(&report, tmp.path()).unwrap();
    let loaded: PlanReport = serde_json::from_str(&fs::read_to_string(tmp.path()).unwrap()).unwrap();
    assert_eq!(loaded.items.len(), report.items.len());
    assert_eq!(loaded.plan.days.len(), 2);
    assert_eq!(loaded.plan.days[1].date, Some(d(2025, 3, 11)));
}

#[test]
fn timeline_rejects_timestamps_past_calendar_end() {
    let mut report = Planner::default()
        .generate(&PlanRequest::new("Math: Algebra (hard)", 1, 24.0).with_start_date(NaiveDate::MAX))
        .unwrap();
    let err = build_timeline(&report, 9).unwrap_err();
    assert!(matches!(err, ExportError::TimelineOverflow(1)));

    report.plan.days[0].date = Some(d(2025, 1, 1));
    report.plan.days[0].chunks[0].hours = 1e10;
    let err = build_timeline(&report, 9).unwrap_err();
    assert!(matches!(err, ExportError::TimelineOverflow(1)));

    report.plan.days[0].chunks[0].hours = f64::INFINITY;
    let mut buffer = Vec::new();
    let err = write_timeline_csv(&report, 9, &mut buffer).unwrap_err();
    assert!(matches!(err, ExportError::TimelineOverflow(1)));
}
