//! Report views as polars `DataFrame`s, ready for rendering.

use crate::format::format_hours;
use crate::planner::PlanReport;
use chrono::NaiveDate;
use polars::prelude::*;

/// `index, subject, topic, difficulty, formatted_time, hours`
pub fn topic_table(report: &PlanReport) -> PolarsResult<DataFrame> {
    let items = &report.items;
    let index: Vec<i32> = (1..=items.len() as i32).collect();
    let subject: Vec<&str> = items.iter().map(|i| i.subject.as_str()).collect();
    let topic: Vec<&str> = items.iter().map(|i| i.topic.as_str()).collect();
    let difficulty: Vec<&str> = items.iter().map(|i| i.difficulty.as_str()).collect();
    let formatted: Vec<String> = items.iter().map(|i| format_hours(i.allocated_hours)).collect();
    let hours: Vec<f64> = items.iter().map(|i| i.allocated_hours).collect();

    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("index"), index).into_column(),
        Series::new(PlSmallStr::from_static("subject"), subject).into_column(),
        Series::new(PlSmallStr::from_static("topic"), topic).into_column(),
        Series::new(PlSmallStr::from_static("difficulty"), difficulty).into_column(),
        Series::new(PlSmallStr::from_static("formatted_time"), formatted).into_column(),
        Series::new(PlSmallStr::from_static("hours"), hours).into_column(),
    ])
}

/// `subject, total_hours, formatted_time, percent_of_total`
pub fn subject_table(report: &PlanReport) -> PolarsResult<DataFrame> {
    let subjects = &report.subjects;
    let subject: Vec<&str> = subjects.iter().map(|s| s.subject.as_str()).collect();
    let total: Vec<f64> = subjects.iter().map(|s| s.total_hours).collect();
    let formatted: Vec<&str> = subjects.iter().map(|s| s.formatted_time.as_str()).collect();
    let percent: Vec<f64> = subjects.iter().map(|s| s.percent_of_total).collect();

    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("subject"), subject).into_column(),
        Series::new(PlSmallStr::from_static("total_hours"), total).into_column(),
        Series::new(PlSmallStr::from_static("formatted_time"), formatted).into_column(),
        Series::new(PlSmallStr::from_static("percent_of_total"), percent).into_column(),
    ])
}

/// One row per chunk: `day, date, subject, topic, difficulty, hours`
pub fn plan_table(report: &PlanReport) -> PolarsResult<DataFrame> {
    let mut day = Vec::new();
    let mut date: Vec<Option<i32>> = Vec::new();
    let mut subject = Vec::new();
    let mut topic = Vec::new();
    let mut difficulty = Vec::new();
    let mut hours = Vec::new();

    for bin in &report.plan.days {
        for chunk in &bin.chunks {
            day.push(bin.day_index as i32);
            date.push(bin.date.map(date_to_i32));
            subject.push(chunk.subject.as_str());
            topic.push(chunk.topic.as_str());
            difficulty.push(chunk.difficulty.as_str());
            hours.push(chunk.hours);
        }
    }

    let date_series =
        Series::new(PlSmallStr::from_static("date"), date).cast(&DataType::Date)?;
    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("day"), day).into_column(),
        date_series.into_column(),
        Series::new(PlSmallStr::from_static("subject"), subject).into_column(),
        Series::new(PlSmallStr::from_static("topic"), topic).into_column(),
        Series::new(PlSmallStr::from_static("difficulty"), difficulty).into_column(),
        Series::new(PlSmallStr::from_static("hours"), hours).into_column(),
    ])
}

/// Days since the Unix epoch, the physical representation of a polars Date.
fn date_to_i32(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}
