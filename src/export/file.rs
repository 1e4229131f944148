use super::ExportResult;
use super::timeline::build_timeline;
use crate::format::format_hours;
use crate::planner::PlanReport;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Plain-text day plan, one block per day that has work.
pub fn render_text_plan(report: &PlanReport) -> String {
    let mut out = String::new();
    for (n, bin) in report.plan.active_days().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        match bin.date {
            Some(date) => {
                let _ = writeln!(out, "Day {} ({})", bin.day_index, date.format("%Y-%m-%d"));
            }
            None => {
                let _ = writeln!(out, "Day {}", bin.day_index);
            }
        }
        for chunk in &bin.chunks {
            let _ = writeln!(
                out,
                "- {} - {} ({}): {}",
                chunk.subject,
                chunk.topic,
                chunk.difficulty,
                format_hours(chunk.hours)
            );
        }
    }
    out
}

pub fn save_text_plan<P: AsRef<Path>>(report: &PlanReport, path: P) -> ExportResult<()> {
    fs::write(path, render_text_plan(report))?;
    Ok(())
}

#[derive(Serialize)]
struct TopicCsvRecord<'a> {
    index: usize,
    subject: &'a str,
    topic: &'a str,
    difficulty: &'static str,
    hours: String,
    formatted_time: String,
}

pub fn write_topics_csv<W: Write>(report: &PlanReport, writer: W) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for (idx, item) in report.items.iter().enumerate() {
        writer.serialize(TopicCsvRecord {
            index: idx + 1,
            subject: &item.subject,
            topic: &item.topic,
            difficulty: item.difficulty.as_str(),
            hours: format_decimal(item.allocated_hours),
            formatted_time: format_hours(item.allocated_hours),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_topics_to_csv<P: AsRef<Path>>(report: &PlanReport, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_topics_csv(report, file)
}

#[derive(Serialize)]
struct TimelineCsvRecord<'a> {
    day: u32,
    subject: &'a str,
    topic: &'a str,
    difficulty: &'static str,
    hours: String,
    start: String,
    finish: String,
}

pub fn write_timeline_csv<W: Write>(
    report: &PlanReport,
    day_start_hour: u32,
    writer: W,
) -> ExportResult<()> {
    let entries = build_timeline(report, day_start_hour)?;
    let mut writer = csv::Writer::from_writer(writer);
    for entry in &entries {
        writer.serialize(TimelineCsvRecord {
            day: entry.day_index,
            subject: &entry.subject,
            topic: &entry.topic,
            difficulty: entry.difficulty.as_str(),
            hours: format_decimal(entry.hours),
            start: format_timestamp(entry.start),
            finish: format_timestamp(entry.finish),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_timeline_to_csv<P: AsRef<Path>>(
    report: &PlanReport,
    day_start_hour: u32,
    path: P,
) -> ExportResult<()> {
    let file = File::create(path)?;
    write_timeline_csv(report, day_start_hour, file)
}

pub fn save_report_to_json<P: AsRef<Path>>(report: &PlanReport, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

fn format_decimal(value: f64) -> String {
    format!("{value:.2}")
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
