use super::{ExportError, ExportResult};
use crate::difficulty::Difficulty;
use crate::planner::PlanReport;
use chrono::{NaiveDateTime, TimeDelta};

/// A chunk laid out on the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub day_index: u32,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub hours: f64,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

/// Lays each day's chunks back-to-back from `day_start_hour`:00. Every day
/// with chunks must carry a date, and every finish time must stay within
/// chrono's calendar range.
pub fn build_timeline(report: &PlanReport, day_start_hour: u32) -> ExportResult<Vec<TimelineEntry>> {
    let mut entries = Vec::new();

    for bin in report.plan.active_days() {
        let date = bin.date.ok_or(ExportError::MissingDate(bin.day_index))?;
        let mut cursor = date
            .and_hms_opt(day_start_hour, 0, 0)
            .ok_or(ExportError::InvalidDayStart(day_start_hour))?;

        for chunk in &bin.chunks {
            let finish = TimeDelta::try_seconds((chunk.hours * 3600.0).round() as i64)
                .and_then(|length| cursor.checked_add_signed(length))
                .ok_or(ExportError::TimelineOverflow(bin.day_index))?;
            entries.push(TimelineEntry {
                day_index: bin.day_index,
                subject: chunk.subject.clone(),
                topic: chunk.topic.clone(),
                difficulty: chunk.difficulty,
                hours: chunk.hours,
                start: cursor,
                finish,
            });
            cursor = finish;
        }
    }

    Ok(entries)
}
