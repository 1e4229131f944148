//! Summary statistics and advisory messages for a finished allocation.
//!
//! Everything here is advisory. The productivity score in particular is a
//! fixed heuristic, not a validated metric:
//!
//! ```text
//! raw   = daily_hours * sqrt(days) / (1 + total_weight / 4)
//! score = clamp(raw / 2.5 * 100, 0, 100)
//! ```

use crate::difficulty::Difficulty;
use crate::format::format_hours;
use crate::item::WorkItem;
use crate::schedule::OverloadWarning;
use serde::{Deserialize, Serialize};

pub const PRODUCTIVITY_WEIGHT_SCALE: f64 = 4.0;
pub const PRODUCTIVITY_NORMALIZER: f64 = 2.5;
pub const HARD_TOPIC_ADVISORY_THRESHOLD: usize = 3;
pub const BALANCE_THRESHOLD_HOURS: f64 = 1.5;
pub const LOW_PRODUCTIVITY_SCORE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub total_hours: f64,
    pub formatted_time: String,
    pub percent_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub heaviest_subject: Option<String>,
    pub hard_topic_count: usize,
    pub productivity_score: f64,
    pub balanced: bool,
    pub advisories: Vec<String>,
}

/// Subject totals in first-declared order.
pub fn subject_summaries(items: &[WorkItem]) -> Vec<SubjectSummary> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|(subject, _)| *subject == item.subject) {
            Some((_, hours)) => *hours += item.allocated_hours,
            None => totals.push((item.subject.clone(), item.allocated_hours)),
        }
    }

    let grand_total: f64 = totals.iter().map(|(_, hours)| hours).sum();
    totals
        .into_iter()
        .map(|(subject, total_hours)| SubjectSummary {
            subject,
            formatted_time: format_hours(total_hours),
            percent_of_total: if grand_total > 0.0 {
                total_hours / grand_total * 100.0
            } else {
                0.0
            },
            total_hours,
        })
        .collect()
}

pub fn productivity_score(daily_hours: f64, days: u32, total_weight: f64) -> f64 {
    let raw = daily_hours * f64::from(days).sqrt() / (1.0 + total_weight / PRODUCTIVITY_WEIGHT_SCALE);
    let score = raw / PRODUCTIVITY_NORMALIZER * 100.0;
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn estimate(
    items: &[WorkItem],
    subjects: &[SubjectSummary],
    warnings: &[OverloadWarning],
    days: u32,
    daily_hours: f64,
    total_weight: f64,
) -> Insights {
    let mut advisories = Vec::new();

    // max_by keeps the last of equal elements, so fold to keep the first.
    let heaviest = subjects.iter().fold(None::<&SubjectSummary>, |best, s| match best {
        Some(b) if b.total_hours >= s.total_hours => Some(b),
        _ => Some(s),
    });
    if let Some(subject) = heaviest {
        advisories.push(format!(
            "{} needs the most time: {} ({:.0}% of your plan).",
            subject.subject, subject.formatted_time, subject.percent_of_total
        ));
    }

    let hard_topic_count = items
        .iter()
        .filter(|item| item.difficulty == Difficulty::Hard)
        .count();
    if hard_topic_count >= HARD_TOPIC_ADVISORY_THRESHOLD {
        advisories.push(format!(
            "You have {hard_topic_count} hard topics. Tackle them early in the day and revisit them before the exam."
        ));
    }

    let (min_hours, max_hours) = subjects.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), s| (lo.min(s.total_hours), hi.max(s.total_hours)),
    );
    let balanced = subjects.is_empty() || max_hours - min_hours < BALANCE_THRESHOLD_HOURS;
    if balanced {
        advisories.push("Your study time is well balanced across subjects.".to_string());
    } else {
        advisories.push(format!(
            "Study time is uneven: subjects differ by {}. Consider boosting lighter subjects.",
            format_hours(max_hours - min_hours)
        ));
    }

    let productivity_score = productivity_score(daily_hours, days, total_weight);
    if productivity_score < LOW_PRODUCTIVITY_SCORE {
        advisories.push(format!(
            "Productivity score is {productivity_score:.0}/100: the workload is heavy for the time available."
        ));
    }

    for warning in warnings {
        advisories.push(format!(
            "Day {} is overloaded by {}. Try rebalancing or adding more days.",
            warning.day_index,
            format_hours(warning.excess_hours())
        ));
    }

    Insights {
        heaviest_subject: heaviest.map(|s| s.subject.clone()),
        hard_topic_count,
        productivity_score,
        balanced,
        advisories,
    }
}
