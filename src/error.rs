use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("no study topics found; add lines like 'Math: Algebra (hard), Calculus (medium)'")]
    EmptyInput,
    #[error("days must be between 1 and {max} (got {0})", max = crate::planner::MAX_DAYS)]
    InvalidDays(u32),
    #[error("daily hours must be between 0 and {max} (got {0})", max = crate::planner::MAX_DAILY_HOURS)]
    InvalidDailyHours(f64),
    #[error("priority boost for '{subject}' must be between 0.5 and 2.0 (got {boost})")]
    InvalidBoost { subject: String, boost: f64 },
    #[error("a {days}-day plan starting {start} runs past the last representable date")]
    DateOutOfRange { start: NaiveDate, days: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
