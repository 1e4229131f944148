use std::io;
use thiserror::Error;

pub mod file;
pub mod timeline;

pub use file::{
    render_text_plan, save_report_to_json, save_text_plan, save_timeline_to_csv,
    save_topics_to_csv, write_timeline_csv, write_topics_csv,
};
pub use timeline::{TimelineEntry, build_timeline};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("day {0} has no calendar date; plan with a start date to export a timeline")]
    MissingDate(u32),
    #[error("day start hour must be between 0 and 23 (got {0})")]
    InvalidDayStart(u32),
    #[error("day {0} runs past the last representable timestamp")]
    TimelineOverflow(u32),
}

pub type ExportResult<T> = Result<T, ExportError>;
