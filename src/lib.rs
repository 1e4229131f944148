pub mod allocation;
pub mod calendar;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod export;
pub mod format;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod insights;
pub mod item;
pub mod parser;
pub mod planner;
pub mod rebalance;
pub mod schedule;
pub mod tables;

pub use calendar::{StudyCalendar, StudyCalendarConfig};
pub use config::PlannerConfig;
pub use difficulty::{Difficulty, DifficultyClassifier, KeywordClassifier};
pub use error::{PlannerError, PlannerResult};
pub use export::{ExportError, ExportResult};
pub use format::format_hours;
pub use insights::{Insights, SubjectSummary};
pub use item::WorkItem;
pub use parser::parse_declarations;
pub use planner::{PlanReport, PlanRequest, Planner};
pub use schedule::{
    DayBin, OverloadWarning, PackingStrategy, Plan, PlannedChunk, SchedulingOrder,
    pack_sequential,
};
pub use rebalance::rebalance;
