use crate::calendar::{StudyCalendar, StudyCalendarConfig};
use crate::difficulty::KeywordClassifier;
use crate::error::{PlannerError, PlannerResult};
use crate::schedule::SchedulingOrder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "STUDY_PLANNER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub scheduling_order: SchedulingOrder,
    pub auto_detect: bool,
    /// Word count at which an unrecognized topic is classified as medium.
    pub medium_word_threshold: usize,
    /// Hour of day (0-23) at which the timeline export starts each day.
    pub day_start_hour: u32,
    pub calendar: StudyCalendarConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            scheduling_order: SchedulingOrder::HardestFirst,
            auto_detect: true,
            medium_word_threshold: KeywordClassifier::DEFAULT_MEDIUM_WORD_THRESHOLD,
            day_start_hour: 9,
            calendar: StudyCalendarConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `STUDY_PLANNER_CONFIG`, or defaults when unset.
    pub fn from_env() -> PlannerResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if self.day_start_hour > 23 {
            return Err(PlannerError::Config(format!(
                "day_start_hour must be between 0 and 23 (got {})",
                self.day_start_hour
            )));
        }
        if self.medium_word_threshold == 0 {
            return Err(PlannerError::Config(
                "medium_word_threshold must be at least 1".into(),
            ));
        }
        StudyCalendar::from_config(&self.calendar)?;
        Ok(())
    }

    pub fn study_calendar(&self) -> PlannerResult<StudyCalendar> {
        StudyCalendar::from_config(&self.calendar)
    }

    pub fn classifier(&self) -> KeywordClassifier {
        KeywordClassifier::new(self.medium_word_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{ "scheduling_order": "declared", "day_start_hour": 7 }"#)
                .unwrap();
        assert_eq!(config.scheduling_order, SchedulingOrder::Declared);
        assert_eq!(config.day_start_hour, 7);
        assert!(config.auto_detect);
        assert_eq!(config.medium_word_threshold, 3);
        assert_eq!(config.calendar.study_days().len(), 7);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = PlannerConfig::default();
        config.day_start_hour = 24;
        assert!(matches!(config.validate(), Err(PlannerError::Config(_))));

        let mut config = PlannerConfig::default();
        config.medium_word_threshold = 0;
        assert!(config.validate().is_err());

        let config: PlannerConfig =
            serde_json::from_str(r#"{ "calendar": { "study_days": [] } }"#).unwrap();
        assert!(config.validate().is_err());
    }
}
