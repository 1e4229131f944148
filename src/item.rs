use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIORITY_BOOST: f64 = 1.0;
pub const MIN_PRIORITY_BOOST: f64 = 0.5;
pub const MAX_PRIORITY_BOOST: f64 = 2.0;

/// One schedulable (subject, topic) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub base_weight: f64,
    #[serde(default = "default_priority_boost")]
    pub priority_boost: f64,
    #[serde(default)]
    pub allocated_hours: f64,
}

fn default_priority_boost() -> f64 {
    DEFAULT_PRIORITY_BOOST
}

impl WorkItem {
    pub fn new(subject: impl Into<String>, topic: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            subject: subject.into(),
            topic: topic.into(),
            difficulty,
            base_weight: difficulty.base_weight(),
            priority_boost: DEFAULT_PRIORITY_BOOST,
            allocated_hours: 0.0,
        }
    }

    pub fn combined_weight(&self) -> f64 {
        self.base_weight * self.priority_boost
    }

    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.subject, self.topic, self.difficulty)
    }
}

pub fn is_valid_priority_boost(boost: f64) -> bool {
    boost.is_finite() && (MIN_PRIORITY_BOOST..=MAX_PRIORITY_BOOST).contains(&boost)
}
