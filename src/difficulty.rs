use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier of a study topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parses a declared difficulty, coercing anything unrecognized to `Medium`.
    pub fn normalize(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Difficulty::Medium)
    }

    pub fn base_weight(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 2.0,
            Difficulty::Hard => 3.0,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers a difficulty tier for a topic that was declared without one.
///
/// Implementations must be deterministic: the same topic name always yields
/// the same tier.
pub trait DifficultyClassifier: Send + Sync {
    fn classify(&self, topic: &str) -> Difficulty;
}

const HARD_KEYWORDS: &[&str] = &[
    "advanced",
    "calculus",
    "differential",
    "integral",
    "algorithm",
    "machine learning",
    "deep learning",
    "neural",
    "quantum",
    "thermodynamics",
    "electromagnet",
    "organic chemistry",
    "compiler",
    "cryptograph",
    "proof",
    "recursion",
    "concurrency",
];

const EASY_KEYWORDS: &[&str] = &[
    "intro",
    "basic",
    "fundamental",
    "overview",
    "revision",
    "review",
    "vocabulary",
    "definition",
    "summary",
    "history of",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "algebra",
    "geometry",
    "trigonometry",
    "probability",
    "statistics",
    "object oriented",
    "oop",
    "data structure",
    "mechanics",
    "grammar",
    "database",
    "networking",
];

/// Keyword heuristic. Not a trained model: it matches case-insensitive
/// substrings against fixed lists (hard, then easy, then medium) and falls
/// back on the topic's word count.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    medium_word_threshold: usize,
}

impl KeywordClassifier {
    pub const DEFAULT_MEDIUM_WORD_THRESHOLD: usize = 3;

    pub fn new(medium_word_threshold: usize) -> Self {
        Self {
            medium_word_threshold,
        }
    }

    fn matches_any(topic: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| topic.contains(keyword))
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MEDIUM_WORD_THRESHOLD)
    }
}

impl DifficultyClassifier for KeywordClassifier {
    fn classify(&self, topic: &str) -> Difficulty {
        let lowered = topic.to_lowercase();
        if Self::matches_any(&lowered, HARD_KEYWORDS) {
            return Difficulty::Hard;
        }
        if Self::matches_any(&lowered, EASY_KEYWORDS) {
            return Difficulty::Easy;
        }
        if Self::matches_any(&lowered, MEDIUM_KEYWORDS) {
            return Difficulty::Medium;
        }
        if lowered.split_whitespace().count() >= self.medium_word_threshold {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}
