use crate::difficulty::{Difficulty, DifficultyClassifier};
use crate::item::WorkItem;
use tracing::debug;

/// Parses topic declarations, one subject per line:
///
/// ```text
/// Math: Algebra (hard), Calculus (medium)
/// Python: Basics, OOP (medium)
/// ```
///
/// Lines without a `:` are skipped. Topics without a parenthesized difficulty
/// are classified with `classifier` when one is given, otherwise they default
/// to medium. Declaration order is preserved.
pub fn parse_declarations(
    text: &str,
    classifier: Option<&dyn DifficultyClassifier>,
) -> Vec<WorkItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let Some((subject, topics)) = line.split_once(':') else {
            continue;
        };
        let subject = subject.trim();
        if subject.is_empty() {
            continue;
        }

        for entry in topics.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            if let Some(item) = parse_entry(subject, entry, classifier) {
                items.push(item);
            }
        }
    }

    debug!(items = items.len(), "parsed topic declarations");
    items
}

fn parse_entry(
    subject: &str,
    entry: &str,
    classifier: Option<&dyn DifficultyClassifier>,
) -> Option<WorkItem> {
    let (topic, difficulty) = match declared_difficulty(entry) {
        Some((topic, declared)) => (topic, Difficulty::normalize(declared)),
        None => {
            let topic = entry.split('(').next().unwrap_or(entry).trim();
            let difficulty = classifier
                .map(|c| c.classify(topic))
                .unwrap_or(Difficulty::Medium);
            (topic, difficulty)
        }
    };

    if topic.is_empty() {
        return None;
    }
    Some(WorkItem::new(subject, topic, difficulty))
}

/// Splits `Topic (difficulty)` into its name and the raw text between the
/// first `(` and the first `)` after it.
fn declared_difficulty(entry: &str) -> Option<(&str, &str)> {
    let open = entry.find('(')?;
    let close = entry[open + 1..].find(')')? + open + 1;
    Some((entry[..open].trim(), entry[open + 1..close].trim()))
}
