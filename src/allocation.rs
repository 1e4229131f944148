use crate::item::WorkItem;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Attaches per-subject priority boosts. Every topic of a subject shares the
/// subject's boost; subjects without an entry keep their current boost.
pub fn apply_priority_boosts(items: &mut [WorkItem], boosts: &BTreeMap<String, f64>) {
    for (subject, boost) in boosts {
        let mut matched = false;
        for item in items.iter_mut().filter(|item| &item.subject == subject) {
            item.priority_boost = *boost;
            matched = true;
        }
        if !matched {
            warn!(subject = %subject, "priority boost given for a subject with no topics");
        }
    }
}

pub fn total_weight(items: &[WorkItem]) -> f64 {
    items.iter().map(WorkItem::combined_weight).sum()
}

/// Splits `total_hours` across `items` in proportion to each item's combined
/// weight and returns the total weight used.
///
/// A zero total weight (no items) leaves every allocation at zero.
pub fn allocate_hours(items: &mut [WorkItem], total_hours: f64) -> f64 {
    let total_weight = total_weight(items);
    if total_weight <= 0.0 {
        for item in items.iter_mut() {
            item.allocated_hours = 0.0;
        }
        debug!(items = items.len(), "zero total weight, no hours allocated");
        return 0.0;
    }

    for item in items.iter_mut() {
        item.allocated_hours = item.combined_weight() / total_weight * total_hours;
    }
    debug!(
        items = items.len(),
        total_weight,
        total_hours,
        "allocated study hours"
    );
    total_weight
}

pub fn total_allocated(items: &[WorkItem]) -> f64 {
    items.iter().map(|item| item.allocated_hours).sum()
}
