use crate::difficulty::Difficulty;
use crate::item::WorkItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Residue below which an item counts as fully scheduled.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingOrder {
    /// Topics in the order they were declared.
    Declared,
    /// Highest combined weight first; ties keep declaration order.
    #[default]
    HardestFirst,
}

impl SchedulingOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingOrder::Declared => "declared",
            SchedulingOrder::HardestFirst => "hardest_first",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "declared" | "declaration" => Some(SchedulingOrder::Declared),
            "hard" | "hardest_first" | "hard_first" => Some(SchedulingOrder::HardestFirst),
            _ => None,
        }
    }

    /// Indices into `items` in scheduling order.
    pub fn order(&self, items: &[WorkItem]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if *self == SchedulingOrder::HardestFirst {
            // sort_by is stable, so equal weights stay in declaration order
            indices.sort_by(|a, b| {
                items[*b]
                    .combined_weight()
                    .partial_cmp(&items[*a].combined_weight())
                    .unwrap_or(Ordering::Equal)
            });
        }
        indices
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// Fill days one after another.
    #[default]
    Sequential,
    /// First-fit repack by descending weight.
    Rebalanced,
}

/// A slice of one work item's hours placed on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedChunk {
    /// Position of the item in the report's item list.
    pub item_index: usize,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBin {
    pub day_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub capacity: f64,
    pub chunks: Vec<PlannedChunk>,
}

impl DayBin {
    pub fn new(day_index: u32, capacity: f64) -> Self {
        Self {
            day_index,
            date: None,
            capacity,
            chunks: Vec::new(),
        }
    }

    pub fn assigned_hours(&self) -> f64 {
        self.chunks.iter().map(|chunk| chunk.hours).sum()
    }

    pub fn free_capacity(&self) -> f64 {
        self.capacity - self.assigned_hours()
    }

    pub fn is_overloaded(&self) -> bool {
        self.assigned_hours() > self.capacity + EPSILON
    }

    /// Appends a chunk, merging it into the previous chunk when both belong
    /// to the same item.
    pub fn push(&mut self, item_index: usize, item: &WorkItem, hours: f64) {
        if hours <= 0.0 {
            return;
        }
        if let Some(last) = self.chunks.last_mut() {
            if last.item_index == item_index {
                last.hours += hours;
                return;
            }
        }
        self.chunks.push(PlannedChunk {
            item_index,
            subject: item.subject.clone(),
            topic: item.topic.clone(),
            difficulty: item.difficulty,
            hours,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadWarning {
    pub day_index: u32,
    pub assigned_hours: f64,
    pub capacity: f64,
}

impl OverloadWarning {
    pub fn excess_hours(&self) -> f64 {
        self.assigned_hours - self.capacity
    }
}

/// Day-by-day study plan. Always holds exactly `days` bins, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub daily_hours: f64,
    pub days: Vec<DayBin>,
}

impl Plan {
    pub fn empty(days: u32, daily_hours: f64) -> Self {
        Self {
            daily_hours,
            days: (1..=days).map(|day| DayBin::new(day, daily_hours)).collect(),
        }
    }

    pub fn day(&self, day_index: u32) -> Option<&DayBin> {
        day_index
            .checked_sub(1)
            .and_then(|idx| self.days.get(idx as usize))
    }

    /// Per-day assigned hours, index 0 is day 1.
    pub fn day_alloc(&self) -> Vec<f64> {
        self.days.iter().map(DayBin::assigned_hours).collect()
    }

    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(DayBin::assigned_hours).sum()
    }

    /// Hours placed for each item, indexed like the report's item list.
    pub fn hours_by_item(&self, item_count: usize) -> Vec<f64> {
        let mut hours = vec![0.0; item_count];
        for chunk in self.days.iter().flat_map(|day| day.chunks.iter()) {
            if let Some(slot) = hours.get_mut(chunk.item_index) {
                *slot += chunk.hours;
            }
        }
        hours
    }

    pub fn overloaded_days(&self) -> Vec<OverloadWarning> {
        self.days
            .iter()
            .filter(|day| day.is_overloaded())
            .map(|day| OverloadWarning {
                day_index: day.day_index,
                assigned_hours: day.assigned_hours(),
                capacity: day.capacity,
            })
            .collect()
    }

    /// Days that received at least one chunk.
    pub fn active_days(&self) -> impl Iterator<Item = &DayBin> {
        self.days.iter().filter(|day| !day.chunks.is_empty())
    }

    pub fn assign_dates(&mut self, dates: &[NaiveDate]) {
        for (day, date) in self.days.iter_mut().zip(dates) {
            day.date = Some(*date);
        }
    }
}

/// Greedy two-pointer fill: each item's hours run into the current day until
/// it is full, then spill into the next one. Once the last day is full, any
/// remaining hours are appended to it so nothing is dropped.
///
/// This is a heuristic. It does not search for an optimal packing.
pub fn pack_sequential(
    items: &[WorkItem],
    days: u32,
    daily_hours: f64,
    order: SchedulingOrder,
) -> Plan {
    let mut plan = Plan::empty(days.max(1), daily_hours);
    let last_day = plan.days.len() - 1;
    let mut current_day = 0usize;
    let mut capacity_left = daily_hours;

    for idx in order.order(items) {
        let item = &items[idx];
        let mut remaining = item.allocated_hours;

        while remaining > EPSILON {
            if capacity_left <= EPSILON {
                if current_day < last_day {
                    current_day += 1;
                    capacity_left = daily_hours;
                } else {
                    plan.days[current_day].push(idx, item, remaining);
                    break;
                }
            }
            let chunk = remaining.min(capacity_left);
            plan.days[current_day].push(idx, item, chunk);
            remaining -= chunk;
            capacity_left -= chunk;
        }
    }

    let overloaded = plan.overloaded_days();
    if overloaded.is_empty() {
        debug!(days = plan.days.len(), "sequential packing finished");
    } else {
        for warning in &overloaded {
            warn!(
                day = warning.day_index,
                assigned = warning.assigned_hours,
                capacity = warning.capacity,
                "day exceeds its study budget"
            );
        }
    }
    plan
}
