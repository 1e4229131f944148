use crate::item::WorkItem;
use crate::schedule::{EPSILON, Plan, SchedulingOrder};
use tracing::{debug, warn};

/// Repacks items by descending combined weight, first-fit across days.
///
/// Each pass scans days `1..=days` in order and drops a chunk of
/// `min(free, remaining)` into every day that still has room. When a full
/// pass places nothing, the remainder goes onto the last day. The result has
/// the same shape as [`crate::schedule::pack_sequential`], so overload checks
/// can be re-run on it.
pub fn rebalance(items: &[WorkItem], days: u32, daily_hours: f64) -> Plan {
    let mut plan = Plan::empty(days.max(1), daily_hours);
    let last_day = plan.days.len() - 1;

    for idx in SchedulingOrder::HardestFirst.order(items) {
        let item = &items[idx];
        let mut remaining = item.allocated_hours;

        while remaining > EPSILON {
            let mut placed = false;
            for bin in plan.days.iter_mut() {
                let space = bin.free_capacity();
                if space <= EPSILON {
                    continue;
                }
                let chunk = space.min(remaining);
                bin.push(idx, item, chunk);
                remaining -= chunk;
                placed = true;
                if remaining <= EPSILON {
                    break;
                }
            }

            if !placed {
                plan.days[last_day].push(idx, item, remaining);
                warn!(
                    topic = %item.topic,
                    hours = remaining,
                    "no free capacity left, appending to last day"
                );
                break;
            }
        }
    }

    debug!(
        days = plan.days.len(),
        overloaded = plan.overloaded_days().len(),
        "rebalanced plan"
    );
    plan
}
