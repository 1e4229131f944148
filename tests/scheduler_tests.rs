use study_planner::allocation::{allocate_hours, apply_priority_boosts, total_allocated};
use study_planner::{
    Difficulty, KeywordClassifier, SchedulingOrder, WorkItem, pack_sequential,
    parse_declarations,
};
use std::collections::BTreeMap;

const EPS: f64 = 1e-6;

fn allocated(items: &[(&str, &str, Difficulty)], total_hours: f64) -> Vec<WorkItem> {
    let mut items: Vec<WorkItem> = items
        .iter()
        .map(|(subject, topic, difficulty)| WorkItem::new(*subject, *topic, *difficulty))
        .collect();
    allocate_hours(&mut items, total_hours);
    items
}

#[test]
fn allocation_conserves_total_hours() {
    let items = allocated(
        &[
            ("Math", "Algebra", Difficulty::Hard),
            ("Math", "Sets", Difficulty::Easy),
            ("Art", "Color", Difficulty::Medium),
            ("Art", "Perspective", Difficulty::Hard),
        ],
        17.5,
    );
    assert!((total_allocated(&items) - 17.5).abs() < EPS);
    assert!(items.iter().all(|i| i.allocated_hours >= 0.0));
}

#[test]
fn allocation_is_proportional_to_combined_weight() {
    let mut items = vec![
        WorkItem::new("Math", "Algebra", Difficulty::Medium),
        WorkItem::new("Art", "Color", Difficulty::Medium),
    ];
    let boosts = BTreeMap::from([("Math".to_string(), 2.0)]);
    apply_priority_boosts(&mut items, &boosts);
    let total_weight = allocate_hours(&mut items, 6.0);

    assert!((total_weight - 6.0).abs() < EPS);
    assert!((items[0].allocated_hours - 4.0).abs() < EPS);
    assert!((items[1].allocated_hours - 2.0).abs() < EPS);
}

#[test]
fn zero_total_hours_allocates_zero_everywhere() {
    let items = allocated(&[("Math", "Algebra", Difficulty::Hard)], 0.0);
    assert_eq!(items[0].allocated_hours, 0.0);
}

#[test]
fn packing_conserves_hours_and_respects_capacity() {
    let items = allocated(
        &[
            ("Math", "Algebra", Difficulty::Hard),
            ("Math", "Sets", Difficulty::Easy),
            ("Art", "Color", Difficulty::Medium),
            ("Art", "Perspective", Difficulty::Hard),
        ],
        12.0,
    );
    let plan = pack_sequential(&items, 4, 3.0, SchedulingOrder::HardestFirst);

    assert_eq!(plan.days.len(), 4);
    assert!((plan.total_hours() - 12.0).abs() < EPS);
    for day in &plan.days {
        assert!(day.assigned_hours() <= 3.0 + EPS, "day {} overfilled", day.day_index);
    }
    assert!(plan.overloaded_days().is_empty());

    let per_item = plan.hours_by_item(items.len());
    for (item, hours) in items.iter().zip(per_item) {
        assert!((item.allocated_hours - hours).abs() < EPS);
    }
}

#[test]
fn insufficient_capacity_never_drops_hours() {
    // 10 hours of work against 2 days x 2 hours
    let items = allocated(
        &[
            ("Math", "Algebra", Difficulty::Hard),
            ("Art", "Color", Difficulty::Easy),
        ],
        10.0,
    );
    let plan = pack_sequential(&items, 2, 2.0, SchedulingOrder::Declared);

    assert!((plan.total_hours() - 10.0).abs() < EPS);
    assert!((plan.day(1).unwrap().assigned_hours() - 2.0).abs() < EPS);
    let warnings = plan.overloaded_days();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].day_index, 2);
    assert!((warnings[0].assigned_hours - 8.0).abs() < EPS);
}

#[test]
fn declared_order_keeps_input_sequence() {
    let items = allocated(
        &[
            ("Art", "Color", Difficulty::Easy),
            ("Math", "Algebra", Difficulty::Hard),
        ],
        4.0,
    );
    let plan = pack_sequential(&items, 2, 2.0, SchedulingOrder::Declared);
    let day1 = plan.day(1).unwrap();
    assert_eq!(day1.chunks[0].topic, "Color");
    assert_eq!(day1.chunks[1].topic, "Algebra");
}

#[test]
fn end_to_end_two_day_scenario() {
    let classifier = KeywordClassifier::default();
    let mut items = parse_declarations(
        "Math: Algebra (hard), Calculus (easy)\nPython: Basics (easy)",
        Some(&classifier),
    );
    let total_weight = allocate_hours(&mut items, 6.0);
    assert!((total_weight - 5.0).abs() < EPS);
    assert!((items[0].allocated_hours - 3.6).abs() < EPS);
    assert!((items[1].allocated_hours - 1.2).abs() < EPS);
    assert!((items[2].allocated_hours - 1.2).abs() < EPS);

    let plan = pack_sequential(&items, 2, 3.0, SchedulingOrder::HardestFirst);
    let day1 = plan.day(1).unwrap();
    assert_eq!(day1.chunks.len(), 1);
    assert_eq!(day1.chunks[0].topic, "Algebra");
    assert!((day1.assigned_hours() - 3.0).abs() < EPS);

    let day2 = plan.day(2).unwrap();
    let topics: Vec<&str> = day2.chunks.iter().map(|c| c.topic.as_str()).collect();
    assert_eq!(topics, vec!["Algebra", "Calculus", "Basics"]);
    assert!((day2.chunks[0].hours - 0.6).abs() < EPS);
    assert!((day2.assigned_hours() - 3.0).abs() < EPS);
    assert!(plan.overloaded_days().is_empty());
}
