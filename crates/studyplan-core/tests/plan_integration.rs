//! Integration tests for plan generation.
//!
//! These tests drive the public API end to end: request parsing,
//! classification, packing and serialization.

use chrono::{DateTime, FixedOffset, Timelike};
use studyplan_core::{
    generate_plan, handle_request, Config, PlanError, PlanGenerator, PlanRequest, Priority,
};

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn test_exam_then_skill_plan() {
    let plan = generate_plan(
        &["Pass calculus exam", "Learn guitar"],
        Some(ts("2024-01-01T08:00:00Z")),
    )
    .unwrap();

    let rows: Vec<(String, String, String, Priority)> = plan
        .iter()
        .map(|t| {
            (
                t.title.clone(),
                t.start.format("%Y-%m-%d %H:%M").to_string(),
                t.end.format("%Y-%m-%d %H:%M").to_string(),
                t.priority,
            )
        })
        .collect();

    let expected = [
        ("Initial Review - Pass calculus exam", "2024-01-01 09:00", "2024-01-01 11:00", Priority::High),
        ("Detailed Study - Pass calculus exam", "2024-01-01 14:00", "2024-01-01 17:00", Priority::High),
        ("Practice Questions - Pass calculus exam", "2024-01-02 09:00", "2024-01-02 11:00", Priority::Medium),
        ("Mock Exam - Pass calculus exam", "2024-01-02 14:00", "2024-01-02 16:00", Priority::High),
        ("Review Weak Areas - Pass calculus exam", "2024-01-03 09:00", "2024-01-03 11:00", Priority::Medium),
        ("Fundamentals - Learn guitar", "2024-01-03 09:00", "2024-01-03 11:00", Priority::High),
        ("Practice Session 1 - Learn guitar", "2024-01-03 14:00", "2024-01-03 16:00", Priority::Medium),
        ("Advanced Concepts - Learn guitar", "2024-01-04 09:00", "2024-01-04 12:00", Priority::Medium),
        ("Practice Session 2 - Learn guitar", "2024-01-04 14:00", "2024-01-04 16:00", Priority::Medium),
        ("Skill Integration - Learn guitar", "2024-01-05 09:00", "2024-01-05 12:00", Priority::High),
    ];
    let expected: Vec<(String, String, String, Priority)> = expected
        .iter()
        .map(|(a, b, c, p)| (a.to_string(), b.to_string(), c.to_string(), *p))
        .collect();

    assert_eq!(rows, expected);
}

#[test]
fn test_request_roundtrip_through_json() {
    let request: PlanRequest = serde_json::from_str(
        r#"{"goals": ["Complete research project"], "startDate": "2024-01-01T08:00:00Z"}"#,
    )
    .unwrap();
    let response = handle_request(&PlanGenerator::new(), &request).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 5);
    for task in tasks {
        let obj = task.as_object().unwrap();
        for key in ["title", "description", "startDate", "endDate", "priority"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
    assert_eq!(tasks[2]["startDate"], "2024-01-02T09:00:00+00:00");
    assert_eq!(tasks[2]["endDate"], "2024-01-02T13:00:00+00:00");
}

#[test]
fn test_offset_is_respected() {
    // 08:15 in +09:00 is 23:15 UTC the day before; date and slot follow the local clock.
    let plan = generate_plan(&["Learn Rust"], Some(ts("2024-06-01T08:15:00+09:00"))).unwrap();
    assert_eq!(plan[0].start, ts("2024-06-01T09:00:00+09:00"));
    assert_eq!(plan[0].start.offset().local_minus_utc(), 9 * 3600);
}

#[test]
fn test_empty_goals_rejected_before_scheduling() {
    let empty: [&str; 0] = [];
    let err = generate_plan(&empty, None).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput(_)));
}

#[test]
fn test_config_driven_generator() {
    let mut config = Config::default();
    config.set("hours.morning_start", "8").unwrap();
    config.set("plan.stagger_days", "1").unwrap();

    let generator = PlanGenerator::with_config(config.scheduler_config());
    let plan = generator
        .generate(&["a", "b"], Some(ts("2024-01-01T07:00:00Z")))
        .unwrap();

    assert_eq!(plan[0].start.hour(), 8);
    assert_eq!(plan[5].start, ts("2024-01-02T08:00:00Z"));
}

#[test]
fn test_generator_is_shareable_across_threads() {
    let generator = std::sync::Arc::new(PlanGenerator::new());
    let start = Some(ts("2024-01-01T08:00:00Z"));
    let baseline = generator.generate(&["quiz"], start).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.generate(&["quiz"], start).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), baseline);
    }
}
