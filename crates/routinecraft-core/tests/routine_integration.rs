//! Integration tests for the routine planner through the public API.

use routinecraft_core::routine::{slot_windows, MAX_TASKS_PER_SLOT};
use routinecraft_core::{
    craft_routine, export_summary, friendly_date, DaySlot, DaySpan, EnergyDemand, EnergyProfile,
    Intent, IntentPatch, NourishmentFocus, PreferredSlot, RoutineSession, Task, TaskCategory,
};

fn intent(profile: EnergyProfile, wake: &str, sleep: &str, mindful_minutes: u32) -> Intent {
    Intent {
        date: "2024-03-10".to_string(),
        wake_time: wake.parse().unwrap(),
        sleep_time: sleep.parse().unwrap(),
        focus: "Deep creative work with mindful energy".to_string(),
        energy_profile: profile,
        mindful_minutes,
        fitness_minutes: 30,
        nourishment_focus: NourishmentFocus::Balanced,
    }
}

fn task(id: &str, category: TaskCategory, preferred: PreferredSlot) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        duration: 45,
        category,
        preferred_slot: preferred,
        energy_demand: EnergyDemand::Medium,
        notes: None,
    }
}

#[test]
fn test_full_day_plan_shape() {
    let i = intent(EnergyProfile::Balanced, "07:00", "23:00", 10);
    let tasks = vec![
        task("a", TaskCategory::DeepWork, PreferredSlot::Morning),
        task("b", TaskCategory::Admin, PreferredSlot::Afternoon),
        task("c", TaskCategory::Personal, PreferredSlot::Evening),
    ];
    let plan = craft_routine(&i, &tasks);

    let slots: Vec<DaySlot> = plan.segments.iter().map(|s| s.slot).collect();
    assert_eq!(slots, DaySlot::SEQUENCE);

    let times: Vec<(&str, &str)> = plan
        .segments
        .iter()
        .map(|s| (s.start.as_str(), s.end.as_str()))
        .collect();
    assert_eq!(
        times,
        [
            ("07:00", "10:50"),
            ("10:50", "14:40"),
            ("14:40", "17:52"),
            ("17:52", "20:26"),
            ("20:26", "23:00"),
        ]
    );

    assert_eq!(plan.segments[0].tasks[0].id, "a");
    assert_eq!(plan.segments[1].tasks[0].id, "b");
    assert_eq!(plan.segments[3].tasks[0].id, "c");
    assert!(plan.segments[2].tasks.is_empty());
    assert!(plan.segments[4].tasks.is_empty());
    assert!(plan.suggestions.is_empty());
    assert_eq!(plan.soundtrack.len(), 5);
}

#[test]
fn test_wraparound_span() {
    let i = intent(EnergyProfile::Balanced, "07:00", "02:00", 10);
    let span = DaySpan::from_clocks(i.wake_time, i.sleep_time);
    assert_eq!(span.end, 1560);
    assert_eq!(span.total_minutes(), 1140);

    let plan = craft_routine(&i, &[]);
    assert_eq!(plan.segments[0].start, "07:00");
    // 1140 / 750 = 1.52: 274, 274, 228, 182, 182 -> ends exactly at 26:00
    assert_eq!(plan.segments[4].end, "02:00");
    assert_eq!(plan.segments[4].start, "22:58");
}

#[test]
fn test_rounding_drift_is_not_corrected() {
    // 1000 / 780 scales night-owl slots to 192.3, 192.3, 230.8, 192.3, 192.3
    let i = intent(EnergyProfile::NightOwl, "06:00", "22:40", 10);
    let span = DaySpan::from_clocks(i.wake_time, i.sleep_time);
    let windows = slot_windows(i.energy_profile, span);
    let durations: Vec<i64> = windows.iter().map(|w| w.duration()).collect();
    assert_eq!(durations, [192, 192, 231, 192, 192]);
    assert_eq!(windows[4].end - span.end, -1);
}

#[test]
fn test_suggestion_ordering_is_capped_at_four() {
    let tasks = vec![
        task("d1", TaskCategory::DeepWork, PreferredSlot::Morning),
        task("d2", TaskCategory::DeepWork, PreferredSlot::Morning),
        task("d3", TaskCategory::DeepWork, PreferredSlot::Flex),
    ];
    let plan = craft_routine(&intent(EnergyProfile::EarlyBird, "06:00", "22:00", 5), &tasks);
    let titles: Vec<&str> = plan.suggestions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Defend a maker window",
            "Infuse a personal pulse",
            "Anchor the morning win",
            "Micro mindfulness primer",
        ]
    );
}

#[test]
fn test_spill_marks_flex_and_keeps_other_fields() {
    let mut tasks: Vec<Task> = (1..=5)
        .map(|n| task(&format!("m{n}"), TaskCategory::Learning, PreferredSlot::Morning))
        .collect();
    tasks[4].notes = Some("last in".to_string());
    let original = tasks.clone();

    let plan = craft_routine(&intent(EnergyProfile::Balanced, "07:00", "23:00", 10), &tasks);

    assert_eq!(plan.segments[0].tasks, original[..4]);
    let moved = &plan.segments[1].tasks[0];
    assert_eq!(moved.preferred_slot, PreferredSlot::Flex);
    assert_eq!(moved.id, "m5");
    assert_eq!(moved.title, original[4].title);
    assert_eq!(moved.duration, original[4].duration);
    assert_eq!(moved.category, original[4].category);
    assert_eq!(moved.energy_demand, original[4].energy_demand);
    assert_eq!(moved.notes.as_deref(), Some("last in"));

    assert_eq!(tasks, original);
}

#[test]
fn test_known_evening_over_capacity() {
    let tasks: Vec<Task> = (0..10)
        .map(|n| task(&format!("e{n}"), TaskCategory::Admin, PreferredSlot::Evening))
        .collect();
    let plan = craft_routine(&intent(EnergyProfile::Balanced, "07:00", "23:00", 10), &tasks);

    let evening = &plan.segments[DaySlot::Evening.index()].tasks;
    let wind_down = &plan.segments[DaySlot::WindDown.index()].tasks;
    assert_eq!(wind_down.len(), MAX_TASKS_PER_SLOT);
    assert_eq!(evening.len(), 6);
    assert_eq!(evening.len() + wind_down.len(), tasks.len());
}

#[test]
fn test_session_plan_and_export() {
    let session = RoutineSession::new(
        intent(EnergyProfile::Balanced, "07:00", "23:00", 10),
        vec![task("x", TaskCategory::Personal, PreferredSlot::Flex)],
    );
    let later = session.with_intent(&IntentPatch {
        wake_time: Some("08:00".parse().unwrap()),
        ..IntentPatch::default()
    });

    let summary = export_summary(&later.plan());
    assert_eq!(summary.lines().next(), Some("Launch with clarity \u{b7} 08:00 - 11:36"));
    assert_eq!(session.plan().segments[0].end, "10:50");
    assert_eq!(friendly_date(&later.intent.date), "Sunday, March 10th");
}
