//! Routine planner: turns an intent and a task list into a [`Plan`].
//!
//! The planner is a pure function of its inputs. Slot lengths come from the
//! energy profile's base durations scaled to the waking span; each slot is
//! then filled with its bucketed tasks, micro-habits and soundtrack.

use tracing::trace;

use super::assign::assign_tasks_to_slots;
use super::habits::build_micro_habits;
use super::model::{DaySlot, EnergyProfile, Intent, Plan, Segment, SoundtrackPairing, Task};
use super::suggestions::craft_suggestions;
use crate::clock::{minutes_to_time, DaySpan};

/// Absolute minute range of one slot, measured from 00:00 of the wake day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub slot: DaySlot,
    pub start: i64,
    pub end: i64,
}

impl SlotWindow {
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ratio between the waking span and the profile's base day length.
pub fn scaling_factor(profile: EnergyProfile, span: DaySpan) -> f64 {
    let configured: i64 = profile.base_durations().iter().sum();
    if configured > 0 {
        span.total_minutes() as f64 / configured as f64
    } else {
        1.0
    }
}

/// Lay the five slots end to end from the wake time.
///
/// Each slot's length is rounded independently, so the last slot may end a
/// few minutes off the sleep time.
pub fn slot_windows(profile: EnergyProfile, span: DaySpan) -> [SlotWindow; 5] {
    let factor = scaling_factor(profile, span);
    let base = profile.base_durations();
    let mut cursor = span.start;

    DaySlot::SEQUENCE.map(|slot| {
        let duration = (base[slot.index()] as f64 * factor).round() as i64;
        let window = SlotWindow {
            slot,
            start: cursor,
            end: cursor + duration,
        };
        cursor = window.end;
        window
    })
}

/// Summary sentence block shown above the plan.
pub fn build_overview(intent: &Intent) -> String {
    [
        format!("You're primed for a {} day.", intent.focus.to_lowercase()),
        format!(
            "Wake at {}, close out around {}.",
            intent.wake_time, intent.sleep_time
        ),
        format!(
            "Energy rhythm: {}; mindful focus {} min; movement target {} min.",
            intent.energy_profile.as_str().replacen('-', " ", 1),
            intent.mindful_minutes,
            intent.fitness_minutes
        ),
    ]
    .join(" ")
}

/// Build the full routine plan for a day.
pub fn craft_routine(intent: &Intent, tasks: &[Task]) -> Plan {
    let span = DaySpan::from_clocks(intent.wake_time, intent.sleep_time);
    trace!(
        start = span.start,
        end = span.end,
        total = span.total_minutes(),
        profile = %intent.energy_profile,
        "computed day span"
    );

    let windows = slot_windows(intent.energy_profile, span);
    let buckets = assign_tasks_to_slots(intent, tasks);

    let segments: Vec<Segment> = windows
        .into_iter()
        .zip(buckets.into_slots())
        .map(|(window, (slot, slot_tasks))| {
            debug_assert_eq!(window.slot, slot);
            let intention = slot.intention();
            Segment {
                slot,
                start: minutes_to_time(window.start),
                end: minutes_to_time(window.end),
                anchor: intention.anchor.to_string(),
                headline: intention.headline.to_string(),
                micro_habits: build_micro_habits(intent, slot),
                tasks: slot_tasks,
            }
        })
        .collect();

    let soundtrack = segments
        .iter()
        .map(|segment| {
            let pairing = segment.slot.soundtrack();
            SoundtrackPairing {
                slot: segment.slot,
                playlist: pairing.playlist.to_string(),
                vibe: pairing.vibe.to_string(),
            }
        })
        .collect();

    Plan {
        overview: build_overview(intent),
        segments,
        suggestions: craft_suggestions(intent, tasks),
        soundtrack,
    }
}

/// One-line label for a segment: `"{headline} · {start} - {end}"`.
pub fn format_segment_label(segment: &Segment) -> String {
    format!("{} \u{b7} {} - {}", segment.headline, segment.start, segment.end)
}

/// Plain-text summary of a plan, one segment label per line.
pub fn export_summary(plan: &Plan) -> String {
    plan.segments
        .iter()
        .map(format_segment_label)
        .collect::<Vec<_>>()
        .join("\n")
}
