//! Micro-habit suggestions attached to each day slot.

use super::model::{DaySlot, EnergyProfile, Intent, NourishmentFocus};

/// Most micro-habits listed per segment.
pub const MAX_MICRO_HABITS: usize = 4;

fn base_habits(slot: DaySlot) -> [&'static str; 3] {
    match slot {
        DaySlot::Morning => [
            "Hydrate within 5 minutes of waking",
            "2-minute breathing reset",
            "Sunlight exposure or bright light therapy",
        ],
        DaySlot::Midday => [
            "Step away for 5 mindful breaths",
            "Prioritize protein-forward lunch",
            "Check posture + stretch cycle",
        ],
        DaySlot::Afternoon => [
            "90-minute ultradian focus sprint",
            "Micro walk after intense block",
            "Inbox sweep with strict timer",
        ],
        DaySlot::Evening => [
            "Creative or learning jam (45 min)",
            "Digital sunset 90 minutes pre-sleep",
            "Prep for tomorrow \u{2014} intentions + top 3",
        ],
        DaySlot::WindDown => [
            "Trigger sleepy cue (lighting + scent)",
            "Reflect on 3 micro-wins",
            "Static stretch + downshift playlist",
        ],
    }
}

/// Base habits for the slot followed by intent-driven extras, capped at
/// [`MAX_MICRO_HABITS`].
pub fn build_micro_habits(intent: &Intent, slot: DaySlot) -> Vec<String> {
    let mindful_boost = (intent.mindful_minutes >= 10)
        .then_some("Drop into a mindful minute before transitions");
    let fitness_boost = (intent.fitness_minutes >= 20)
        .then_some("Layer movement snack (squats/push-ups) after long sits");
    let nourishment_quick = (intent.nourishment_focus == NourishmentFocus::Quick)
        .then_some("Batch prepare a ready-to-heat meal pack");
    let light_ladder = (slot == DaySlot::Morning
        && intent.energy_profile == EnergyProfile::NightOwl)
        .then_some("Gradual light ladder + low-stim music to ramp up");

    base_habits(slot)
        .into_iter()
        .chain([mindful_boost, fitness_boost, nourishment_quick, light_ladder].into_iter().flatten())
        .take(MAX_MICRO_HABITS)
        .map(str::to_string)
        .collect()
}
