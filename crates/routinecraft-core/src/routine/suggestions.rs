//! Coaching suggestions derived from the intent and task mix.

use super::model::{EnergyProfile, Intent, Suggestion, SuggestionCategory, Task, TaskCategory};

/// Most suggestions returned for a plan.
pub const MAX_SUGGESTIONS: usize = 4;

fn suggestion(title: &str, description: &str, category: SuggestionCategory) -> Suggestion {
    Suggestion {
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}

/// Evaluate each coaching rule in order and keep the first
/// [`MAX_SUGGESTIONS`] that apply.
pub fn craft_suggestions(intent: &Intent, tasks: &[Task]) -> Vec<Suggestion> {
    let count = |category: TaskCategory| tasks.iter().filter(|t| t.category == category).count();
    let deep_work = count(TaskCategory::DeepWork);
    let personal = count(TaskCategory::Personal);

    let mut suggestions = Vec::new();

    if deep_work >= 2 {
        suggestions.push(suggestion(
            "Defend a maker window",
            "Batch your high-energy tasks into two 90-minute focus sprints and stack breaks just after each block.",
            SuggestionCategory::Focus,
        ));
    }

    if personal == 0 {
        suggestions.push(suggestion(
            "Infuse a personal pulse",
            "Even a 20-minute personal micro-project recharges creativity. Drop it into the evening slot to protect momentum.",
            SuggestionCategory::Wellness,
        ));
    }

    match intent.energy_profile {
        EnergyProfile::EarlyBird => suggestions.push(suggestion(
            "Anchor the morning win",
            "Open the day with your highest-leverage task before the world wakes; push admin into the afternoon valley.",
            SuggestionCategory::Mindset,
        )),
        EnergyProfile::NightOwl => suggestions.push(suggestion(
            "Light up the late flow",
            "Reserve creative build time post-sunset while shielding mornings for low-friction prep and recovery.",
            SuggestionCategory::Energy,
        )),
        EnergyProfile::Balanced => {}
    }

    if intent.mindful_minutes < 10 {
        suggestions.push(suggestion(
            "Micro mindfulness primer",
            "Stack three 60-second mindful resets at wake, midday, and pre-sleep; tether to existing habits so they stick.",
            SuggestionCategory::Mindset,
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
