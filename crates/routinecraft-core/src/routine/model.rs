//! Routine data model: intent, tasks and the generated plan.
//!
//! Field names serialize in camelCase and enumerations in kebab-case so that
//! routine files stay compatible with the JSON shape used by front ends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clock::ClockTime;
use crate::error::ValidationError;

/// Declares a closed, kebab-case string enumeration with `as_str`,
/// `Display`, `FromStr` and an `ALL` listing.
macro_rules! kebab_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $text => Ok($name::$variant), )+
                    other => Err(ValidationError::InvalidValue {
                        field: $field.to_string(),
                        message: format!(
                            "'{}' is not one of: {}",
                            other,
                            [$($text),+].join(", ")
                        ),
                    }),
                }
            }
        }
    };
}

kebab_enum! {
    /// When in the day the user's energy naturally peaks.
    EnergyProfile, "energy_profile" {
        EarlyBird => "early-bird",
        Balanced => "balanced",
        NightOwl => "night-owl",
    }
}

kebab_enum! {
    /// How much effort the user wants to put into meals.
    NourishmentFocus, "nourishment_focus" {
        Quick => "quick",
        Balanced => "balanced",
        Gourmet => "gourmet",
    }
}

kebab_enum! {
    /// Kind of work a task represents.
    TaskCategory, "category" {
        DeepWork => "deep-work",
        ShallowWork => "shallow-work",
        Admin => "admin",
        Personal => "personal",
        Learning => "learning",
    }
}

kebab_enum! {
    /// Part of the day a task would like to land in.
    PreferredSlot, "preferred_slot" {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        /// Any slot; also the marker for tasks moved by rebalancing
        Flex => "flex",
    }
}

kebab_enum! {
    /// How demanding a task is.
    EnergyDemand, "energy_demand" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

kebab_enum! {
    /// One of the five fixed day-parts a plan is split into.
    DaySlot, "slot" {
        Morning => "morning",
        Midday => "midday",
        Afternoon => "afternoon",
        Evening => "evening",
        WindDown => "wind-down",
    }
}

kebab_enum! {
    /// Theme of a coaching suggestion.
    SuggestionCategory, "category" {
        Mindset => "mindset",
        Energy => "energy",
        Focus => "focus",
        Wellness => "wellness",
    }
}

impl Default for EnergyProfile {
    fn default() -> Self {
        EnergyProfile::Balanced
    }
}

impl Default for NourishmentFocus {
    fn default() -> Self {
        NourishmentFocus::Balanced
    }
}

/// The user's description of the day to plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Calendar date, usually `YYYY-MM-DD`; free text is tolerated.
    pub date: String,
    pub wake_time: ClockTime,
    pub sleep_time: ClockTime,
    pub focus: String,
    pub energy_profile: EnergyProfile,
    pub mindful_minutes: u32,
    pub fitness_minutes: u32,
    pub nourishment_focus: NourishmentFocus,
}

/// A unit of work to place into the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Minutes
    pub duration: u32,
    pub category: TaskCategory,
    pub preferred_slot: PreferredSlot,
    pub energy_demand: EnergyDemand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Task {
    /// Create a blank 30 minute deep-work task with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            duration: 30,
            category: TaskCategory::DeepWork,
            preferred_slot: PreferredSlot::Flex,
            energy_demand: EnergyDemand::Medium,
            notes: None,
        }
    }
}

/// One day-part of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub slot: DaySlot,
    /// "HH:MM", folded into the 24-hour clock
    pub start: String,
    pub end: String,
    pub anchor: String,
    pub headline: String,
    pub micro_habits: Vec<String>,
    pub tasks: Vec<Task>,
}

/// A coaching hint derived from the intent and task mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub category: SuggestionCategory,
}

/// Music paired with a day-part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundtrackPairing {
    pub slot: DaySlot,
    pub playlist: String,
    pub vibe: String,
}

/// The complete output of the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub overview: String,
    pub segments: Vec<Segment>,
    pub suggestions: Vec<Suggestion>,
    pub soundtrack: Vec<SoundtrackPairing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&EnergyProfile::NightOwl).unwrap(), "\"night-owl\"");
        assert_eq!(serde_json::to_string(&DaySlot::WindDown).unwrap(), "\"wind-down\"");
        assert_eq!(
            serde_json::from_str::<TaskCategory>("\"shallow-work\"").unwrap(),
            TaskCategory::ShallowWork
        );
    }

    #[test]
    fn enum_from_str_is_case_insensitive_and_reports_choices() {
        assert_eq!("Early-Bird".parse::<EnergyProfile>().unwrap(), EnergyProfile::EarlyBird);
        let err = "owl".parse::<EnergyProfile>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'energy_profile': 'owl' is not one of: early-bird, balanced, night-owl"
        );
    }

    #[test]
    fn task_deserializes_from_camel_case_without_notes() {
        let json = r#"{
            "id": "t1",
            "title": "Write draft",
            "duration": 60,
            "category": "deep-work",
            "preferredSlot": "morning",
            "energyDemand": "high"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.preferred_slot, PreferredSlot::Morning);
        assert_eq!(task.notes, None);

        let back = serde_json::to_value(&task).unwrap();
        assert!(back.get("notes").is_none());
        assert_eq!(back["energyDemand"], "high");
    }

    #[test]
    fn intent_rejects_bad_clock() {
        let json = r#"{
            "date": "2024-03-10",
            "wakeTime": "7am",
            "sleepTime": "23:00",
            "focus": "calm",
            "energyProfile": "balanced",
            "mindfulMinutes": 10,
            "fitnessMinutes": 30,
            "nourishmentFocus": "balanced"
        }"#;
        assert!(serde_json::from_str::<Intent>(json).is_err());
    }

    #[test]
    fn new_task_has_unique_id_and_flex_defaults() {
        let a = Task::new("New task");
        let b = Task::new("New task");
        assert_ne!(a.id, b.id);
        assert_eq!(a.duration, 30);
        assert_eq!(a.category, TaskCategory::DeepWork);
        assert_eq!(a.preferred_slot, PreferredSlot::Flex);
        assert_eq!(a.energy_demand, EnergyDemand::Medium);
    }
}
