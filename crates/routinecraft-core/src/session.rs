//! Routine session state.
//!
//! A [`RoutineSession`] holds the intent and task list a front end edits.
//! It is a plain value owned by the caller: every setter returns a new
//! snapshot and leaves the receiver untouched, so a renderer can keep the
//! previous snapshot (and its plan) until it swaps in the new one.
//!
//! Sessions serialize to the routine file format:
//!
//! ```json
//! { "intent": { "date": "2024-03-10", "wakeTime": "07:00", ... }, "tasks": [ ... ] }
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::clock::ClockTime;
use crate::error::Result;
use crate::routine::{
    craft_routine, EnergyDemand, EnergyProfile, Intent, NourishmentFocus, Plan, PreferredSlot,
    Task, TaskCategory,
};
use crate::storage::DefaultsConfig;

/// Partial update for an [`Intent`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentPatch {
    pub date: Option<String>,
    pub wake_time: Option<ClockTime>,
    pub sleep_time: Option<ClockTime>,
    pub focus: Option<String>,
    pub energy_profile: Option<EnergyProfile>,
    pub mindful_minutes: Option<u32>,
    pub fitness_minutes: Option<u32>,
    pub nourishment_focus: Option<NourishmentFocus>,
}

impl IntentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of `intent` with the patched fields replaced.
    pub fn apply_to(&self, intent: &Intent) -> Intent {
        Intent {
            date: self.date.clone().unwrap_or_else(|| intent.date.clone()),
            wake_time: self.wake_time.unwrap_or(intent.wake_time),
            sleep_time: self.sleep_time.unwrap_or(intent.sleep_time),
            focus: self.focus.clone().unwrap_or_else(|| intent.focus.clone()),
            energy_profile: self.energy_profile.unwrap_or(intent.energy_profile),
            mindful_minutes: self.mindful_minutes.unwrap_or(intent.mindful_minutes),
            fitness_minutes: self.fitness_minutes.unwrap_or(intent.fitness_minutes),
            nourishment_focus: self.nourishment_focus.unwrap_or(intent.nourishment_focus),
        }
    }
}

/// Partial update for a [`Task`]; `None` keeps the current value.
///
/// `notes: Some(None)` clears the notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub duration: Option<u32>,
    pub category: Option<TaskCategory>,
    pub preferred_slot: Option<PreferredSlot>,
    pub energy_demand: Option<EnergyDemand>,
    pub notes: Option<Option<String>>,
}

impl TaskPatch {
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            duration: self.duration.unwrap_or(task.duration),
            category: self.category.unwrap_or(task.category),
            preferred_slot: self.preferred_slot.unwrap_or(task.preferred_slot),
            energy_demand: self.energy_demand.unwrap_or(task.energy_demand),
            notes: self.notes.clone().unwrap_or_else(|| task.notes.clone()),
        }
    }
}

/// Intent plus ordered task list for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSession {
    pub intent: Intent,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Today's date as `YYYY-MM-DD` in local time.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Starter tasks for a fresh session, each with a new id.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            title: "Deep dive: priority project".into(),
            duration: 90,
            category: TaskCategory::DeepWork,
            preferred_slot: PreferredSlot::Morning,
            energy_demand: EnergyDemand::High,
            notes: Some("Ship first draft of proposal".into()),
            ..Task::new("")
        },
        Task {
            title: "Inbox + async updates".into(),
            duration: 45,
            category: TaskCategory::Admin,
            preferred_slot: PreferredSlot::Afternoon,
            energy_demand: EnergyDemand::Low,
            notes: None,
            ..Task::new("")
        },
        Task {
            title: "Movement session".into(),
            duration: 40,
            category: TaskCategory::Personal,
            preferred_slot: PreferredSlot::Evening,
            energy_demand: EnergyDemand::Medium,
            notes: Some("Hybrid strength + mobility".into()),
            ..Task::new("")
        },
    ]
}

impl RoutineSession {
    pub fn new(intent: Intent, tasks: Vec<Task>) -> Self {
        Self { intent, tasks }
    }

    /// Session for today seeded from configured defaults and starter tasks.
    pub fn seeded(defaults: &DefaultsConfig) -> Self {
        Self {
            intent: defaults.intent_for(today()),
            tasks: seed_tasks(),
        }
    }

    /// Snapshot with intent fields replaced by the patch.
    pub fn with_intent(&self, patch: &IntentPatch) -> Self {
        Self {
            intent: patch.apply_to(&self.intent),
            tasks: self.tasks.clone(),
        }
    }

    /// Snapshot with a blank "New task" appended.
    pub fn with_new_task(&self) -> Self {
        self.with_task(Task::new("New task"))
    }

    /// Snapshot with `task` appended.
    pub fn with_task(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self {
            intent: self.intent.clone(),
            tasks,
        }
    }

    /// Snapshot with the task `id` patched. Unknown ids change nothing.
    pub fn with_task_update(&self, id: &str, patch: &TaskPatch) -> Self {
        if !self.contains_task(id) {
            debug!(task_id = id, "update for unknown task ignored");
        }
        Self {
            intent: self.intent.clone(),
            tasks: self
                .tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        patch.apply_to(task)
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        }
    }

    /// Snapshot without the task `id`.
    pub fn without_task(&self, id: &str) -> Self {
        Self {
            intent: self.intent.clone(),
            tasks: self.tasks.iter().filter(|t| t.id != id).cloned().collect(),
        }
    }

    pub fn contains_task(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Craft the plan for this session.
    pub fn plan(&self) -> Plan {
        craft_routine(&self.intent, &self.tasks)
    }

    /// Read a routine file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write this session as a pretty-printed routine file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
