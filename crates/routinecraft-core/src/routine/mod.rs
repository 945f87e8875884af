//! Routine planning.
//!
//! [`craft_routine`] splits a day into five fixed slots sized by the user's
//! energy profile, buckets tasks into them, and decorates each slot with
//! micro-habits and a soundtrack. Coaching suggestions and an overview
//! sentence are derived alongside.

mod assign;
mod habits;
mod model;
mod planner;
mod slots;
mod suggestions;

pub use assign::{assign_tasks_to_slots, candidate_slot, fallback_slot, SlotBuckets, MAX_TASKS_PER_SLOT};
pub use habits::{build_micro_habits, MAX_MICRO_HABITS};
pub use model::{
    DaySlot, EnergyDemand, EnergyProfile, Intent, NourishmentFocus, Plan, PreferredSlot, Segment,
    SoundtrackPairing, Suggestion, SuggestionCategory, Task, TaskCategory,
};
pub use planner::{
    build_overview, craft_routine, export_summary, format_segment_label, scaling_factor,
    slot_windows, SlotWindow,
};
pub use slots::{SlotIntention, SlotSoundtrack};
pub use suggestions::{craft_suggestions, MAX_SUGGESTIONS};
