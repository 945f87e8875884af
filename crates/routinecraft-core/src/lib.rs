//! # Routinecraft Core Library
//!
//! This library provides the core logic for Routinecraft, a day planner that
//! turns a description of the day (wake and sleep times, energy profile,
//! focus) and a task list into a routine plan. It follows a CLI-first
//! philosophy: front ends are thin layers over the same core library.
//!
//! ## Architecture
//!
//! - **Planner**: A pure function from intent and tasks to a [`Plan`] of five
//!   fixed day segments, with coaching suggestions and a soundtrack
//! - **Session**: An explicit state value holding the intent and tasks a front
//!   end edits, with setters returning new snapshots
//! - **Storage**: TOML-based configuration of intent defaults and output
//!
//! ## Key Components
//!
//! - [`craft_routine`]: Routine planner entry point
//! - [`RoutineSession`]: Editable intent + task state
//! - [`friendly_date`]: Long-form date labels
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod date;
pub mod error;
pub mod routine;
pub mod session;
pub mod storage;

pub use clock::{minutes_to_time, time_to_minutes, ClockTime, DaySpan};
pub use date::friendly_date;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use routine::{
    craft_routine, export_summary, format_segment_label, DaySlot, EnergyDemand, EnergyProfile,
    Intent, NourishmentFocus, Plan, PreferredSlot, Segment, SoundtrackPairing, Suggestion,
    SuggestionCategory, Task, TaskCategory,
};
pub use session::{IntentPatch, RoutineSession, TaskPatch};
pub use storage::{Config, DefaultsConfig, OutputConfig};
