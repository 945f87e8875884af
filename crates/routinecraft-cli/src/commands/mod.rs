pub mod config;
pub mod export;
pub mod plan;
pub mod session;
pub mod task;

use clap::Args;
use std::path::{Path, PathBuf};

use routinecraft_core::{
    ClockTime, Config, EnergyProfile, IntentPatch, NourishmentFocus, RoutineSession,
};

/// Intent overrides shared by commands that read or edit a day.
#[derive(Args, Debug, Default)]
pub struct IntentArgs {
    /// Date of the day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Wake time (HH:MM)
    #[arg(long)]
    pub wake: Option<ClockTime>,
    /// Sleep time (HH:MM); at or before the wake time means after midnight
    #[arg(long)]
    pub sleep: Option<ClockTime>,
    /// Focus of the day
    #[arg(long)]
    pub focus: Option<String>,
    /// Energy profile (early-bird, balanced, night-owl)
    #[arg(long)]
    pub profile: Option<EnergyProfile>,
    /// Minutes of mindfulness planned
    #[arg(long)]
    pub mindful: Option<u32>,
    /// Minutes of exercise planned
    #[arg(long)]
    pub fitness: Option<u32>,
    /// Nourishment focus (quick, balanced, gourmet)
    #[arg(long)]
    pub nourishment: Option<NourishmentFocus>,
}

impl IntentArgs {
    pub fn to_patch(&self) -> IntentPatch {
        IntentPatch {
            date: self.date.clone(),
            wake_time: self.wake,
            sleep_time: self.sleep,
            focus: self.focus.clone(),
            energy_profile: self.profile,
            mindful_minutes: self.mindful,
            fitness_minutes: self.fitness,
            nourishment_focus: self.nourishment,
        }
    }
}

/// Routine file location shared by file-backed commands.
#[derive(Args, Debug)]
pub struct FileArg {
    /// Routine file (JSON with "intent" and "tasks")
    #[arg(long, short)]
    pub file: PathBuf,
}

/// Load the routine file if given, otherwise a seeded session from config.
pub fn load_or_seed(
    file: Option<&Path>,
    config: &Config,
) -> Result<RoutineSession, Box<dyn std::error::Error>> {
    match file {
        Some(path) => RoutineSession::load(path)
            .map_err(|e| format!("cannot read routine file {}: {e}", path.display()).into()),
        None => Ok(RoutineSession::seeded(&config.defaults)),
    }
}
