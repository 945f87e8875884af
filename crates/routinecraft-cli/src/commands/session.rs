//! Routine file lifecycle: create, reset, inspect and edit the intent.

use clap::Subcommand;
use std::path::PathBuf;

use routinecraft_core::{friendly_date, Config, RoutineSession};

use super::{FileArg, IntentArgs};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Create a routine file seeded from config defaults
    Init {
        /// Routine file to create
        #[arg(long, short)]
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Replace a routine file with a fresh seeded day
    Reset {
        #[command(flatten)]
        file: FileArg,
    },
    /// Show the intent and tasks of a routine file
    Show {
        #[command(flatten)]
        file: FileArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update intent fields in a routine file
    Intent {
        #[command(flatten)]
        file: FileArg,
        #[command(flatten)]
        intent: IntentArgs,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Init { file, force } => {
            if file.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    file.display()
                )
                .into());
            }
            let config = Config::load_or_default();
            let session = RoutineSession::seeded(&config.defaults);
            session.save(&file)?;
            println!("Routine file created: {}", file.display());
            println!("  Tasks: {}", session.tasks.len());
        }
        SessionAction::Reset { file } => {
            let config = Config::load_or_default();
            let session = RoutineSession::seeded(&config.defaults);
            session.save(&file.file)?;
            println!("Routine file reset: {}", file.file.display());
        }
        SessionAction::Show { file, json } => {
            let session = RoutineSession::load(&file.file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                let intent = &session.intent;
                println!("Date:        {}", friendly_date(&intent.date));
                println!("Wake/Sleep:  {} - {}", intent.wake_time, intent.sleep_time);
                println!("Focus:       {}", intent.focus);
                println!("Energy:      {}", intent.energy_profile);
                println!("Mindful:     {} min", intent.mindful_minutes);
                println!("Fitness:     {} min", intent.fitness_minutes);
                println!("Nourishment: {}", intent.nourishment_focus);
                println!("Tasks:       {}", session.tasks.len());
            }
        }
        SessionAction::Intent { file, intent } => {
            let patch = intent.to_patch();
            if patch.is_empty() {
                return Err("no intent fields given".into());
            }
            let session = RoutineSession::load(&file.file)?.with_intent(&patch);
            session.save(&file.file)?;
            println!("Intent updated");
        }
    }
    Ok(())
}
