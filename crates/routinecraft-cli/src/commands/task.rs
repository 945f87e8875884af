use clap::Subcommand;

use routinecraft_core::{
    EnergyDemand, PreferredSlot, RoutineSession, Task, TaskCategory, TaskPatch,
};

use super::FileArg;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks in order
    List {
        #[command(flatten)]
        file: FileArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Append a task
    Add {
        #[command(flatten)]
        file: FileArg,
        /// Task title
        #[arg(long)]
        title: Option<String>,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Category (deep-work, shallow-work, admin, personal, learning)
        #[arg(long)]
        category: Option<TaskCategory>,
        /// Preferred slot (morning, afternoon, evening, flex)
        #[arg(long)]
        slot: Option<PreferredSlot>,
        /// Energy demand (high, medium, low)
        #[arg(long)]
        energy: Option<EnergyDemand>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update fields of a task
    Update {
        #[command(flatten)]
        file: FileArg,
        /// Task ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        category: Option<TaskCategory>,
        #[arg(long)]
        slot: Option<PreferredSlot>,
        #[arg(long)]
        energy: Option<EnergyDemand>,
        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        /// Remove the task's notes
        #[arg(long)]
        clear_notes: bool,
    },
    /// Remove a task
    Remove {
        #[command(flatten)]
        file: FileArg,
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::List { file, json } => {
            let session = RoutineSession::load(&file.file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&session.tasks)?);
            } else if session.tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in &session.tasks {
                    println!(
                        "{}  {}  {} min  {}  {}  {}",
                        task.id,
                        task.title,
                        task.duration,
                        task.category,
                        task.preferred_slot,
                        task.energy_demand
                    );
                }
            }
        }
        TaskAction::Add {
            file,
            title,
            duration,
            category,
            slot,
            energy,
            notes,
        } => {
            let session = RoutineSession::load(&file.file)?;
            let session = if title.is_none()
                && duration.is_none()
                && category.is_none()
                && slot.is_none()
                && energy.is_none()
                && notes.is_none()
            {
                session.with_new_task()
            } else {
                let blank = Task::new(title.unwrap_or_else(|| "New task".to_string()));
                let task = TaskPatch {
                    title: None,
                    duration,
                    category,
                    preferred_slot: slot,
                    energy_demand: energy,
                    notes: notes.map(Some),
                }
                .apply_to(&blank);
                session.with_task(task)
            };
            session.save(&file.file)?;
            if let Some(task) = session.tasks.last() {
                println!("Task created: {}", task.id);
            }
        }
        TaskAction::Update {
            file,
            id,
            title,
            duration,
            category,
            slot,
            energy,
            notes,
            clear_notes,
        } => {
            let session = RoutineSession::load(&file.file)?;
            if !session.contains_task(&id) {
                return Err(format!("task not found: {id}").into());
            }
            let patch = TaskPatch {
                title,
                duration,
                category,
                preferred_slot: slot,
                energy_demand: energy,
                notes: if clear_notes { Some(None) } else { notes.map(Some) },
            };
            session.with_task_update(&id, &patch).save(&file.file)?;
            println!("Task updated: {id}");
        }
        TaskAction::Remove { file, id } => {
            let session = RoutineSession::load(&file.file)?;
            if !session.contains_task(&id) {
                return Err(format!("task not found: {id}").into());
            }
            session.without_task(&id).save(&file.file)?;
            println!("Task removed: {id}");
        }
    }
    Ok(())
}
