//! Plan command: craft a routine and render it as text or JSON.

use clap::Args;
use std::path::PathBuf;

use routinecraft_core::{friendly_date, format_segment_label, Config, OutputConfig, Plan};

use super::{load_or_seed, IntentArgs};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Routine file to plan; defaults to a seeded day from config
    #[arg(long, short)]
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub intent: IntentArgs,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let session = load_or_seed(args.file.as_deref(), &config)?;
    let patch = args.intent.to_patch();
    let session = if patch.is_empty() {
        session
    } else {
        session.with_intent(&patch)
    };

    let plan = session.plan();
    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&friendly_date(&session.intent.date), &plan, &config.output));
    }
    Ok(())
}

fn render_plan(date_label: &str, plan: &Plan, output: &OutputConfig) -> String {
    let mut out = format!("Routine for {date_label}\n{}\n", plan.overview);

    for segment in &plan.segments {
        out.push_str(&format!(
            "\n{}  [{}]\n  {}\n",
            format_segment_label(segment),
            segment.slot,
            segment.anchor
        ));

        if output.show_habits {
            out.push_str("  Habits:\n");
            for habit in &segment.micro_habits {
                out.push_str(&format!("    - {habit}\n"));
            }
        }

        if segment.tasks.is_empty() {
            out.push_str("  Tasks: (open)\n");
            continue;
        }
        out.push_str("  Tasks:\n");
        for task in &segment.tasks {
            out.push_str(&format!(
                "    - {} ({} min, {}, {} energy)\n",
                task.title, task.duration, task.category, task.energy_demand
            ));
            if output.show_notes {
                if let Some(notes) = task.notes.as_deref().filter(|n| !n.is_empty()) {
                    out.push_str(&format!("        {notes}\n"));
                }
            }
        }
    }

    out.push_str("\nSuggestions:\n");
    if plan.suggestions.is_empty() {
        out.push_str("  (none yet; add more varied tasks for richer coaching)\n");
    } else {
        for suggestion in &plan.suggestions {
            out.push_str(&format!(
                "  [{}] {}: {}\n",
                suggestion.category, suggestion.title, suggestion.description
            ));
        }
    }

    out.push_str("\nSoundtrack:\n");
    for pairing in &plan.soundtrack {
        out.push_str(&format!(
            "  {:<10} {} ({})\n",
            pairing.slot.as_str(),
            pairing.playlist,
            pairing.vibe
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use routinecraft_core::{DefaultsConfig, EnergyProfile, IntentPatch, RoutineSession};

    fn plan() -> Plan {
        let mut session = RoutineSession::seeded(&DefaultsConfig::default());
        session.intent.date = "2024-03-10".into();
        session.plan()
    }

    #[test]
    fn render_includes_segments_notes_and_soundtrack() {
        let text = render_plan("Sunday, March 10th", &plan(), &OutputConfig::default());
        assert!(text.starts_with("Routine for Sunday, March 10th\nYou're primed for a"));
        assert!(text.contains("Launch with clarity \u{b7} 07:00 - 10:50  [morning]"));
        assert!(text.contains("    - Deep dive: priority project (90 min, deep-work, high energy)"));
        assert!(text.contains("        Ship first draft of proposal"));
        assert!(text.contains("  Tasks: (open)"));
        assert!(text.contains("  wind-down  Nightfall Unwind (calming ambient textures)"));
    }

    #[test]
    fn render_respects_output_toggles() {
        let output = OutputConfig {
            show_notes: false,
            show_habits: false,
            ..OutputConfig::default()
        };
        let text = render_plan("x", &plan(), &output);
        assert!(!text.contains("Habits:"));
        assert!(!text.contains("Ship first draft of proposal"));
    }

    #[test]
    fn quiet_day_shows_suggestion_placeholder() {
        let text = render_plan("x", &plan(), &OutputConfig::default());
        assert!(text.contains("Suggestions:\n  (none yet; add more varied tasks for richer coaching)\n"));
    }

    #[test]
    fn suggestions_render_with_category() {
        let session = RoutineSession::seeded(&DefaultsConfig::default()).with_intent(
            &IntentPatch {
                energy_profile: Some(EnergyProfile::NightOwl),
                ..Default::default()
            },
        );
        let text = render_plan("x", &session.plan(), &OutputConfig::default());
        assert!(text.contains("  [energy] Light up the late flow: "));
        assert!(!text.contains("(none yet"));
    }

    #[test]
    fn task_without_notes_renders_single_line() {
        let text = render_plan("x", &plan(), &OutputConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        let idx = lines
            .iter()
            .position(|l| l.contains("Inbox + async updates"))
            .unwrap();
        assert!(!lines[idx + 1].starts_with("        "));
    }
}
