//! Config command: inspect and edit the routine defaults and output toggles.

use clap::Subcommand;
use routinecraft_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value, e.g. `defaults.wake_time` or `output.show_habits`
    Get { key: String },
    /// Change one value; clocks and profiles are checked before saving
    Set { key: String, value: String },
    /// Print every key as `section.key = value`
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the built-in defaults (07:00 - 23:00, balanced)
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for line in flatten(&serde_json::to_value(&config)?, "") {
                    println!("{line}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Routine defaults restored");
        }
    }
    Ok(())
}

fn flatten(value: &serde_json::Value, prefix: &str) -> Vec<String> {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .flat_map(|(k, v)| {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(v, &key)
            })
            .collect(),
        serde_json::Value::String(s) => vec![format!("{prefix} = {s}")],
        other => vec![format!("{prefix} = {other}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_lists_dot_path_keys() {
        let value = serde_json::to_value(Config::default()).unwrap();
        let lines = flatten(&value, "");
        assert!(lines.contains(&"defaults.wake_time = 07:00".to_string()));
        assert!(lines.contains(&"defaults.energy_profile = balanced".to_string()));
        assert!(lines.contains(&"output.show_habits = true".to_string()));
        assert!(lines.contains(&"defaults.mindful_minutes = 10".to_string()));
    }
}
