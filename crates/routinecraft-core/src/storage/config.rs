//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default intent values used to seed new routine sessions
//! - Output preferences for the command-line renderer
//!
//! Configuration is stored at `~/.config/routinecraft/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::clock::ClockTime;
use crate::error::{ConfigError, CoreError, Result};
use crate::routine::{EnergyProfile, Intent, NourishmentFocus};

/// Seed values for a new day's intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_wake_time")]
    pub wake_time: ClockTime,
    #[serde(default = "default_sleep_time")]
    pub sleep_time: ClockTime,
    #[serde(default = "default_focus")]
    pub focus: String,
    #[serde(default)]
    pub energy_profile: EnergyProfile,
    #[serde(default = "default_mindful_minutes")]
    pub mindful_minutes: u32,
    #[serde(default = "default_fitness_minutes")]
    pub fitness_minutes: u32,
    #[serde(default)]
    pub nourishment_focus: NourishmentFocus,
}

/// Renderer preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print plans as JSON instead of text.
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_true")]
    pub show_notes: bool,
    #[serde(default = "default_true")]
    pub show_habits: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/routinecraft/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_wake_time() -> ClockTime {
    ClockTime::new(7, 0).unwrap_or_default()
}
fn default_sleep_time() -> ClockTime {
    ClockTime::new(23, 0).unwrap_or_default()
}
fn default_focus() -> String {
    "Deep creative work with mindful energy".into()
}
fn default_mindful_minutes() -> u32 {
    10
}
fn default_fitness_minutes() -> u32 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake_time: default_wake_time(),
            sleep_time: default_sleep_time(),
            focus: default_focus(),
            energy_profile: EnergyProfile::default(),
            mindful_minutes: default_mindful_minutes(),
            fitness_minutes: default_fitness_minutes(),
            nourishment_focus: NourishmentFocus::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            show_notes: true,
            show_habits: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl DefaultsConfig {
    /// Intent for `date` built from these defaults.
    pub fn intent_for(&self, date: impl Into<String>) -> Intent {
        Intent {
            date: date.into(),
            wake_time: self.wake_time,
            sleep_time: self.sleep_time,
            focus: self.focus.clone(),
            energy_profile: self.energy_profile,
            mindful_minutes: self.mindful_minutes,
            fitness_minutes: self.fitness_minutes,
            nourishment_focus: self.nourishment_focus,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => {
                        let parsed = value.parse::<bool>().map_err(|_| {
                            ConfigError::ParseFailed(format!("cannot parse '{value}' as bool"))
                        })?;
                        serde_json::Value::Bool(parsed)
                    }
                    serde_json::Value::Number(_) => {
                        let parsed = value.parse::<u64>().map_err(|_| {
                            ConfigError::ParseFailed(format!("cannot parse '{value}' as number"))
                        })?;
                        serde_json::Value::Number(parsed.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(ConfigError::ParseFailed(format!(
                            "'{key}' is a section, set one of its keys instead"
                        )));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing a default file on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing a default file if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                CoreError::from(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without persisting it.
    ///
    /// The edited tree must still deserialize, so enumerations and clock
    /// times are validated here.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| {
            ConfigError::ParseFailed(format!("invalid value '{value}' for '{key}': {e}"))
        })?;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("falling back to default config: {e}");
                Self::default()
            }
        }
    }
}
