mod config;

pub use config::{Config, DefaultsConfig, OutputConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the directory holding configuration.
///
/// `ROUTINECRAFT_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/routinecraft[-dev]/`, with the `-dev` suffix selected by
/// `ROUTINECRAFT_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("ROUTINECRAFT_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("ROUTINECRAFT_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("routinecraft-dev")
            } else {
                base_dir.join("routinecraft")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
