//! Configuration module for websift
//!
//! Handles loading and validating settings from YAML files and environment variables.
//! Settings are built once at startup and handed to the components that need them.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load settings from an explicit path, the usual locations, or defaults,
/// then apply `WEBSIFT_*` overrides and validate.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match locate(explicit) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("WEBSIFT_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("websift/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("websift-{}.yml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "server:\n  port: 6060\nsearch:\n  engine: duckduckgo\n").unwrap();

        let settings = load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 6060);
        assert_eq!(settings.search.engine, "duckduckgo");
        assert_eq!(settings.pipeline.result_count, 3);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("websift-does-not-exist.yml");
        assert!(load(Some(path.as_path())).is_err());
    }
}
