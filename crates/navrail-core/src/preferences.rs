//! User preferences persistence for navrail
//!
//! Stores the preferred color scheme in `<config_dir>/navrail/preferences.json`.
//! This is the default consumed by the CLI and demo server; a mounted sidebar
//! never writes its own state back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::theme::ColorScheme;

/// navrail-specific user preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred color scheme (dark / light)
    pub color_scheme: ColorScheme,
}

impl Preferences {
    /// Load preferences from `<dir>/preferences.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("preferences.json");
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| {
                tracing::debug!("Ignoring malformed preferences at {}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences to `<dir>/preferences.json`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).context("Failed to create preferences directory")?;
        let path = dir.join("preferences.json");
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))
    }

    /// Platform default preferences directory.
    pub fn default_dir() -> Result<PathBuf, CoreError> {
        dirs::config_dir()
            .map(|dir| dir.join("navrail"))
            .ok_or(CoreError::ConfigDirUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            color_scheme: ColorScheme::Light,
        };
        prefs.save(dir.path()).unwrap();

        let loaded = Preferences::load(dir.path());
        assert_eq!(loaded.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Preferences::load(dir.path());
        assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_load_malformed_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("preferences.json"), "{not json").unwrap();
        let loaded = Preferences::load(dir.path());
        assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper");
        Preferences::default().save(&nested).unwrap();
        assert!(nested.join("preferences.json").exists());
    }
}
