//! Map shell configuration (window extents, corpus path). Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent map settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarmapConfig {
    /// Window width in map units.
    #[serde(default = "default_extent")]
    pub universe_width: i64,
    /// Window height in map units.
    #[serde(default = "default_extent")]
    pub universe_height: i64,
    /// Units per sector; extents must divide evenly by this.
    #[serde(default = "default_sector_size")]
    pub sector_size: i64,
    /// Top-left sector coordinate of the window.
    #[serde(default)]
    pub origin_x: i64,
    #[serde(default)]
    pub origin_y: i64,
    /// Syllable corpus for the name generator; falls back to the built-in
    /// corpus when missing.
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
}

fn default_extent() -> i64 {
    480
}
fn default_sector_size() -> i64 {
    8
}
fn default_corpus_path() -> PathBuf {
    PathBuf::from("planets.txt")
}

impl Default for StarmapConfig {
    fn default() -> Self {
        Self {
            universe_width: default_extent(),
            universe_height: default_extent(),
            sector_size: default_sector_size(),
            origin_x: 0,
            origin_y: 0,
            corpus_path: default_corpus_path(),
        }
    }
}

impl StarmapConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns defaults.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.ron")
}
