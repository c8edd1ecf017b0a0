use crate::state::SearchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Persisted form state. Every key is optional on disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Folder the search starts from
    #[serde(default = "default_folder_path")]
    pub folder_path: String,
    /// Descend into subfolders
    #[serde(default)]
    pub search_subfolders: bool,
    /// Treat the term as a regular expression
    #[serde(default)]
    pub use_regex: bool,
}

fn default_folder_path() -> String {
    ".".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            folder_path: default_folder_path(),
            search_subfolders: false,
            use_regex: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl Settings {
    pub fn settings_path() -> PathBuf {
        PathBuf::from(SETTINGS_FILE)
    }

    /// Load settings from `path`, or return defaults if it doesn't exist or
    /// can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Settings::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => return settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings file {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings file {}: {}", path.display(), e);
            }
        }
        tracing::warn!("Using default settings");
        Settings::default()
    }

    /// Overwrite `path` with the current settings.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn folder(&self) -> PathBuf {
        PathBuf::from(&self.folder_path)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            search_subfolders: self.search_subfolders,
            use_regex: self.use_regex,
        }
    }
}
