use crate::constants::HAZARD_BASE_URL;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run settings, read from the `[Settings]` table of the settings file.
///
/// ```toml
/// [Settings]
/// output_directory = "/home/me/Downloads/daily"
/// ```
///
/// The file is TOML. An INI-style `config.ini` carries over unchanged once its
/// values are quoted: `output_directory = /home/me/out` must become
/// `output_directory = "/home/me/out"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Root of the output tree; the weather folder is created beneath it
    pub output_directory: PathBuf,
    /// Folder the hazard map is published in
    #[serde(default = "default_hazard_base_url")]
    pub hazard_base_url: String,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(rename = "Settings")]
    settings: Settings,
}

impl Settings {
    /// Loads settings from a UTF-8 TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML, or lacks
    /// the `[Settings]` table or its `output_directory` key. Other keys and tables
    /// are ignored.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings = Self::from_toml_str(&contents)?;
        info!(
            file = %path.display(),
            output_directory = %settings.output_directory.display(),
            "Settings loaded"
        );
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let file: SettingsFile = toml::from_str(contents).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to parse settings (TOML, quote string values): {e}"
            ))
        })?;
        let settings = file.settings;

        if settings.output_directory.as_os_str().is_empty() {
            return Err(AppError::ConfigError(
                "output_directory must not be empty".into(),
            ));
        }

        Ok(settings)
    }
}

fn default_hazard_base_url() -> String {
    HAZARD_BASE_URL.to_string()
}
