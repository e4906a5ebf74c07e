use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classification::domain::thresholds::{ClassificationThresholds, ThresholdsError};
use crate::detection::domain::face_presence::DEFAULT_PRESENCE_FRAMES;
use crate::makeup::domain::makeup_configuration::{MakeupConfigError, MakeupConfiguration};

const APP_DIR: &str = "facemap";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialise settings: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Makeup(#[from] MakeupConfigError),
    #[error(transparent)]
    Thresholds(#[from] ThresholdsError),
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Everything tunable about a session, persisted as JSON.
///
/// Missing fields take their defaults, so a file may override only
/// the thresholds it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub thresholds: ClassificationThresholds,
    pub presence_frames: usize,
    pub makeup: MakeupConfiguration,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            thresholds: ClassificationThresholds::default(),
            presence_frames: DEFAULT_PRESENCE_FRAMES,
            makeup: MakeupConfiguration::default(),
        }
    }
}

impl AnalysisSettings {
    /// Platform config location, e.g. `~/.config/facemap/settings.json`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Reads the platform config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file: {e}");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.thresholds.validate()?;
        settings.makeup.validate()?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::config_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
