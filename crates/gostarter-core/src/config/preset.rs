//! YAML presets that pre-fill wizard answers
//!
//! ```yaml
//! github_user_id: alice
//! project_name: demo1
//! framework: gin
//! database: sqlite
//! logging: false
//! ```
//!
//! Every field is optional; missing answers are prompted for.

use crate::project::{Database, Framework};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a preset file
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read preset '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preset '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Partially or fully specified answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub github_user_id: Option<String>,
    pub project_name: Option<String>,
    pub framework: Option<Framework>,
    pub database: Option<Database>,
    pub logging: Option<bool>,
}

impl Preset {
    /// Read a preset from a YAML file
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let preset = Self::from_yaml(&content).map_err(|source| PresetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?preset, "loaded preset");
        Ok(preset)
    }

    /// Parse preset YAML; an empty document is an empty preset
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win
    pub fn overridden_by(self, overrides: Preset) -> Preset {
        Preset {
            github_user_id: overrides.github_user_id.or(self.github_user_id),
            project_name: overrides.project_name.or(self.project_name),
            framework: overrides.framework.or(self.framework),
            database: overrides.database.or(self.database),
            logging: overrides.logging.or(self.logging),
        }
    }

    /// True when no question needs to be asked
    pub fn is_complete(&self) -> bool {
        self.github_user_id.is_some()
            && self.project_name.is_some()
            && self.framework.is_some()
            && self.database.is_some()
            && self.logging.is_some()
    }
}
