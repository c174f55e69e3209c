//! YAML scenario files
//!
//! ```yaml
//! name: Park (combined)
//! discount_rate: 0.12
//! value_convention: present_value
//! master_key: concession_for_everything
//! activities:
//!   - name: Kayak - Propio
//!     decision_key: kayak_own
//!     horizon_years: 2
//!     regime: self_managed
//!     outcomes:
//!       - { label: Success, probability: 0.25, value: 18000 }
//!       - { label: Failure, probability: 0.75, value: -9000 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use evplan_core::config::{ScenarioConfig, presets};
use evplan_core::{Scenario, ScenarioError};
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

/// Error types for scenario loading
#[derive(Debug, thiserror::Error)]
pub enum ScenarioFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize scenario: {0}")]
    Serialize(String),

    #[error("invalid scenario in {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: ScenarioError,
    },

    #[error("unknown preset {name:?} (available: {available})")]
    UnknownPreset { name: String, available: String },
}

/// On-disk shape of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioFile {
    pub scenario: ScenarioConfig,
}

impl ScenarioFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioFileError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| ScenarioFileError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the scenario as YAML
    pub fn save(&self, path: &Path) -> Result<(), ScenarioFileError> {
        let yaml = self
            .to_yaml()
            .map_err(|e| ScenarioFileError::Serialize(e.to_string()))?;
        atomic_write(path, &yaml).map_err(|source| ScenarioFileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate into a [`Scenario`]; `origin` names the source in errors
    pub fn into_scenario(self, origin: &str) -> Result<Scenario, ScenarioFileError> {
        self.scenario
            .into_scenario()
            .map_err(|source| ScenarioFileError::Invalid {
                origin: origin.to_string(),
                source,
            })
    }
}

impl From<&Scenario> for ScenarioFile {
    fn from(scenario: &Scenario) -> Self {
        Self {
            scenario: ScenarioConfig::from(scenario),
        }
    }
}

/// Where a scenario comes from on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioSource {
    File(PathBuf),
    Preset(String),
}

impl ScenarioSource {
    /// Human-readable origin used in logs and errors
    pub fn describe(&self) -> String {
        match self {
            ScenarioSource::File(path) => path.display().to_string(),
            ScenarioSource::Preset(name) => format!("preset {name}"),
        }
    }

    /// Load and validate the scenario
    pub fn load(&self) -> Result<Scenario, ScenarioFileError> {
        match self {
            ScenarioSource::File(path) => ScenarioFile::load(path)?.into_scenario(&self.describe()),
            ScenarioSource::Preset(name) => match presets::by_name(name) {
                Some(built) => built.map_err(|source| ScenarioFileError::Invalid {
                    origin: self.describe(),
                    source,
                }),
                None => Err(ScenarioFileError::UnknownPreset {
                    name: name.clone(),
                    available: presets::PRESET_NAMES.join(", "),
                }),
            },
        }
    }
}
