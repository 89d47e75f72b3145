//! Settings management module
//!
//! Handles YAML settings parsing, JSON schema validation, and CLI overrides

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings file looked up in the current directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "flake_master.yaml";

/// Where presets come from and which project files they are applied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Base URL under which named presets live
    pub presets_repo_url: String,

    /// Local directory searched for `.cfg` preset files
    pub presets_dir: PathBuf,

    /// Applied-preset record in the project root
    pub preset_file_name: String,

    /// Requirements files tried in order
    pub requirements_file_names: Vec<String>,

    /// Requirements file created when none of the above exist
    pub default_requirements_file_name: String,

    /// Ini file receiving the flake8 options
    pub config_file_name: String,

    /// Section of `config_file_name` receiving the flake8 options
    pub config_section: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            presets_repo_url: "https://raw.githubusercontent.com/Melevir/flake_master".to_owned(),
            presets_dir: PathBuf::from("presets"),
            preset_file_name: ".flake_master".to_owned(),
            requirements_file_names: vec![
                "requirements_dev.txt".to_owned(),
                "requirements.txt".to_owned(),
            ],
            default_requirements_file_name: "requirements_dev.txt".to_owned(),
            config_file_name: "setup.cfg".to_owned(),
            config_section: "flake8".to_owned(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    ///
    /// With `path` unset, `flake_master.yaml` in the current directory is
    /// used when present and built-in defaults otherwise.
    pub fn load(system: &dyn System, path: Option<&str>) -> anyhow::Result<Self> {
        yaml::load_settings(system, path)
    }

    /// Validate settings values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_settings(self)
    }
}
