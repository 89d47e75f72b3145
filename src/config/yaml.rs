//! YAML settings loading and parsing

use crate::config::{DEFAULT_SETTINGS_FILE, Settings};
use crate::error::FlakeMasterError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load and parse YAML settings
///
/// An explicitly given file must exist. Without one, the default file in the
/// current directory is optional.
pub fn load_settings(system: &dyn System, path: Option<&str>) -> Result<Settings> {
    let path_obj = match path {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = system
                .current_dir()
                .map(|dir| dir.join(DEFAULT_SETTINGS_FILE))
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE));
            if !system.is_file(&default_path) {
                debug!("No settings file, using defaults");
                return Ok(Settings::default());
            }
            default_path
        }
    };

    if !system.exists(&path_obj) {
        return Err(FlakeMasterError::configuration(format!(
            "Settings file not found: {}",
            path_obj.display()
        ))
        .into());
    }

    let content = system
        .read_to_string(&path_obj)
        .with_context(|| format!("Failed to read settings file: {}", path_obj.display()))?;

    parse_settings(&content, &path_obj)
}

/// Parse settings YAML, validating it against the embedded schema first
pub fn parse_settings(content: &str, origin: &Path) -> Result<Settings> {
    let raw: Value = serde_yaml::from_str(content).map_err(|e| {
        FlakeMasterError::configuration(format!(
            "Failed to parse YAML settings in file: {}\n{e}",
            origin.display()
        ))
    })?;

    // An empty document means "all defaults"
    let raw = if raw.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        raw
    };

    crate::config::schema::validate_against_schema(&raw)
        .map_err(|e| FlakeMasterError::configuration(e.to_string()))?;

    let settings: Settings = serde_json::from_value(raw)
        .with_context(|| format!("Invalid settings in file: {}", origin.display()))?;
    debug!("Loaded settings from {}", origin.display());
    Ok(settings)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn defaults_without_file() {
        let system = MockSystem::new().with_current_dir("/work").unwrap();
        let settings = load_settings(&system, None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn default_file_is_picked_up() {
        let system = MockSystem::new()
            .with_current_dir("/work")
            .unwrap()
            .with_file("/work/flake_master.yaml", b"configFileName: tox.ini\n")
            .unwrap();
        let settings = load_settings(&system, None).unwrap();
        assert_eq!(settings.config_file_name, "tox.ini");
        assert_eq!(settings.config_section, "flake8");
    }

    #[test]
    fn empty_document_means_defaults() {
        let settings = parse_settings("", Path::new("empty.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
