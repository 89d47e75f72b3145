//! Applying a preset to a project directory

use crate::config::Settings;
use crate::error::FlakeMasterError;
use crate::ini::apply_section;
use crate::preset::Preset;
use crate::requirements::merge;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Whether a project file was created from scratch or updated in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Updated,
}

/// Files touched while applying a preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplySummary {
    pub requirements_file: PathBuf,
    pub requirements_action: FileAction,
    pub config_file: PathBuf,
    pub config_action: FileAction,
    pub record_file: PathBuf,
}

/// Apply `preset` to the project at `project_dir`
///
/// Pins go into the requirements file, options into the flake8 config
/// section, and the preset record is rewritten. The first failing step
/// aborts with its own error.
///
/// # Errors
///
/// Returns a `FlakeMasterError::Filesystem` if any project file cannot be
/// read or written, or `FlakeMasterError::Apply` if the record cannot be
/// serialized.
#[inline]
pub fn apply_preset(
    system: &dyn System,
    preset: &Preset,
    project_dir: &Path,
    settings: &Settings,
) -> Result<ApplySummary> {
    info!("  Adding {} requirements...", preset.flake8_plugins.len());
    let (requirements_file, requirements_action) =
        add_packages_to_requirements_file(system, project_dir, &preset.flake8_plugins, settings)?;

    info!("  Creating {} config...", settings.config_section);
    let (config_file, config_action) =
        add_flake8_config(system, project_dir, &preset.flake8_config, settings)?;

    info!("  Creating preset file...");
    let record_file = write_preset_record(system, project_dir, preset, settings)?;

    Ok(ApplySummary {
        requirements_file,
        requirements_action,
        config_file,
        config_action,
        record_file,
    })
}

/// Merge plugin pins into the first existing requirements file
///
/// Candidates are tried in `requirements_file_names` order; when none exist
/// the default requirements file is created with just the pins.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
#[inline]
pub fn add_packages_to_requirements_file(
    system: &dyn System,
    project_dir: &Path,
    plugins: &[(String, String)],
    settings: &Settings,
) -> Result<(PathBuf, FileAction)> {
    let existing = settings
        .requirements_file_names
        .iter()
        .map(|name| project_dir.join(name))
        .find(|path| system.is_file(path));

    match existing {
        Some(path) => {
            info!("    adding to {}...", path.display());
            let current = read_file(system, &path)?;
            // A leading BOM would hide the first requirement from the matcher
            let lines: Vec<&str> = current
                .strip_prefix('\u{feff}')
                .unwrap_or(current.as_str())
                .lines()
                .collect();
            write_file(system, &path, &merge(&lines, plugins))?;
            Ok((path, FileAction::Updated))
        }
        None => {
            info!("    creating {}...", settings.default_requirements_file_name);
            let path = project_dir.join(&settings.default_requirements_file_name);
            let no_lines: [&str; 0] = [];
            write_file(system, &path, &merge(&no_lines, plugins))?;
            Ok((path, FileAction::Created))
        }
    }
}

/// Write flake8 options into the configured section of the config file
///
/// # Errors
///
/// Returns an error if the file cannot be read or written
#[inline]
pub fn add_flake8_config(
    system: &dyn System,
    project_dir: &Path,
    options: &[(String, String)],
    settings: &Settings,
) -> Result<(PathBuf, FileAction)> {
    let path = project_dir.join(&settings.config_file_name);

    let (existing, action) = if system.is_file(&path) {
        info!("    Updating {}...", path.display());
        (Some(read_file(system, &path)?), FileAction::Updated)
    } else {
        warn!("    config file {} not found", path.display());
        (None, FileAction::Created)
    };

    let patched = apply_section(existing.as_deref(), &settings.config_section, options);
    write_file(system, &path, &patched)?;
    Ok((path, action))
}

/// Overwrite the preset record in the project root
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written
#[inline]
pub fn write_preset_record(
    system: &dyn System,
    project_dir: &Path,
    preset: &Preset,
    settings: &Settings,
) -> Result<PathBuf> {
    let path = project_dir.join(&settings.preset_file_name);
    let json = preset.record().to_json().map_err(|e| {
        FlakeMasterError::apply(format!("Cannot serialize preset record: {e}"))
    })?;
    write_file(system, &path, &json)?;
    Ok(path)
}

fn read_file(system: &dyn System, path: &Path) -> Result<String> {
    system.read_to_string(path).map_err(|e| {
        FlakeMasterError::filesystem(format!("Failed to read {}: {e}", path.display())).into()
    })
}

fn write_file(system: &dyn System, path: &Path, contents: &str) -> Result<()> {
    system.write(path, contents.as_bytes()).map_err(|e| {
        FlakeMasterError::filesystem(format!("Failed to write {}: {e}", path.display())).into()
    })
}
