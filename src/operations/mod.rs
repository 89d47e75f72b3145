//! Operations module
//!
//! Coordinates fetching presets and applying them to a project

pub mod apply;
pub mod setup;
pub mod show;
pub mod upgrade;

pub use apply::*;
pub use setup::*;
pub use show::*;
pub use upgrade::*;

use crate::config::Settings;
use crate::error::FlakeMasterError;
use crate::preset::{Preset, PresetRecord, load_preset};
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolve and load a preset, reporting every failure as a fetch error
///
/// A preset that cannot be located and one that fails to load are reported
/// the same way; the underlying cause is logged.
fn fetch_preset(
    system: &dyn System,
    settings: &Settings,
    token: Option<&str>,
    prior: Option<&PresetRecord>,
    display_name: &str,
) -> Result<Preset> {
    match load_preset(system, token, prior, settings) {
        Ok(Some(preset)) => Ok(preset),
        Ok(None) => {
            warn!("No preset file or URL found for '{display_name}'");
            Err(FlakeMasterError::fetch(format!("Error fetching preset {display_name}.")).into())
        }
        Err(err) => {
            warn!("{err}");
            Err(FlakeMasterError::fetch(format!("Error fetching preset {display_name}.")).into())
        }
    }
}

/// Check that the project directory exists and return it as given
fn ensure_project_dir(system: &dyn System, project_dir: &Path) -> Result<PathBuf> {
    if !system.is_dir(project_dir) {
        return Err(FlakeMasterError::configuration(format!(
            "Project directory not found: {}",
            project_dir.display()
        ))
        .into());
    }
    Ok(project_dir.to_path_buf())
}
