//! First-time deployment of a preset

use super::{apply_preset, ensure_project_dir, fetch_preset};
use crate::config::Settings;
use crate::error::FlakeMasterError;
use crate::preset::Preset;
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Fetch `preset_token` and apply it to a project that has no preset yet
///
/// # Errors
///
/// Returns an error if:
/// - The project directory does not exist
/// - The project already has a preset record (`upgrade` is the right command)
/// - The preset cannot be fetched
/// - Applying the preset fails
#[inline]
pub fn setup_preset(
    system: &dyn System,
    settings: &Settings,
    preset_token: &str,
    project_dir: &Path,
) -> Result<Preset> {
    let project_dir = ensure_project_dir(system, project_dir)?;
    let record_path = project_dir.join(&settings.preset_file_name);

    if system.exists(&record_path) {
        return Err(FlakeMasterError::configuration(format!(
            "Preset file ({}) already exists. Looks like flake master has already been \
            deployed to {}. May be you mean `upgrade`, not `setup`?",
            record_path.display(),
            project_dir.display()
        ))
        .into());
    }

    let preset = fetch_preset(system, settings, Some(preset_token), None, preset_token)?;
    info!("Fetched {} v. {}", preset.name, preset.revision);

    apply_preset(system, &preset, &project_dir, settings)?;
    info!("Preset {} applied.", preset.name);

    Ok(preset)
}
