//! Re-applying a newer revision of the deployed preset

use super::{apply_preset, ensure_project_dir, fetch_preset};
use crate::config::Settings;
use crate::error::FlakeMasterError;
use crate::preset::{Preset, PresetRecord};
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Result of an upgrade run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// A newer revision was applied
    Upgraded { from: String, preset: Preset },
    /// The fetched revision is not newer than the recorded one
    UpToDate { revision: String },
}

/// Refetch the recorded preset and apply it when its revision is newer
///
/// The recorded URL or file path is used in preference to the preset name.
///
/// # Errors
///
/// Returns an error if:
/// - The project directory does not exist
/// - There is no preset record (`setup` is the right command)
/// - The record cannot be read or parsed
/// - The preset cannot be fetched
/// - Applying the preset fails
#[inline]
pub fn upgrade_preset(
    system: &dyn System,
    settings: &Settings,
    project_dir: &Path,
) -> Result<UpgradeOutcome> {
    let project_dir = ensure_project_dir(system, project_dir)?;
    let record_path = project_dir.join(&settings.preset_file_name);

    if !system.exists(&record_path) {
        return Err(FlakeMasterError::configuration(format!(
            "Preset file ({}) not found. Looks like flake master was not deployed to {}. \
            May be you mean `setup`, not `upgrade`?",
            record_path.display(),
            project_dir.display()
        ))
        .into());
    }

    let raw = system.read_to_string(&record_path).map_err(|e| {
        FlakeMasterError::filesystem(format!("Failed to read {}: {e}", record_path.display()))
    })?;
    let record = PresetRecord::from_json(&raw).map_err(|e| {
        FlakeMasterError::configuration(format!(
            "Preset file ({}) is not a valid preset record: {e}",
            record_path.display()
        ))
    })?;

    let display_name = record.name.clone().unwrap_or_else(|| "<unnamed>".to_owned());
    let recorded_revision = record.revision.clone().unwrap_or_default();

    let fresh = fetch_preset(
        system,
        settings,
        record.name.as_deref(),
        Some(&record),
        &display_name,
    )?;

    if !fresh.is_newer_than(&recorded_revision) {
        info!(
            "Preset {} is up to date (rev. {})",
            display_name, recorded_revision
        );
        return Ok(UpgradeOutcome::UpToDate {
            revision: recorded_revision,
        });
    }

    info!(
        "Updating preset {} from rev. {} to {}...",
        display_name, recorded_revision, fresh.revision
    );
    apply_preset(system, &fresh, &project_dir, settings)?;

    Ok(UpgradeOutcome::Upgraded {
        from: recorded_revision,
        preset: fresh,
    })
}
