//! Settings validation logic

use crate::config::Settings;
use crate::preset::resolver::is_url;
use anyhow::{Result, anyhow};

/// Validate complete settings
///
/// # Errors
///
/// Returns an error if:
/// - The presets repository URL has no scheme
/// - A file name is empty or contains a path separator
/// - The config section name is empty or cannot be written as a header
#[inline]
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if !is_url(&settings.presets_repo_url) {
        return Err(anyhow!(
            "Invalid presets repository URL: '{}'. Expected something like \
            https://raw.githubusercontent.com/org/repo",
            settings.presets_repo_url
        ));
    }

    if settings.presets_dir.as_os_str().is_empty() {
        return Err(anyhow!("Presets directory cannot be empty"));
    }

    validate_file_name("presetFileName", &settings.preset_file_name)?;
    validate_file_name(
        "defaultRequirementsFileName",
        &settings.default_requirements_file_name,
    )?;
    validate_file_name("configFileName", &settings.config_file_name)?;

    for (index, name) in settings.requirements_file_names.iter().enumerate() {
        validate_file_name(&format!("requirementsFileNames #{}", index + 1), name)?;
    }

    let section = settings.config_section.trim();
    if section.is_empty() || section != settings.config_section {
        return Err(anyhow!(
            "Config section '{}' must be non-empty without surrounding whitespace",
            settings.config_section
        ));
    }
    if section.contains(['[', ']', '\n']) {
        return Err(anyhow!(
            "Config section '{section}' cannot contain brackets or newlines"
        ));
    }

    Ok(())
}

/// Validate a file name that is joined onto the project directory
///
/// # Errors
///
/// Returns an error if the name is empty, contains a path separator, or is
/// `.`/`..`
#[inline]
pub fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow!("{field}: File name cannot be empty"));
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(anyhow!(
            "{field}: '{name}' must be a plain file name in the project root"
        ));
    }

    Ok(())
}
