//! Inspecting a preset without applying it

use super::fetch_preset;
use crate::config::Settings;
use crate::preset::Preset;
use crate::system::System;
use anyhow::Result;
use std::fmt::{self, Write as _};

/// Fetch a preset for display
///
/// # Errors
///
/// Returns a fetch error if the preset cannot be resolved or loaded
#[inline]
pub fn show_preset(system: &dyn System, settings: &Settings, preset_token: &str) -> Result<Preset> {
    fetch_preset(system, settings, Some(preset_token), None, preset_token)
}

/// Human-readable description of a preset
///
/// # Errors
///
/// Returns `fmt::Error` if writing to the output buffer fails
pub fn describe_preset(preset: &Preset) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} (rev. {})", preset.name, preset.revision)?;

    if let Some(path) = &preset.filepath {
        writeln!(out, "source: {}", path.display())?;
    } else if let Some(url) = &preset.config_url {
        writeln!(out, "source: {url}")?;
    }

    writeln!(out, "plugins:")?;
    for (name, version) in &preset.flake8_plugins {
        writeln!(out, "  {name}=={version}")?;
    }

    writeln!(out, "config:")?;
    for (key, value) in &preset.flake8_config {
        writeln!(out, "  {key} = {}", value.replace('\n', "\n    "))?;
    }

    Ok(out)
}
