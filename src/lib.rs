//! `flake-master` - A CLI tool for bootstrapping and upgrading flake8 presets
//!
//! This library resolves a named preset (plugin pins plus flake8 options)
//! from a URL, a presets repository or a local file, merges the pins into a
//! project's requirements file, patches the flake8 section of its ini config,
//! and records the applied revision so later runs can upgrade it.

pub mod cli;
pub mod config;
pub mod error;
pub mod ini;
pub mod operations;
pub mod preset;
pub mod requirements;
pub mod system;

use anyhow::Result;
use cli::{Args, Command};
use config::Settings;
use error::FlakeMasterError;
use operations::{describe_preset, setup_preset, show_preset, upgrade_preset};
use system::System;

/// Main entry point for the flake-master library
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    let settings = load_settings(args, system)?;

    match &args.command {
        Command::Setup { preset, path } => {
            setup_preset(system, &settings, preset, path)?;
        }
        Command::Upgrade { path } => {
            upgrade_preset(system, &settings, path)?;
        }
        Command::Show { preset } => {
            let preset = show_preset(system, &settings, preset)?;
            // Output to stdout (not using logging)
            print!("{}", describe_preset(&preset)?);
        }
    }

    Ok(())
}

/// Load settings and apply CLI overrides
pub fn load_settings(args: &Args, system: &dyn System) -> Result<Settings> {
    let mut settings = Settings::load(system, args.settings.as_deref())?;

    // Apply CLI overrides
    if let Some(url) = &args.presets_repo_url {
        settings.presets_repo_url.clone_from(url);
    }
    if let Some(dir) = &args.presets_dir {
        settings.presets_dir.clone_from(dir);
    }

    // Validate merged settings
    settings
        .validate()
        .map_err(|e| FlakeMasterError::configuration(e.to_string()))?;

    Ok(settings)
}
