//! Loading presets from files and URLs

use super::resolver::{PresetSource, resolve_source};
use super::{Preset, PresetRecord, parse_preset};
use crate::config::Settings;
use crate::error::LoadError;
use crate::system::System;
use std::path::Path;
use tracing::debug;

/// Resolve and load a preset
///
/// Returns `Ok(None)` when neither a file nor a URL could be resolved. A
/// resolved file is read in preference to the URL; a failure to read it is
/// returned as-is without trying the URL.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, the download fails, or the
/// preset text is malformed.
pub fn load_preset(
    system: &dyn System,
    token: Option<&str>,
    prior: Option<&PresetRecord>,
    settings: &Settings,
) -> Result<Option<Preset>, LoadError> {
    match resolve_source(system, token, prior, settings) {
        PresetSource {
            filepath: Some(path),
            ..
        } => load_from_file(system, &path).map(Some),
        PresetSource { url: Some(url), .. } => load_from_url(system, &url).map(Some),
        PresetSource { .. } => Ok(None),
    }
}

/// Read and parse a preset file
///
/// # Errors
///
/// Returns `LoadError::Read` or `LoadError::Parse`
pub fn load_from_file(system: &dyn System, path: &Path) -> Result<Preset, LoadError> {
    debug!("Reading preset from {}", path.display());
    let text = system.read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_preset(&text, Some(path.to_path_buf()), None)?)
}

/// Download and parse a preset
///
/// # Errors
///
/// Returns `LoadError::Fetch` or `LoadError::Parse`
pub fn load_from_url(system: &dyn System, url: &str) -> Result<Preset, LoadError> {
    debug!("Downloading preset from {url}");
    let text = system.http_get(url).map_err(|source| LoadError::Fetch {
        url: url.to_owned(),
        source,
    })?;
    Ok(parse_preset(&text, None, Some(url.to_owned()))?)
}
