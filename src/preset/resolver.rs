//! Deciding where a preset should be loaded from

use super::PresetRecord;
use crate::config::Settings;
use crate::system::System;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// File suffix that marks a token as a preset file name
pub const PRESET_SUFFIX: &str = ".cfg";

static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").expect("scheme pattern is valid"));

/// Concrete locations a preset can be loaded from
///
/// When both are set the file wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetSource {
    pub filepath: Option<PathBuf>,
    pub url: Option<String>,
}

impl PresetSource {
    /// Nothing resolved
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filepath.is_none() && self.url.is_none()
    }
}

/// Check whether `token` starts with a URL scheme such as `https://`
#[must_use]
pub fn is_url(token: &str) -> bool {
    URL_SCHEME_RE.is_match(token)
}

/// Resolve a user token and the previously recorded preset into sources
///
/// `token` may be a preset name, a URL, or a `.cfg` file name. Locations
/// recorded by an earlier run always take precedence over the token.
#[must_use]
pub fn resolve_source(
    system: &dyn System,
    token: Option<&str>,
    prior: Option<&PresetRecord>,
    settings: &Settings,
) -> PresetSource {
    let token = token.map(str::trim).filter(|token| !token.is_empty());

    let source = PresetSource {
        filepath: resolve_file_path(system, token, prior, &settings.presets_dir),
        url: resolve_url(token, prior, &settings.presets_repo_url),
    };
    debug!("Resolved preset {:?} to {:?}", token, source);
    source
}

fn resolve_file_path(
    system: &dyn System,
    token: Option<&str>,
    prior: Option<&PresetRecord>,
    presets_dir: &Path,
) -> Option<PathBuf> {
    if let Some(path) = prior.and_then(PresetRecord::filepath) {
        return Some(PathBuf::from(path));
    }

    let token = token.filter(|token| token.ends_with(PRESET_SUFFIX) && !is_url(token))?;
    let current_dir = system.current_dir().ok();
    let absolute = |path: PathBuf| match &current_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    };

    // Presets directory first, then the token as a path of its own
    [presets_dir.join(token), PathBuf::from(token)]
        .into_iter()
        .map(absolute)
        .find(|candidate| system.is_file(candidate))
        .map(|candidate| system.canonicalize(&candidate).unwrap_or(candidate))
}

fn resolve_url(token: Option<&str>, prior: Option<&PresetRecord>, repo_url: &str) -> Option<String> {
    if let Some(url) = prior.and_then(PresetRecord::url) {
        return Some(url.to_owned());
    }

    let token = token?;
    if is_url(token) {
        return Some(token.to_owned());
    }

    Some(format!(
        "{}/master/presets/{token}{PRESET_SUFFIX}",
        repo_url.trim_end_matches('/')
    ))
}
