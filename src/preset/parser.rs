//! Preset ini parsing

use super::{CONFIG_SECTION, INFO_SECTION, PLUGINS_SECTION, Preset};
use crate::error::ParseError;
use crate::ini::{IniSection, parse_sections};
use std::path::PathBuf;

/// Parse preset text into a `Preset`
///
/// `filepath` and `config_url` record where the text came from; they are
/// stamped onto the result as-is. Missing plugin or config sections yield
/// empty lists.
///
/// # Errors
///
/// Returns `ParseError` when the text is not valid ini, when the `[info]`
/// section or its `name`/`revision` keys are missing, or when `name` is empty.
pub fn parse_preset(
    text: &str,
    filepath: Option<PathBuf>,
    config_url: Option<String>,
) -> Result<Preset, ParseError> {
    let sections = parse_sections(text)?;
    let find = |name: &str| sections.iter().find(|section| section.name == name);

    let info = find(INFO_SECTION).ok_or_else(|| ParseError::MissingSection(INFO_SECTION.to_owned()))?;
    let name = required(info, "name")?;
    if name.is_empty() {
        return Err(ParseError::MissingKey {
            section: info.name.clone(),
            key: "name".to_owned(),
        });
    }
    let revision = required(info, "revision")?;

    let entries = |name: &str| find(name).map(|section| section.entries.clone()).unwrap_or_default();

    Ok(Preset {
        name,
        revision,
        config_url,
        filepath,
        flake8_plugins: entries(PLUGINS_SECTION),
        flake8_config: entries(CONFIG_SECTION),
    })
}

fn required(section: &IniSection, key: &str) -> Result<String, ParseError> {
    section
        .get(key)
        .map(str::to_owned)
        .ok_or_else(|| ParseError::MissingKey {
            section: section.name.clone(),
            key: key.to_owned(),
        })
}
