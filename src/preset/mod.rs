//! Preset model, parsing, source resolution and loading
//!
//! A preset is a named, versioned bundle of flake8 plugin pins and flake8
//! configuration options, stored as an ini file with `[info]`,
//! `[flake8_plugins]` and `[flake8_config]` sections.

pub mod loader;
pub mod parser;
pub mod resolver;

pub use loader::load_preset;
pub use parser::parse_preset;
pub use resolver::{PresetSource, resolve_source};

use crate::ini::apply_section;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Section holding `name` and `revision`
pub const INFO_SECTION: &str = "info";
/// Section holding `package = version` pins
pub const PLUGINS_SECTION: &str = "flake8_plugins";
/// Section holding options copied into the project's flake8 config
pub const CONFIG_SECTION: &str = "flake8_config";

/// A loaded preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub revision: String,
    /// URL the preset was downloaded from
    pub config_url: Option<String>,
    /// Local file the preset was read from
    pub filepath: Option<PathBuf>,
    pub flake8_plugins: Vec<(String, String)>,
    pub flake8_config: Vec<(String, String)>,
}

impl Preset {
    /// Whether this preset's revision is newer than `recorded`
    ///
    /// Revisions compare as plain strings, so `"10"` sorts before `"2"`.
    #[must_use]
    pub fn is_newer_than(&self, recorded: &str) -> bool {
        self.revision.as_str() > recorded
    }

    /// Serialize back into preset ini text
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        let info = vec![
            ("name".to_owned(), self.name.clone()),
            ("revision".to_owned(), self.revision.clone()),
        ];
        let text = apply_section(None, INFO_SECTION, &info);
        let text = apply_section(Some(&text), PLUGINS_SECTION, &self.flake8_plugins);
        apply_section(Some(&text), CONFIG_SECTION, &self.flake8_config)
    }

    /// Metadata snapshot persisted in the project after applying
    #[must_use]
    pub fn record(&self) -> PresetRecord {
        PresetRecord {
            name: Some(self.name.clone()),
            revision: Some(self.revision.clone()),
            url: self.config_url.clone(),
            filepath: self
                .filepath
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
        }
    }
}

/// Applied-preset metadata stored in the project root
///
/// Every field may be missing when read back, so a partial or hand-edited
/// file still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
}

impl PresetRecord {
    /// Parse a record from its JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected shape
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serialize the record as a single-line JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Recorded URL, if set and non-empty
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Recorded file path, if set and non-empty
    #[must_use]
    pub fn filepath(&self) -> Option<&str> {
        self.filepath.as_deref().filter(|path| !path.is_empty())
    }
}
