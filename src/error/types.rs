//! Custom error types with exit codes

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for flake-master commands
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FlakeMasterError {
    /// Configuration Error - invalid settings, paths, or deployment state
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Fetch Error - the preset could not be resolved, downloaded, or parsed
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Apply Error - the preset could not be applied to the project
    #[error("Apply error: {message}")]
    Apply { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl FlakeMasterError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Fetch { .. } => 2,
            Self::Apply { .. } => 3,
            Self::Filesystem { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a fetch error
    #[inline]
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create an apply error
    #[inline]
    pub fn apply<S: Into<String>>(message: S) -> Self {
        Self::Apply {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

/// Structural problems found while parsing preset text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("missing [{0}] section")]
    MissingSection(String),

    #[error("missing '{key}' in [{section}] section")]
    MissingKey { section: String, key: String },

    #[error("line {line}: key/value pair before any section header")]
    MissingSectionHeader { line: usize },

    #[error("line {line}: cannot parse '{content}'")]
    Syntax { line: usize, content: String },
}

/// Failure to produce a preset from a resolved source
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("malformed preset: {0}")]
    Parse(#[from] ParseError),

    #[error("cannot read preset file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot download preset from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: io::Error,
    },
}
