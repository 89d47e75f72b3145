//! Requirement specifier parsing
//!
//! Understands the subset of PEP 508 that shows up in pinned requirements
//! files: `name[extras] specifiers ; marker` and `name @ url`.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[(?P<extras>[^\]]*)\])?\s*(?P<rest>.*)$",
    )
    .expect("requirement pattern is valid")
});

static VERSION_CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:===|==|!=|~=|>=|<=|>|<)\s*[A-Za-z0-9_.*+!-]+$")
        .expect("version clause pattern is valid")
});

static INLINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)#.*$").expect("comment pattern is valid"));

/// A line that is not a requirement specifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a requirement specifier: '{0}'")]
pub struct MalformedRequirement(pub String);

/// A parsed requirement specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Project name as written
    pub name: String,
    pub extras: Vec<String>,
    /// Version clauses such as `==3.8.4` or `>=1.0`
    pub specifiers: Vec<String>,
    /// Environment marker after `;`
    pub marker: Option<String>,
    /// Direct reference after `@`
    pub url: Option<String>,
}

impl Requirement {
    /// Parse a requirement line
    ///
    /// Surrounding whitespace and trailing ` # comment`s are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRequirement` for blank lines, comment lines, pip
    /// options (`-r`, `-e`, ...) and anything else that is not a specifier.
    pub fn parse(line: &str) -> Result<Self, MalformedRequirement> {
        let malformed = || MalformedRequirement(line.to_owned());

        let content = strip_inline_comment(line);
        let captures = REQUIREMENT_RE.captures(content).ok_or_else(malformed)?;

        let name = captures["name"].to_owned();
        let extras = captures
            .name("extras")
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|extra| !extra.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let rest = captures.name("rest").map_or("", |m| m.as_str()).trim();

        if let Some(url) = rest.strip_prefix('@') {
            let (url, marker) = split_marker(url);
            if url.is_empty() {
                return Err(malformed());
            }
            return Ok(Self {
                name,
                extras,
                specifiers: Vec::new(),
                marker,
                url: Some(url.to_owned()),
            });
        }

        let (clauses, marker) = split_marker(rest);
        let specifiers = if clauses.is_empty() {
            Vec::new()
        } else {
            clauses
                .split(',')
                .map(str::trim)
                .map(|clause| {
                    if VERSION_CLAUSE_RE.is_match(clause) {
                        Ok(clause.replace(' ', ""))
                    } else {
                        Err(malformed())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            name,
            extras,
            specifiers,
            marker,
            url: None,
        })
    }

    /// Normalized project name used for comparisons
    #[must_use]
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a project name (PEP 503)
///
/// Lowercases and collapses runs of `-`, `_` and `.` into a single `-`, so
/// `Flake8_Bugbear` and `flake8-bugbear` compare equal.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for ch in name.trim().chars() {
        if matches!(ch, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
            }
            in_separator = true;
        } else {
            normalized.push(ch.to_ascii_lowercase());
            in_separator = false;
        }
    }

    normalized
}

fn strip_inline_comment(line: &str) -> &str {
    let end = INLINE_COMMENT_RE.find(line).map_or(line.len(), |m| m.start());
    line[..end].trim()
}

fn split_marker(text: &str) -> (&str, Option<String>) {
    match text.split_once(';') {
        Some((head, marker)) => (head.trim(), Some(marker.trim().to_owned())),
        None => (text.trim(), None),
    }
}
