//! Ini-format text handling
//!
//! Works line by line instead of through a map so that patched files keep
//! their comments, ordering and formatting.

pub mod patch;

pub use patch::*;

use crate::error::ParseError;

/// Classification of one ini line (without its line terminator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// `[name]` header
    Section(&'a str),
    /// `key = value` or `key: value`
    Entry { key: &'a str, value: &'a str },
    /// Indented line extending the previous entry's value
    Continuation(&'a str),
    Invalid,
}

/// A named section with its entries in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl IniSection {
    /// Look up an entry value, ignoring key case
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}

/// Classify every line
///
/// Indented lines count as continuations only after an entry or another
/// continuation, with nothing but comments in between; elsewhere they are
/// classified by their content.
#[must_use]
pub fn scan<'a>(lines: &[&'a str]) -> Vec<LineKind<'a>> {
    let mut kinds = Vec::with_capacity(lines.len());
    let mut after_entry = false;

    for line in lines {
        let kind = classify(line, after_entry);
        match kind {
            LineKind::Comment => {}
            LineKind::Entry { .. } | LineKind::Continuation(_) => after_entry = true,
            _ => after_entry = false,
        }
        kinds.push(kind);
    }

    kinds
}

fn classify(line: &str, after_entry: bool) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return LineKind::Comment;
    }
    if after_entry && line.starts_with(char::is_whitespace) {
        return LineKind::Continuation(trimmed);
    }
    // Header name runs to the last `]`; anything after it is ignored
    if let Some(rest) = trimmed.strip_prefix('[')
        && let Some(end) = rest.rfind(']')
        && !rest[..end].trim().is_empty()
    {
        return LineKind::Section(rest[..end].trim());
    }

    match trimmed.find(['=', ':']) {
        Some(pos) if pos > 0 => LineKind::Entry {
            key: trimmed[..pos].trim_end(),
            value: trimmed[pos + 1..].trim_start(),
        },
        _ => LineKind::Invalid,
    }
}

/// Parse ini text into sections
///
/// Repeated section headers are folded into the first occurrence and a
/// repeated key overwrites the earlier value in place. Continuation lines
/// are joined to their entry's value with `\n`.
///
/// # Errors
///
/// Returns `ParseError` for entries before any header and for lines that are
/// neither headers, entries, comments nor continuations.
pub fn parse_sections(text: &str) -> Result<Vec<IniSection>, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections: Vec<IniSection> = Vec::new();
    let mut current: Option<usize> = None;
    let mut last_key: Option<usize> = None;

    for (index, kind) in scan(&lines).into_iter().enumerate() {
        let line = index + 1;
        match kind {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Section(name) => {
                let position = sections.iter().position(|s| s.name == name);
                current = Some(position.unwrap_or_else(|| {
                    sections.push(IniSection {
                        name: name.to_owned(),
                        entries: Vec::new(),
                    });
                    sections.len() - 1
                }));
                last_key = None;
            }
            LineKind::Entry { key, value } => {
                let section = current
                    .and_then(|idx| sections.get_mut(idx))
                    .ok_or(ParseError::MissingSectionHeader { line })?;
                let existing = section
                    .entries
                    .iter()
                    .position(|(name, _)| name.eq_ignore_ascii_case(key));
                last_key = Some(match existing {
                    Some(pos) => {
                        section.entries[pos].1 = value.to_owned();
                        pos
                    }
                    None => {
                        section.entries.push((key.to_owned(), value.to_owned()));
                        section.entries.len() - 1
                    }
                });
            }
            LineKind::Continuation(text) => {
                let entry = current
                    .zip(last_key)
                    .and_then(|(sec, key)| sections.get_mut(sec)?.entries.get_mut(key));
                if let Some((_, value)) = entry {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(text);
                }
            }
            LineKind::Invalid => {
                return Err(ParseError::Syntax {
                    line,
                    content: lines[index].to_owned(),
                });
            }
        }
    }

    Ok(sections)
}
