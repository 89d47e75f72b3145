//! Merging plugin pins into a requirements listing

use super::specifier::{Requirement, normalize_name};
use tracing::trace;

/// Outcome of matching one requirements line against a package name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    /// The line pins the package
    Matched,
    /// The line is a requirement for some other package
    NotMatched,
    /// The line is blank, a comment, or not a requirement specifier
    Malformed,
}

/// Match a single line against `package`
#[must_use]
pub fn match_line(package: &str, line: &str) -> LineMatch {
    match Requirement::parse(line) {
        Ok(requirement) if requirement.key() == normalize_name(package) => LineMatch::Matched,
        Ok(_) => LineMatch::NotMatched,
        Err(err) => {
            trace!("Skipping line while looking for {package}: {err}");
            LineMatch::Malformed
        }
    }
}

/// Find the index of the first line that pins `package`
///
/// Malformed lines are skipped rather than treated as errors.
#[must_use]
pub fn find_existing<S: AsRef<str>>(package: &str, lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .position(|line| match_line(package, line.as_ref()) == LineMatch::Matched)
}

/// Apply `pins` to `lines`, returning the new file contents
///
/// A pin whose package is already listed replaces that line in place;
/// otherwise a `name==version` line is appended. Every line in the result is
/// newline-terminated.
#[must_use]
pub fn merge<S: AsRef<str>>(lines: &[S], pins: &[(String, String)]) -> String {
    let mut merged: Vec<String> = lines.iter().map(|line| line.as_ref().to_owned()).collect();

    for (name, version) in pins {
        let pin = format!("{name}=={version}");
        match find_existing(name, merged.as_slice()) {
            Some(index) => merged[index] = pin,
            None => merged.push(pin),
        }
    }

    merged.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}
