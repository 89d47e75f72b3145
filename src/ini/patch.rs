//! Writing key/value pairs into one section of ini text

use super::{LineKind, scan};

/// Render one `key = value` entry, indenting extra lines of multi-line values
#[must_use]
pub fn render_entry(key: &str, value: &str) -> String {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or_default();
    let mut rendered = format!("{key} = {first}");
    for line in lines {
        rendered.push_str("\n    ");
        rendered.push_str(line);
    }
    rendered.push('\n');
    rendered
}

/// Render a complete section: header plus one line per pair
#[must_use]
pub fn render_section(section: &str, pairs: &[(String, String)]) -> String {
    let mut rendered = format!("[{section}]\n");
    for (key, value) in pairs {
        rendered.push_str(&render_entry(key, value));
    }
    rendered
}

/// Write `pairs` into `section` of `existing`, returning the new text
///
/// - No existing text: the result is just the rendered section.
/// - Section present: keys already in the section (compared ignoring case)
///   are rewritten in place along with their continuation lines, new keys
///   go after the section's last entry. Other lines are left byte-for-byte.
/// - Section absent: the section is appended after a blank separator line.
#[must_use]
pub fn apply_section(existing: Option<&str>, section: &str, pairs: &[(String, String)]) -> String {
    let Some(text) = existing else {
        return render_section(section, pairs);
    };

    let segments: Vec<&str> = text.split_inclusive('\n').collect();
    let bodies: Vec<&str> = segments
        .iter()
        .map(|segment| segment.trim_end_matches(['\r', '\n']))
        .collect();
    let kinds = scan(&bodies);

    let Some(header) = kinds
        .iter()
        .position(|kind| matches!(kind, LineKind::Section(name) if *name == section))
    else {
        return append_section(text, section, pairs);
    };

    let end = kinds[header + 1..]
        .iter()
        .position(|kind| matches!(kind, LineKind::Section(_)))
        .map_or(kinds.len(), |offset| header + 1 + offset);

    let mut slots: Vec<Option<String>> = segments.iter().map(|s| Some((*s).to_owned())).collect();
    let insert_after = (header + 1..end)
        .rev()
        .find(|&idx| matches!(kinds[idx], LineKind::Entry { .. } | LineKind::Continuation(_)))
        .unwrap_or(header);
    let mut inserted: Vec<String> = Vec::new();

    for (key, value) in pairs {
        let target = (header + 1..end).find(|&idx| {
            matches!(kinds[idx], LineKind::Entry { key: name, .. } if name.eq_ignore_ascii_case(key))
        });

        if let Some(idx) = target {
            slots[idx] = Some(render_entry(key, value));
            // Comments inside the old value stay, its continuations go
            let mut next = idx + 1;
            while next < end && matches!(kinds[next], LineKind::Continuation(_) | LineKind::Comment) {
                if matches!(kinds[next], LineKind::Continuation(_)) {
                    slots[next] = None;
                }
                next += 1;
            }
        } else if let Some(previous) = inserted
            .iter_mut()
            .find(|rendered| entry_key(rendered).is_some_and(|k| k.eq_ignore_ascii_case(key)))
        {
            *previous = render_entry(key, value);
        } else {
            inserted.push(render_entry(key, value));
        }
    }

    let mut patched = String::with_capacity(text.len() + inserted.iter().map(String::len).sum::<usize>());
    for (idx, slot) in slots.into_iter().enumerate() {
        if let Some(line) = slot {
            patched.push_str(&line);
        }
        if idx == insert_after && !inserted.is_empty() {
            if !patched.is_empty() && !patched.ends_with('\n') {
                patched.push('\n');
            }
            for line in &inserted {
                patched.push_str(line);
            }
        }
    }

    patched
}

fn append_section(text: &str, section: &str, pairs: &[(String, String)]) -> String {
    let mut patched = text.to_owned();
    if !patched.is_empty() {
        if !patched.ends_with('\n') {
            patched.push('\n');
        }
        if !patched.ends_with("\n\n") {
            patched.push('\n');
        }
    }
    patched.push_str(&render_section(section, pairs));
    patched
}

fn entry_key(rendered: &str) -> Option<&str> {
    rendered.split_once(" = ").map(|(key, _)| key)
}
