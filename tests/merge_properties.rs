//! Property tests for merging pins into requirements listings

use flake_master::requirements::{find_existing, merge, normalize_name};
use proptest::prelude::*;
use std::collections::HashSet;

fn package_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}(-[a-z0-9]{1,4})?"
}

fn version() -> impl Strategy<Value = String> {
    "[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?"
}

fn requirement_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (package_name(), version()).prop_map(|(name, version)| format!("{name}=={version}")),
        (package_name(), version()).prop_map(|(name, version)| format!("  {name}>={version}  ")),
        package_name().prop_map(|name| format!("# {name}")),
        Just(String::new()),
    ]
}

/// Listings without two lines for the same package
fn listing() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(requirement_line(), 0..8).prop_map(|lines| {
        let mut seen = HashSet::new();
        lines
            .into_iter()
            .filter(|line| {
                let name = line.trim().split(['=', '>']).next().unwrap_or_default();
                line.trim().starts_with('#') || name.is_empty() || seen.insert(normalize_name(name))
            })
            .collect()
    })
}

fn pin_list() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((package_name(), version()), 0..6)
}

proptest! {
    #[test]
    fn pinned_package_has_exactly_its_pin(lines in listing(), pins in pin_list()) {
        let merged = merge(&lines, &pins);
        let merged_lines: Vec<&str> = merged.lines().collect();

        for (name, _) in &pins {
            let version = &pins.iter().rev().find(|(n, _)| n == name).unwrap().1;
            let index = find_existing(name, &merged_lines).unwrap();
            prop_assert_eq!(merged_lines[index], format!("{name}=={version}"));
            let matches = merged_lines
                .iter()
                .filter(|line| find_existing(name, &[**line]).is_some())
                .count();
            prop_assert_eq!(matches, 1);
        }
    }

    #[test]
    fn merging_twice_is_idempotent(lines in listing(), pins in pin_list()) {
        let once = merge(&lines, &pins);
        let once_lines: Vec<&str> = once.lines().collect();
        let twice = merge(&once_lines, &pins);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn untouched_lines_keep_their_order(lines in listing(), pins in pin_list()) {
        let merged = merge(&lines, &pins);
        let merged_lines: Vec<&str> = merged.lines().collect();

        prop_assert!(merged_lines.len() >= lines.len());
        for (index, line) in lines.iter().enumerate() {
            let replaced = pins.iter().any(|(name, _)| find_existing(name, &[line.as_str()]).is_some());
            if !replaced {
                prop_assert_eq!(merged_lines[index], line.as_str());
            }
        }
    }
}
