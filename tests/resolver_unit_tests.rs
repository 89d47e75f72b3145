//! Unit tests for preset source resolution

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use flake_master::config::Settings;
    use flake_master::preset::{PresetRecord, PresetSource, resolve_source};
    use flake_master::system::mock::MockSystem;
    use std::path::PathBuf;

    fn settings(repo_url: &str) -> Settings {
        Settings {
            presets_repo_url: repo_url.to_owned(),
            ..Settings::default()
        }
    }

    fn record(url: Option<&str>, filepath: Option<&str>) -> PresetRecord {
        PresetRecord {
            url: url.map(str::to_owned),
            filepath: filepath.map(str::to_owned),
            ..PresetRecord::default()
        }
    }

    fn workspace() -> MockSystem {
        MockSystem::new()
            .with_current_dir("/work")
            .unwrap()
            .with_file("/work/presets/preset_name.cfg", b"[info]\n")
            .unwrap()
            .with_file("/work/custom/team.cfg", b"[info]\n")
            .unwrap()
    }

    #[test]
    fn extract_preset_url() {
        let system = MockSystem::new();
        let cases = [
            ("http://yandex.ru", None, "http://yandex.ru"),
            (
                "preset_name",
                None,
                "http://repo.ru/master/presets/preset_name.cfg",
            ),
            ("preset_name", Some(record(Some("http://yandex.ru"), None)), "http://yandex.ru"),
        ];

        for (token, prior, expected) in cases {
            let source = resolve_source(&system, Some(token), prior.as_ref(), &settings("http://repo.ru"));
            assert_eq!(source.url.as_deref(), Some(expected), "token {token}");
        }
    }

    #[test]
    fn extract_preset_file_path() {
        let system = workspace();
        let cases: [(Option<&str>, Option<PresetRecord>, Option<&str>); 6] = [
            (Some("preset_name.cfg"), None, Some("/work/presets/preset_name.cfg")),
            (
                Some("preset_name.cfg"),
                Some(record(None, Some("any/file/path"))),
                Some("any/file/path"),
            ),
            (None, Some(record(None, Some("any/file/path"))), Some("any/file/path")),
            (Some("preset_name.txt"), None, None),
            (Some("other_name.cfg"), None, None),
            (None, None, None),
        ];

        for (token, prior, expected) in cases {
            let source = resolve_source(&system, token, prior.as_ref(), &settings("http://repo.ru"));
            assert_eq!(source.filepath, expected.map(PathBuf::from), "token {token:?}");
        }
    }

    #[test]
    fn extract_preset_credentials() {
        let system = MockSystem::new();

        assert_eq!(
            resolve_source(&system, Some("http://yandex.ru"), None, &settings("http://repo.ru")),
            PresetSource {
                filepath: None,
                url: Some("http://yandex.ru".to_owned()),
            }
        );

        let prior = record(Some("http://ya.ru"), Some("any/file/path"));
        assert_eq!(
            resolve_source(&system, Some("http://yandex.ru"), Some(&prior), &settings("http://repo.ru")),
            PresetSource {
                filepath: Some(PathBuf::from("any/file/path")),
                url: Some("http://ya.ru".to_owned()),
            }
        );
    }

    #[test]
    fn explicit_file_path_relative_to_current_dir() {
        let system = workspace();
        let source = resolve_source(&system, Some("custom/team.cfg"), None, &settings("http://repo.ru"));
        assert_eq!(source.filepath, Some(PathBuf::from("/work/custom/team.cfg")));
    }

    #[test]
    fn absolute_file_path_is_used() {
        let system = workspace();
        let source = resolve_source(&system, Some("/work/custom/team.cfg"), None, &settings("http://repo.ru"));
        assert_eq!(source.filepath, Some(PathBuf::from("/work/custom/team.cfg")));
    }

    #[test]
    fn empty_prior_values_do_not_count() {
        let system = MockSystem::new();
        let prior = record(Some(""), Some(""));
        let source = resolve_source(&system, Some("base"), Some(&prior), &settings("http://repo.ru/"));
        assert_eq!(source.filepath, None);
        assert_eq!(
            source.url.as_deref(),
            Some("http://repo.ru/master/presets/base.cfg")
        );
    }

    #[test]
    fn custom_presets_dir() {
        let system = workspace();
        let settings = Settings {
            presets_dir: PathBuf::from("/work/custom"),
            ..settings("http://repo.ru")
        };
        let source = resolve_source(&system, Some("team.cfg"), None, &settings);
        assert_eq!(source.filepath, Some(PathBuf::from("/work/custom/team.cfg")));
    }
}
