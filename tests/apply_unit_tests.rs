//! Unit tests for applying presets to a project

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use flake_master::config::Settings;
    use flake_master::operations::{
        FileAction, add_flake8_config, add_packages_to_requirements_file, apply_preset,
    };
    use flake_master::preset::{Preset, PresetRecord};
    use flake_master::system::System;
    use flake_master::system::mock::MockSystem;
    use std::path::{Path, PathBuf};

    fn pins() -> Vec<(String, String)> {
        vec![
            ("flake7".to_owned(), "5.3".to_owned()),
            ("flake8".to_owned(), "3.8".to_owned()),
        ]
    }

    fn flake8_config() -> Vec<(String, String)> {
        vec![
            ("par".to_owned(), "val".to_owned()),
            ("par1".to_owned(), "val1".to_owned()),
        ]
    }

    fn preset() -> Preset {
        Preset {
            name: "base".to_owned(),
            revision: "4".to_owned(),
            config_url: Some("http://repo/master/presets/base.cfg".to_owned()),
            filepath: None,
            flake8_plugins: pins(),
            flake8_config: flake8_config(),
        }
    }

    fn project() -> MockSystem {
        MockSystem::new().with_dir("/project").unwrap()
    }

    fn read(system: &MockSystem, path: &str) -> String {
        system.read_to_string(Path::new(path)).unwrap()
    }

    #[test]
    fn requirements_file_is_updated() {
        let system = project()
            .with_file("/project/requirements.txt", b"flake==3.8.4\nflake7==3.8.4")
            .unwrap();

        let (path, action) =
            add_packages_to_requirements_file(&system, Path::new("/project"), &pins(), &Settings::default())
                .unwrap();

        assert_eq!(path, PathBuf::from("/project/requirements.txt"));
        assert_eq!(action, FileAction::Updated);
        assert_eq!(
            read(&system, "/project/requirements.txt"),
            "flake==3.8.4\nflake7==5.3\nflake8==3.8\n"
        );
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_requirement() {
        let system = project()
            .with_file("/project/requirements.txt", "\u{feff}flake8==1.0\nflake==3.8.4\n".as_bytes())
            .unwrap();
        let pins = vec![("flake8".to_owned(), "2.0".to_owned())];

        add_packages_to_requirements_file(&system, Path::new("/project"), &pins, &Settings::default())
            .unwrap();

        assert_eq!(
            read(&system, "/project/requirements.txt"),
            "flake8==2.0\nflake==3.8.4\n"
        );
    }

    #[test]
    fn default_requirements_file_is_created() {
        let system = project();

        let (path, action) =
            add_packages_to_requirements_file(&system, Path::new("/project"), &pins(), &Settings::default())
                .unwrap();

        assert_eq!(path, PathBuf::from("/project/requirements_dev.txt"));
        assert_eq!(action, FileAction::Created);
        assert_eq!(
            read(&system, "/project/requirements_dev.txt"),
            "flake7==5.3\nflake8==3.8\n"
        );
    }

    #[test]
    fn first_candidate_requirements_file_wins() {
        let system = project()
            .with_file("/project/requirements.txt", b"requests==2.0\n")
            .unwrap()
            .with_file("/project/requirements_dev.txt", b"pytest==6.0\n")
            .unwrap();

        add_packages_to_requirements_file(&system, Path::new("/project"), &pins(), &Settings::default())
            .unwrap();

        assert_eq!(read(&system, "/project/requirements.txt"), "requests==2.0\n");
        assert_eq!(
            read(&system, "/project/requirements_dev.txt"),
            "pytest==6.0\nflake7==5.3\nflake8==3.8\n"
        );
    }

    #[test]
    fn config_file_is_created_with_section() {
        let system = project();

        let (path, action) =
            add_flake8_config(&system, Path::new("/project"), &flake8_config(), &Settings::default())
                .unwrap();

        assert_eq!(path, PathBuf::from("/project/setup.cfg"));
        assert_eq!(action, FileAction::Created);
        assert_eq!(
            read(&system, "/project/setup.cfg"),
            "[flake8]\npar = val\npar1 = val1\n"
        );
    }

    #[test]
    fn config_file_keeps_other_sections() {
        let system = project()
            .with_file("/project/setup.cfg", b"[metadata]\nname = demo\n")
            .unwrap();

        let (_, action) =
            add_flake8_config(&system, Path::new("/project"), &flake8_config(), &Settings::default())
                .unwrap();

        assert_eq!(action, FileAction::Updated);
        assert_eq!(
            read(&system, "/project/setup.cfg"),
            "[metadata]\nname = demo\n\n[flake8]\npar = val\npar1 = val1\n"
        );
    }

    #[test]
    fn configured_file_names_are_honoured() {
        let system = project()
            .with_file("/project/tox.ini", b"[tox]\nenvlist = py38\n")
            .unwrap();
        let settings = Settings {
            config_file_name: "tox.ini".to_owned(),
            requirements_file_names: vec!["dev.txt".to_owned()],
            default_requirements_file_name: "dev.txt".to_owned(),
            ..Settings::default()
        };

        let summary = apply_preset(&system, &preset(), Path::new("/project"), &settings).unwrap();

        assert_eq!(summary.config_file, PathBuf::from("/project/tox.ini"));
        assert_eq!(summary.requirements_file, PathBuf::from("/project/dev.txt"));
        assert!(read(&system, "/project/tox.ini").starts_with("[tox]\nenvlist = py38\n"));
        assert!(!system.exists(Path::new("/project/setup.cfg")));
    }

    #[test]
    fn apply_writes_all_three_files() {
        let system = project();

        let summary = apply_preset(&system, &preset(), Path::new("/project"), &Settings::default())
            .unwrap();

        assert_eq!(summary.requirements_action, FileAction::Created);
        assert_eq!(summary.config_action, FileAction::Created);
        assert_eq!(summary.record_file, PathBuf::from("/project/.flake_master"));

        let record = PresetRecord::from_json(&read(&system, "/project/.flake_master")).unwrap();
        assert_eq!(
            record,
            PresetRecord {
                name: Some("base".to_owned()),
                revision: Some("4".to_owned()),
                url: Some("http://repo/master/presets/base.cfg".to_owned()),
                filepath: None,
            }
        );
    }

    #[test]
    fn record_is_overwritten() {
        let system = project()
            .with_file("/project/.flake_master", br#"{"name": "old", "revision": "1"}"#)
            .unwrap();

        apply_preset(&system, &preset(), Path::new("/project"), &Settings::default()).unwrap();

        let record = PresetRecord::from_json(&read(&system, "/project/.flake_master")).unwrap();
        assert_eq!(record.name.as_deref(), Some("base"));
        assert_eq!(record.revision.as_deref(), Some("4"));
    }
}
