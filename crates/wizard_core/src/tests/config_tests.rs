use super::*;

use std::{collections::HashMap, io::Write};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

fn settings_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

#[test]
fn defaults_match_the_event_branding() {
    let settings = WizardSettings::default();
    assert_eq!(settings.event_title, "SoTL in Action – 5 Aug 2025");
    assert_eq!(settings.resources_url, "https://www.unsw.edu.au/");
    assert_eq!(settings.share_url, settings.resources_url);
}

#[test]
fn file_values_override_defaults() {
    let file = settings_file(
        r#"
event_title = "Teaching Showcase"
resources_url = "https://example.edu/sotl"
export_dir = "/tmp/sotl-exports"
"#,
    );

    let settings = load_settings_with_env(Some(file.path()), env_from(&[])).expect("load");
    assert_eq!(settings.event_title, "Teaching Showcase");
    assert_eq!(settings.resources_url, "https://example.edu/sotl");
    assert_eq!(settings.share_url, "https://example.edu/sotl");
    assert_eq!(settings.export_dir, PathBuf::from("/tmp/sotl-exports"));
}

#[test]
fn environment_overrides_file() {
    let file = settings_file(
        r#"
event_title = "Teaching Showcase"
share_url = "https://example.edu/share"
"#,
    );

    let settings = load_settings_with_env(
        Some(file.path()),
        env_from(&[
            ("SOTL__EVENT_TITLE", "Faculty Retreat"),
            ("SOTL__RESOURCES_URL", "https://env.example.edu/"),
            ("SOTL__EXPORT_DIR", "  "),
        ]),
    )
    .expect("load");

    assert_eq!(settings.event_title, "Faculty Retreat");
    assert_eq!(settings.resources_url, "https://env.example.edu/");
    assert_eq!(settings.share_url, "https://example.edu/share");
    assert_eq!(settings.export_dir, WizardSettings::default().export_dir);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = load_settings_with_env(Some(missing.as_path()), env_from(&[])).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn malformed_file_reports_path_context() {
    let file = settings_file("event_title = [1, 2");
    let err = load_settings_with_env(Some(file.path()), env_from(&[])).unwrap_err();
    assert!(err.to_string().contains("failed to parse settings file"));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = settings_file("theme = \"dark\"\n");
    assert!(load_settings_with_env(Some(file.path()), env_from(&[])).is_err());
}
