use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::debug;

pub const APP_DIR_NAME: &str = "sotl_snapshot";
const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub event_title: String,
    pub resources_url: String,
    pub share_url: String,
    pub export_dir: PathBuf,
}

impl Default for WizardSettings {
    fn default() -> Self {
        let resources_url = "https://www.unsw.edu.au/".to_string();
        Self {
            event_title: "SoTL in Action – 5 Aug 2025".into(),
            share_url: resources_url.clone(),
            resources_url,
            export_dir: dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    event_title: Option<String>,
    resources_url: Option<String>,
    share_url: Option<String>,
    export_dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct Overrides {
    event_title: Option<String>,
    resources_url: Option<String>,
    share_url: Option<String>,
    export_dir: Option<PathBuf>,
}

impl Overrides {
    fn merge(&mut self, other: Overrides) {
        if other.event_title.is_some() {
            self.event_title = other.event_title;
        }
        if other.resources_url.is_some() {
            self.resources_url = other.resources_url;
        }
        if other.share_url.is_some() {
            self.share_url = other.share_url;
        }
        if other.export_dir.is_some() {
            self.export_dir = other.export_dir;
        }
    }

    fn apply(self, mut settings: WizardSettings) -> WizardSettings {
        if let Some(v) = self.event_title {
            settings.event_title = v;
        }
        if let Some(v) = self.resources_url {
            // share link follows the resources link unless set on its own
            settings.share_url = v.clone();
            settings.resources_url = v;
        }
        if let Some(v) = self.share_url {
            settings.share_url = v;
        }
        if let Some(v) = self.export_dir {
            settings.export_dir = v;
        }
        settings
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Defaults, then the TOML file, then `SOTL__*` environment variables.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<WizardSettings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

pub fn load_settings_with_env(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<WizardSettings> {
    let mut overrides = Overrides::default();

    match path {
        Some(path) => {
            if !path.exists() {
                bail!("settings file '{}' does not exist", path.display());
            }
            overrides.merge(read_settings_file(path)?);
        }
        None => {
            if let Some(path) = default_settings_path().filter(|p| p.exists()) {
                overrides.merge(read_settings_file(&path)?);
            }
        }
    }

    overrides.merge(env_overrides(env));
    Ok(overrides.apply(WizardSettings::default()))
}

fn read_settings_file(path: &Path) -> anyhow::Result<Overrides> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let file: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(Overrides {
        event_title: file.event_title,
        resources_url: file.resources_url,
        share_url: file.share_url,
        export_dir: file.export_dir,
    })
}

fn env_overrides(env: impl Fn(&str) -> Option<String>) -> Overrides {
    let non_empty = |name: &str| env(name).filter(|v| !v.trim().is_empty());
    Overrides {
        event_title: non_empty("SOTL__EVENT_TITLE"),
        resources_url: non_empty("SOTL__RESOURCES_URL"),
        share_url: non_empty("SOTL__SHARE_URL"),
        export_dir: non_empty("SOTL__EXPORT_DIR").map(PathBuf::from),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
