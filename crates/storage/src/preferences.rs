use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use shared::{locale::Language, theme::Theme};
use tracing::{debug, warn};

const APP_DIR: &str = "menu";
const FILE_NAME: &str = "preferences.toml";

/// Presentation preferences that outlive a browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

/// TOML file holding [`Preferences`]. Reads never fail: a missing,
/// unreadable or malformed file yields defaults, and an unknown value only
/// resets its own key.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/menu/preferences.toml`, or `./preferences.toml` when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Preferences {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no stored preferences");
                return Preferences::default();
            }
        };
        parse_preferences(&raw).unwrap_or_else(|| {
            warn!(path = %self.path.display(), "ignoring malformed preferences file");
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create preferences directory '{}'",
                    parent.display()
                )
            })?;
        }
        let raw = toml::to_string(preferences).context("failed to encode preferences")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), theme = %preferences.theme, "preferences saved");
        Ok(())
    }
}

pub(crate) fn parse_preferences(raw: &str) -> Option<Preferences> {
    let values = toml::from_str::<HashMap<String, String>>(raw).ok()?;
    let mut preferences = Preferences::default();
    if let Some(theme) = values.get("theme").and_then(|v| Theme::parse(v)) {
        preferences.theme = theme;
    }
    if let Some(language) = values.get("language") {
        preferences.language = Language::from_tag(language);
    }
    Some(preferences)
}
