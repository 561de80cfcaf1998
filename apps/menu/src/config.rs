use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use storage::PreferenceStore;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    /// Language tag; `None` defers to the stored preference.
    pub language: Option<String>,
    pub preferences_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/menu.json"),
            language: None,
            preferences_path: PreferenceStore::default_path(),
        }
    }
}

/// Defaults, then the config file, then environment variables.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw),
        Err(err) if config_path.is_some() => {
            warn!(path = %path.display(), %err, "config file not readable; using defaults");
        }
        Err(_) => {}
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(%err, "ignoring malformed config file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("catalog_path") {
        settings.catalog_path = PathBuf::from(v);
    }
    if let Some(v) = file_cfg.get("language") {
        settings.language = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("preferences_path") {
        settings.preferences_path = PathBuf::from(v);
    }
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("MENU_CATALOG") {
        settings.catalog_path = PathBuf::from(v);
    }
    if let Some(v) = lookup("APP__CATALOG_PATH") {
        settings.catalog_path = PathBuf::from(v);
    }

    if let Some(v) = lookup("MENU_LANG") {
        settings.language = Some(v);
    }
    if let Some(v) = lookup("APP__LANGUAGE") {
        settings.language = Some(v);
    }

    if let Some(v) = lookup("APP__PREFERENCES_PATH") {
        settings.preferences_path = PathBuf::from(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
