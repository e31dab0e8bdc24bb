//! Persisted user preferences.
//!
//! A small JSON file in the platform config directory. Currently only the
//! UI theme lives here; a missing or unreadable file falls back to the
//! defaults so first launch needs no setup.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: ThemeMode,
}

/// Handle to the on-disk preferences file.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "orrery")
            .context("could not determine a config directory")?;
        Ok(Self::new_in_dir(dirs.config_dir()))
    }

    pub fn new_in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("preferences.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved preferences; a missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let prefs = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(prefs)
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("orrery-prefs-{tag}-{nanos}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = temp_dir("missing");
        let store = PrefsStore::new_in_dir(&dir);
        let prefs = store.load().unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, ThemeMode::Dark);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = temp_dir("roundtrip");
        let store = PrefsStore::new_in_dir(&dir);
        store
            .save(&Preferences {
                theme: ThemeMode::Light,
            })
            .unwrap();
        let prefs = store.load().unwrap();
        assert_eq!(prefs.theme, ThemeMode::Light);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = temp_dir("forward");
        let store = PrefsStore::new_in_dir(&dir);
        fs::write(store.path(), r#"{"theme":"light","future-knob":3}"#).unwrap();
        let prefs = store.load().unwrap();
        assert_eq!(prefs.theme, ThemeMode::Light);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = temp_dir("corrupt");
        let store = PrefsStore::new_in_dir(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
        fs::remove_dir_all(dir).ok();
    }
}
