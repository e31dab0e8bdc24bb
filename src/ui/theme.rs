//! Light/dark theme handling, persisted across runs.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::prefs::{Preferences, PrefsStore, ThemeMode};

#[derive(Resource)]
pub struct ThemeState {
    pub mode: ThemeMode,
    /// Last mode pushed into the egui context; `None` forces a re-apply.
    pub applied: Option<ThemeMode>,
    store: Option<PrefsStore>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.persist();
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self.mode {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        }
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.save(&Preferences { theme: self.mode }) {
            warn!("failed to save theme preference: {err:#}");
        }
    }
}

/// Startup system: read the saved theme, falling back to the default on
/// any error so a broken config file never blocks launch.
pub fn load_theme(mut commands: Commands) {
    let store = match PrefsStore::new() {
        Ok(store) => Some(store),
        Err(err) => {
            warn!("preferences unavailable, theme will not persist: {err:#}");
            None
        }
    };
    let mode = store
        .as_ref()
        .and_then(|store| match store.load() {
            Ok(prefs) => Some(prefs.theme),
            Err(err) => {
                warn!("failed to load preferences: {err:#}");
                None
            }
        })
        .unwrap_or_default();

    info!("UI theme: {mode:?}");
    commands.insert_resource(ThemeState {
        mode,
        applied: None,
        store,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        let mut theme = ThemeState {
            mode: ThemeMode::Dark,
            applied: None,
            store: None,
        };
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Light);
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Dark);
    }
}
