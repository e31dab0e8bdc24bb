//! egui user interface: control bar, clock strip, info window, labels and
//! the persisted theme.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod clocks;
pub mod panels;
pub mod state;
pub mod theme;

pub use state::UiState;

/// Plugin for the egui interface
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<clocks::ClockBoard>()
            .add_systems(Startup, theme::load_theme)
            .add_systems(Update, clocks::tick_clocks)
            .add_systems(EguiPrimaryContextPass, panels::draw_ui);
    }
}
