//! Shared UI state.

use bevy::prelude::*;

/// Set by the panel pass each frame; picking consults it so clicks on
/// panels never reach the scene.
#[derive(Resource, Default)]
pub struct UiState {
    pub pointer_over_ui: bool,
}
