//! Scene construction module
//!
//! The entity factory: startup systems that build every drawable body from
//! the static configuration tables and register it with the scene registry,
//! plus the meteor respawn path (the only registry mutation after startup).

use bevy::prelude::*;

pub mod factory;
pub mod meteors;

use crate::registry::SceneRegistry;
use crate::sim::SimSet;

/// Marker for the central star.
#[derive(Component)]
pub struct Sun;

/// One translucent glow shell around the sun; `layer` offsets the pulse
/// phase so the shells breathe out of step.
#[derive(Component)]
pub struct SunGlow {
    pub layer: usize,
    pub base_opacity: f32,
}

/// Camera-facing flare billboard at the sun. Visibility falls off with the
/// angle between the camera forward vector and the direction to the sun.
#[derive(Component)]
pub struct LensFlare {
    pub max_angle: f32,
    pub max_opacity: f32,
}

/// Marker for meteor bodies (fade + respawn).
#[derive(Component)]
pub struct MeteorBody;

/// Marker for a drifting starfield point.
#[derive(Component)]
pub struct StarPoint;

/// Marker for the wormhole portal ring.
#[derive(Component)]
pub struct WormholeRing;

/// Marker for the wormhole particle shell.
#[derive(Component)]
pub struct WormholeParticles;

/// Bodies the picking controller will focus when clicked.
#[derive(Component)]
pub struct Selectable;

/// Draw the body's name projected above it, offset in world units.
#[derive(Component)]
pub struct Labeled {
    pub offset: f32,
}

/// Plugin for scene construction and meteor respawn
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneRegistry>()
            .add_systems(Startup, factory::setup_scene)
            .add_systems(
                Update,
                meteors::respawn_expired_meteors.in_set(SimSet::PostIntegrate),
            );
    }
}
