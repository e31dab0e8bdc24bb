//! Ambient visual effects: glow pulsing, the lens flare billboard, the
//! wormhole spin, starfield drift, meteor fade and the orbit guide rings.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::config::PLANETS;
use crate::focus::MainCamera;
use crate::scene::{LensFlare, MeteorBody, StarPoint, SunGlow, WormholeParticles, WormholeRing};
use crate::sim::{Lifetime, SimSet, SimulationClock};

pub const GLOW_PULSE_SPEED: f32 = 2.0;
pub const GLOW_PULSE_AMPLITUDE: f32 = 0.05;
pub const GLOW_LAYER_PHASE: f32 = 1.3;

pub const STAR_DRIFT_SPEED: f32 = 2.0;
pub const STAR_WRAP_HEIGHT: f32 = 2000.0;

/// Flare strength for a given camera-to-sun angle.
pub fn flare_visibility(angle: f32, max_angle: f32, max_opacity: f32) -> f32 {
    (1.0 - angle / max_angle).max(0.0) * max_opacity
}

/// System to breathe the sun's glow shells on the simulation clock
pub fn pulse_sun_glow(
    clock: Res<SimulationClock>,
    glows: Query<(&SunGlow, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (glow, handle) in &glows {
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        let phase = clock.tick * GLOW_PULSE_SPEED + glow.layer as f32 * GLOW_LAYER_PHASE;
        let alpha = (glow.base_opacity + phase.sin() * GLOW_PULSE_AMPLITUDE).max(0.0);
        material.base_color = material.base_color.with_alpha(alpha);
    }
}

/// System to billboard the lens flare toward the camera and fade it with
/// the camera's angular distance from the sun
pub fn update_lens_flare(
    cameras: Query<&Transform, With<MainCamera>>,
    mut flares: Query<(&LensFlare, &mut Transform, &MeshMaterial3d<StandardMaterial>), Without<MainCamera>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let to_sun = (-camera.translation).normalize_or_zero();
    let angle = camera.forward().angle_between(to_sun);

    for (flare, mut transform, handle) in &mut flares {
        transform.rotation = camera.rotation;
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        let alpha = flare_visibility(angle, flare.max_angle, flare.max_opacity);
        material.base_color = material.base_color.with_alpha(alpha);
    }
}

/// System to counter-rotate the wormhole ring and its particle shell
pub fn spin_wormhole(
    clock: Res<SimulationClock>,
    mut rings: Query<&mut Transform, (With<WormholeRing>, Without<WormholeParticles>)>,
    mut particles: Query<&mut Transform, (With<WormholeParticles>, Without<WormholeRing>)>,
) {
    for mut transform in &mut rings {
        transform.rotate_local_z(0.02 * clock.time_scale);
    }
    for mut transform in &mut particles {
        transform.rotate_y(-0.01 * clock.time_scale);
    }
}

/// System to drift the starfield upward, wrapping stars that leave the
/// volume back to the bottom at a fresh horizontal position
pub fn drift_starfield(
    clock: Res<SimulationClock>,
    mut stars: Query<&mut Transform, With<StarPoint>>,
) {
    let mut rng = rand::thread_rng();
    for mut transform in &mut stars {
        transform.translation.y += STAR_DRIFT_SPEED * clock.time_scale;
        if transform.translation.y > STAR_WRAP_HEIGHT {
            transform.translation.y = -STAR_WRAP_HEIGHT;
            transform.translation.x = rng.gen_range(-STAR_WRAP_HEIGHT..STAR_WRAP_HEIGHT);
            transform.translation.z = rng.gen_range(-STAR_WRAP_HEIGHT..STAR_WRAP_HEIGHT);
        }
    }
}

/// System to fade each meteor's material with its remaining lifetime
pub fn fade_meteors(
    meteors: Query<(&Lifetime, &MeshMaterial3d<StandardMaterial>), With<MeteorBody>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (lifetime, handle) in &meteors {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = material
                .base_color
                .with_alpha(lifetime.remaining.clamp(0.0, 1.0));
        }
    }
}

/// System to draw the faint planet orbit guide rings
pub fn draw_orbit_guides(mut gizmos: Gizmos) {
    let flat = Quat::from_rotation_x(FRAC_PI_2);
    let color = Color::srgba(1.0, 1.0, 1.0, 0.18);
    for planet in PLANETS {
        gizmos
            .circle(Isometry3d::new(Vec3::ZERO, flat), planet.distance, color)
            .resolution(128);
    }
}

/// Plugin for ambient visual effects
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                pulse_sun_glow,
                update_lens_flare,
                spin_wormhole,
                drift_starfield,
                fade_meteors,
                draw_orbit_guides,
            )
                .in_set(SimSet::PostIntegrate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flare_full_when_looking_at_sun() {
        assert!((flare_visibility(0.0, 1.5, 0.8) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn flare_vanishes_past_max_angle() {
        assert_eq!(flare_visibility(1.5, 1.5, 0.8), 0.0);
        assert_eq!(flare_visibility(3.0, 1.5, 0.8), 0.0);
    }

    #[test]
    fn flare_falls_off_linearly() {
        let half = flare_visibility(0.75, 1.5, 0.8);
        assert!((half - 0.4).abs() < 1e-6);
    }
}
