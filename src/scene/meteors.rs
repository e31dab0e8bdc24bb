//! Meteor spawning and respawn.
//!
//! Meteors fly ballistically inward from a random point on an outer shell
//! and burn down a lifetime fraction; when it reaches zero the body is
//! destroyed and replaced, so the population count stays constant.

use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::registry::{BodyKind, SceneRegistry};
use crate::scene::MeteorBody;
use crate::sim::{Ballistic, Lifetime};

pub const METEOR_SPEED: f32 = 15.0;
pub const METEOR_LIFETIME_DECAY: f32 = 0.01;

/// A fresh spawn state: a position on the outer shell and a velocity aimed
/// roughly back across the system center.
pub fn meteor_spawn_state(rng: &mut impl Rng) -> (Vec3, Vec3) {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(2000.0..2500.0);
    let position = Vec3::new(
        angle.cos() * distance,
        rng.gen_range(-500.0..500.0),
        angle.sin() * distance,
    );
    let heading = angle + PI + rng.gen_range(-0.25..0.25);
    let velocity = Vec3::new(
        heading.cos() * METEOR_SPEED,
        rng.gen_range(-2.5..2.5),
        heading.sin() * METEOR_SPEED,
    );
    (position, velocity)
}

/// Spawn one meteor and register it. Each meteor gets its own material so
/// the lifetime fade never bleeds across bodies.
pub fn spawn_meteor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) -> Entity {
    let (position, velocity) = meteor_spawn_state(rng);
    let meteor = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(1.5).mesh().ico(2).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 0.67, 0.0, 1.0),
                emissive: LinearRgba::rgb(4.0, 2.5, 0.2),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::from_translation(position),
            Ballistic { velocity },
            Lifetime {
                remaining: 1.0,
                decay: METEOR_LIFETIME_DECAY,
            },
            MeteorBody,
            Pickable::IGNORE,
        ))
        .id();
    registry.register(meteor, BodyKind::Meteor);
    meteor
}

/// System to replace expired meteors after the integrator has burned
/// their lifetime down
pub fn respawn_expired_meteors(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<SceneRegistry>,
    expired: Query<(Entity, &Lifetime), With<MeteorBody>>,
) {
    let mut rng = rand::thread_rng();
    for (entity, lifetime) in &expired {
        if lifetime.remaining > 0.0 {
            continue;
        }
        registry.remove(entity);
        commands.entity(entity).despawn();
        spawn_meteor(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut registry,
            &mut rng,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_state_starts_on_outer_shell() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (position, _) = meteor_spawn_state(&mut rng);
            let planar = Vec3::new(position.x, 0.0, position.z).length();
            assert!((2000.0..2500.0).contains(&planar));
            assert!(position.y.abs() <= 500.0);
        }
    }

    #[test]
    fn spawn_velocity_points_back_across_the_center() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (position, velocity) = meteor_spawn_state(&mut rng);
            let inward = -Vec3::new(position.x, 0.0, position.z).normalize();
            let planar_velocity = Vec3::new(velocity.x, 0.0, velocity.z).normalize();
            // Heading jitter is at most 0.25 rad off dead center.
            assert!(inward.dot(planar_velocity) > (0.25f32).cos() - 1e-3);
            let speed = Vec3::new(velocity.x, 0.0, velocity.z).length();
            assert!((speed - METEOR_SPEED).abs() < 1e-3);
        }
    }
}
