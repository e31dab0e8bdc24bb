//! Motion integrator: kind-specific closed-form updates applied once per
//! frame to every body's motion state, scaled by the global clock.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

use crate::config::{ROAM_BOUNDARY_RADIUS, ROAM_CLAMP_RADIUS};
use crate::sim::clock::SimulationClock;

/// What a circular orbit revolves around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitCenter {
    Origin,
    Body(Entity),
}

/// Circular orbit state: planets, satellites, ships, asteroids, and the
/// moon/station (whose center is a parent body).
#[derive(Component)]
pub struct CircularOrbit {
    pub center: OrbitCenter,
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
}

/// Elliptical orbit with the focus at the origin (the comet). The vertical
/// bob term lifts the body out of the ecliptic at twice the orbital phase.
#[derive(Component)]
pub struct EllipticalOrbit {
    pub angle: f32,
    pub speed: f32,
    pub semi_major_axis: f32,
    pub eccentricity: f32,
    pub bob_amplitude: f32,
}

/// Straight-line flight (meteors).
#[derive(Component)]
pub struct Ballistic {
    pub velocity: Vec3,
}

/// Remaining lifetime fraction in [0, 1]; the owner is destroyed and
/// replaced when it reaches zero.
#[derive(Component)]
pub struct Lifetime {
    pub remaining: f32,
    pub decay: f32,
}

/// Free flight with periodic random re-targeting and an elastic bounce off
/// the invisible boundary sphere (UFOs).
#[derive(Component)]
pub struct FreeRoam {
    pub velocity: Vec3,
    pub retarget_interval: u32,
    pub frames_since_retarget: u32,
}

/// Constant self-rotation about the body's vertical axis.
#[derive(Component)]
pub struct Spin {
    pub rate: f32,
}

/// Constant self-rotation about all three axes (asteroids).
#[derive(Component)]
pub struct Tumble {
    pub rates: Vec3,
}

/// Gentle vertical wander reflected at a height limit (ships).
#[derive(Component)]
pub struct VerticalBob {
    pub speed: f32,
    pub limit: f32,
}

/// Marker: orient the body along its direction of travel (ships, comet).
#[derive(Component)]
pub struct FaceTravel;

/// Marker: keep the body pointed at its orbit center (the station).
#[derive(Component)]
pub struct FaceOrbitCenter;

/// Marker for bodies that other bodies orbit (the planets). Lets the
/// parented-orbit pass read parent transforms disjointly from the child
/// transforms it writes.
#[derive(Component)]
pub struct OrbitAnchor;

/// Position on a circle of `radius` around `center`, in the XZ plane.
pub fn circular_position(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Polar conic-section radius with the focus at the origin.
pub fn conic_radius(semi_major_axis: f32, eccentricity: f32, angle: f32) -> f32 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * angle.cos())
}

/// Full comet position: conic radius in the XZ plane plus the vertical bob.
pub fn elliptical_position(
    semi_major_axis: f32,
    eccentricity: f32,
    bob_amplitude: f32,
    angle: f32,
) -> Vec3 {
    let r = conic_radius(semi_major_axis, eccentricity, angle);
    Vec3::new(
        r * angle.cos(),
        (angle * 2.0).sin() * bob_amplitude,
        r * angle.sin(),
    )
}

/// Clamp a position back inside the boundary sphere and reflect the
/// velocity, as an elastic bounce.
pub fn contain_within_boundary(position: &mut Vec3, velocity: &mut Vec3) {
    if position.length() > ROAM_BOUNDARY_RADIUS {
        *position = position.normalize() * ROAM_CLAMP_RADIUS;
        *velocity = -*velocity;
    }
}

/// A fresh roam velocity within the configured bounds.
pub fn random_roam_velocity(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-2.5..2.5),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-2.5..2.5),
    )
}

fn travel_rotation(angle: f32) -> Quat {
    Quat::from_rotation_y(-(angle + FRAC_PI_2))
}

/// Advance every origin-centered circular orbit. Only X and Z are written:
/// ships keep their bobbed height and asteroids their band offset.
pub fn update_circular_orbits(
    clock: Res<SimulationClock>,
    mut orbits: Query<(&mut Transform, &mut CircularOrbit, Option<&FaceTravel>)>,
) {
    for (mut transform, mut orbit, face_travel) in &mut orbits {
        if orbit.center != OrbitCenter::Origin {
            continue;
        }
        orbit.angle += orbit.speed * clock.time_scale;
        let position = circular_position(Vec3::ZERO, orbit.radius, orbit.angle);
        transform.translation.x = position.x;
        transform.translation.z = position.z;
        if face_travel.is_some() {
            transform.rotation = travel_rotation(orbit.angle);
        }
    }
}

/// Advance orbits centered on another body, after that body has been
/// placed this frame.
pub fn update_parented_orbits(
    clock: Res<SimulationClock>,
    anchors: Query<&Transform, With<OrbitAnchor>>,
    mut orbits: Query<
        (&mut Transform, &mut CircularOrbit, Option<&FaceOrbitCenter>),
        Without<OrbitAnchor>,
    >,
) {
    for (mut transform, mut orbit, face_center) in &mut orbits {
        let OrbitCenter::Body(parent) = orbit.center else {
            continue;
        };
        let Ok(parent_transform) = anchors.get(parent) else {
            continue;
        };
        orbit.angle += orbit.speed * clock.time_scale;
        transform.translation =
            circular_position(parent_transform.translation, orbit.radius, orbit.angle);
        if face_center.is_some() {
            let center = parent_transform.translation;
            transform.look_at(center, Vec3::Y);
        }
    }
}

/// Advance the comet along its conic.
pub fn update_elliptical_orbits(
    clock: Res<SimulationClock>,
    mut orbits: Query<(&mut Transform, &mut EllipticalOrbit, Option<&FaceTravel>)>,
) {
    for (mut transform, mut orbit, face_travel) in &mut orbits {
        orbit.angle += orbit.speed * clock.time_scale;
        transform.translation = elliptical_position(
            orbit.semi_major_axis,
            orbit.eccentricity,
            orbit.bob_amplitude,
            orbit.angle,
        );
        if face_travel.is_some() {
            transform.rotation = travel_rotation(orbit.angle);
        }
    }
}

/// Advance ballistic bodies and burn down their lifetime. Expired bodies
/// are respawned by the scene module.
pub fn update_ballistic(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Transform, &Ballistic, &mut Lifetime)>,
) {
    for (mut transform, ballistic, mut lifetime) in &mut bodies {
        transform.translation += ballistic.velocity * clock.time_scale;
        lifetime.remaining -= lifetime.decay * clock.time_scale;
    }
}

/// Advance free-roaming bodies, re-targeting their velocity on a fixed
/// frame cadence and bouncing off the boundary sphere.
pub fn update_free_roam(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Transform, &mut FreeRoam)>,
) {
    let mut rng = rand::thread_rng();
    for (mut transform, mut roam) in &mut bodies {
        roam.frames_since_retarget += 1;
        if roam.frames_since_retarget >= roam.retarget_interval {
            roam.velocity = random_roam_velocity(&mut rng);
            roam.frames_since_retarget = 0;
        }
        transform.translation += roam.velocity * clock.time_scale;
        let mut position = transform.translation;
        let mut velocity = roam.velocity;
        contain_within_boundary(&mut position, &mut velocity);
        transform.translation = position;
        roam.velocity = velocity;
    }
}

/// Vertical wander for ships, reflected at the height limit.
pub fn update_vertical_bob(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Transform, &mut VerticalBob)>,
) {
    for (mut transform, mut bob) in &mut bodies {
        transform.translation.y += bob.speed * clock.time_scale;
        if transform.translation.y.abs() > bob.limit {
            bob.speed = -bob.speed;
        }
    }
}

/// Constant vertical-axis self-rotation. Bodies whose rotation is driven
/// by travel direction or orbit-center facing are excluded.
pub fn update_spin(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Transform, &Spin), (Without<FaceTravel>, Without<FaceOrbitCenter>)>,
) {
    for (mut transform, spin) in &mut bodies {
        transform.rotate_y(spin.rate * clock.time_scale);
    }
}

/// Three-axis tumbling for asteroids.
pub fn update_tumble(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut Transform, &Tumble)>,
) {
    for (mut transform, tumble) in &mut bodies {
        transform.rotate_x(tumble.rates.x * clock.time_scale);
        transform.rotate_y(tumble.rates.y * clock.time_scale);
        transform.rotate_z(tumble.rates.z * clock.time_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COMET_ECCENTRICITY, COMET_SEMI_MAJOR_AXIS};

    #[test]
    fn circular_position_stays_on_radius() {
        for i in 0..32 {
            let angle = i as f32 * 0.37;
            let p = circular_position(Vec3::ZERO, 400.0, angle);
            assert!((p.length() - 400.0).abs() < 1e-3);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn conic_radius_matches_perihelion_scenario() {
        // a = 1400, e = 0.7, angle = 0 -> a(1 - e^2) / (1 + e)
        let r = conic_radius(COMET_SEMI_MAJOR_AXIS, COMET_ECCENTRICITY, 0.0);
        assert!((r - 420.0).abs() < 1e-2);

        let p = elliptical_position(COMET_SEMI_MAJOR_AXIS, COMET_ECCENTRICITY, 100.0, 0.0);
        assert!((p.x - 420.0).abs() < 1e-2);
        assert!(p.y.abs() < 1e-4);
        assert!(p.z.abs() < 1e-4);
    }

    #[test]
    fn conic_radius_spans_perihelion_to_aphelion() {
        let near = conic_radius(1400.0, 0.7, 0.0);
        let far = conic_radius(1400.0, 0.7, std::f32::consts::PI);
        assert!(near < far);
        // r(pi) = a(1 - e^2)/(1 - e) = a(1 + e)
        assert!((far - 1400.0 * 1.7).abs() < 1e-1);
    }

    #[test]
    fn boundary_containment_clamps_and_reflects() {
        let mut position = Vec3::new(2100.0, 0.0, 0.0);
        let mut velocity = Vec3::new(3.0, 1.0, -2.0);
        contain_within_boundary(&mut position, &mut velocity);
        assert!((position.length() - ROAM_CLAMP_RADIUS).abs() < 1e-2);
        assert_eq!(velocity, Vec3::new(-3.0, -1.0, 2.0));

        // Inside the boundary nothing changes.
        let mut inside = Vec3::new(100.0, 50.0, -30.0);
        let mut v = Vec3::ONE;
        contain_within_boundary(&mut inside, &mut v);
        assert_eq!(inside, Vec3::new(100.0, 50.0, -30.0));
        assert_eq!(v, Vec3::ONE);
    }

    #[test]
    fn boundary_never_exceeded_by_more_than_one_step() {
        let mut rng = rand::thread_rng();
        let mut position = Vec3::new(1890.0, 0.0, 0.0);
        let mut velocity = random_roam_velocity(&mut rng);
        for _ in 0..10_000 {
            position += velocity;
            let step = velocity.length();
            contain_within_boundary(&mut position, &mut velocity);
            assert!(position.length() <= ROAM_BOUNDARY_RADIUS + step);
        }
    }

    #[test]
    fn circular_orbit_accumulates_angle_per_step() {
        let mut app = App::new();
        app.init_resource::<SimulationClock>();
        app.add_systems(Update, update_circular_orbits);

        let body = app
            .world_mut()
            .spawn((
                Transform::default(),
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: 400.0,
                    angle: 0.25,
                    speed: 0.01,
                },
            ))
            .id();

        for _ in 0..50 {
            app.update();
        }

        let orbit = app.world().get::<CircularOrbit>(body).unwrap();
        assert!((orbit.angle - (0.25 + 50.0 * 0.01)).abs() < 1e-5);

        let transform = app.world().get::<Transform>(body).unwrap();
        assert!((transform.translation.length() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn zero_time_scale_is_a_pure_pause() {
        let mut app = App::new();
        app.insert_resource(SimulationClock {
            time_scale: 0.0,
            tick: 0.0,
        });
        app.add_systems(
            Update,
            (
                update_circular_orbits,
                update_elliptical_orbits,
                update_ballistic,
                update_free_roam,
                update_vertical_bob,
            ),
        );

        let world = app.world_mut();
        let circular = world
            .spawn((
                Transform::from_xyz(400.0, 0.0, 0.0),
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: 400.0,
                    angle: 0.0,
                    speed: 0.02,
                },
            ))
            .id();
        let comet = world
            .spawn((
                Transform::from_xyz(420.0, 0.0, 0.0),
                EllipticalOrbit {
                    angle: 0.0,
                    speed: 0.008,
                    semi_major_axis: 1400.0,
                    eccentricity: 0.7,
                    bob_amplitude: 100.0,
                },
            ))
            .id();
        let meteor = world
            .spawn((
                Transform::from_xyz(2000.0, 100.0, 0.0),
                Ballistic {
                    velocity: Vec3::new(-15.0, 1.0, 0.0),
                },
                Lifetime {
                    remaining: 1.0,
                    decay: 0.01,
                },
            ))
            .id();
        let ufo = world
            .spawn((
                Transform::from_xyz(500.0, 20.0, -300.0),
                FreeRoam {
                    velocity: Vec3::new(2.0, 0.5, -1.0),
                    retarget_interval: 100,
                    frames_since_retarget: 0,
                },
            ))
            .id();

        let before: Vec<Vec3> = [circular, comet, meteor, ufo]
            .iter()
            .map(|e| app.world().get::<Transform>(*e).unwrap().translation)
            .collect();

        for _ in 0..25 {
            app.update();
        }

        for (entity, original) in [circular, comet, meteor, ufo].iter().zip(before) {
            let now = app.world().get::<Transform>(*entity).unwrap().translation;
            assert_eq!(now, original);
        }
        // Lifetime is frozen too, so no respawn churn while paused.
        let lifetime = app.world().get::<Lifetime>(meteor).unwrap();
        assert_eq!(lifetime.remaining, 1.0);
    }

    #[test]
    fn parented_orbit_tracks_moving_anchor() {
        let mut app = App::new();
        app.init_resource::<SimulationClock>();
        app.add_systems(
            Update,
            (
                update_circular_orbits,
                update_parented_orbits.after(update_circular_orbits),
            ),
        );

        let world = app.world_mut();
        let planet = world
            .spawn((
                Transform::from_xyz(400.0, 0.0, 0.0),
                OrbitAnchor,
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: 400.0,
                    angle: 0.0,
                    speed: 0.01,
                },
            ))
            .id();
        let moon = world
            .spawn((
                Transform::default(),
                CircularOrbit {
                    center: OrbitCenter::Body(planet),
                    radius: 40.0,
                    angle: 0.0,
                    speed: 0.05,
                },
            ))
            .id();

        for _ in 0..20 {
            app.update();
        }

        let planet_pos = app.world().get::<Transform>(planet).unwrap().translation;
        let moon_pos = app.world().get::<Transform>(moon).unwrap().translation;
        assert!(((moon_pos - planet_pos).length() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_bob_reflects_at_limit() {
        let mut app = App::new();
        app.init_resource::<SimulationClock>();
        app.add_systems(Update, update_vertical_bob);

        let ship = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 99.5, 0.0),
                VerticalBob {
                    speed: 1.0,
                    limit: 100.0,
                },
            ))
            .id();

        for _ in 0..400 {
            app.update();
            let y = app.world().get::<Transform>(ship).unwrap().translation.y;
            assert!(y.abs() <= 101.0);
        }
    }
}
