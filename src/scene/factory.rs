//! Startup entity factory.
//!
//! Builds the whole scene from the tables in `config`: sun and glow shells,
//! the nine planets with rings and atmospheres, the moon and station around
//! Earth, satellites, ships, the asteroid belt, the comet, meteors, UFOs,
//! nebula clusters, the wormhole, the starfield and the lens flare.

use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::{
    ASTEROID_BELT_INNER, ASTEROID_BELT_OUTER, ASTEROID_COUNT, COMET_BOB_AMPLITUDE,
    COMET_ECCENTRICITY, COMET_SEMI_MAJOR_AXIS, COMET_SPEED, METEOR_COUNT, MOON_ORBIT_RADIUS,
    MOON_SPEED, NEBULA_COUNT, PARENT_PLANET_INDEX, PLANETS, SATELLITES, SHIPS, STAR_COUNT,
    STATION_ORBIT_RADIUS, STATION_SPEED, ShipStyle, UFO_COUNT, WORMHOLE_POSITION,
};
use crate::registry::{BodyKind, SceneRegistry};
use crate::scene::meteors::spawn_meteor;
use crate::scene::{Labeled, LensFlare, Selectable, StarPoint, Sun, SunGlow, WormholeParticles, WormholeRing};
use crate::sim::{
    CircularOrbit, EllipticalOrbit, FaceOrbitCenter, FaceTravel, FreeRoam, OrbitAnchor,
    OrbitCenter, Spin, Tumble, VerticalBob, circular_position, elliptical_position,
};
use crate::trails::Trail;

fn srgb(rgb: (u8, u8, u8)) -> Color {
    Color::srgb_u8(rgb.0, rgb.1, rgb.2)
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<SceneRegistry>,
) {
    let mut rng = rand::thread_rng();

    spawn_starfield(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    spawn_sun(&mut commands, &mut meshes, &mut materials, &mut registry);
    spawn_lens_flare(&mut commands, &mut meshes, &mut materials);

    let planets = spawn_planets(&mut commands, &mut meshes, &mut materials, &mut registry);
    let earth = planets[PARENT_PLANET_INDEX];
    spawn_moon(&mut commands, &mut meshes, &mut materials, &mut registry, earth);
    spawn_station(&mut commands, &mut meshes, &mut materials, &mut registry, earth);

    spawn_satellites(&mut commands, &mut meshes, &mut materials, &mut registry);
    spawn_ships(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    spawn_asteroids(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    spawn_comet(&mut commands, &mut meshes, &mut materials, &mut registry);
    for _ in 0..METEOR_COUNT {
        spawn_meteor(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    }
    spawn_ufos(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    spawn_nebulas(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);
    spawn_wormhole(&mut commands, &mut meshes, &mut materials, &mut registry, &mut rng);

    info!("Scene populated: {} bodies registered", registry.total());
}

fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
) {
    let core = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(50.0).mesh().ico(6).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0xFF, 0xDD, 0x00),
                emissive: LinearRgba::rgb(8.0, 5.6, 0.8),
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Sun,
            Spin { rate: 0.002 },
            Name::new("Sun"),
        ))
        .id();

    // Two pulsing glow shells, phase-offset by layer.
    for (layer, radius, base_opacity) in [(0usize, 70.0, 0.2), (1usize, 100.0, 0.1)] {
        let shell = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(radius).mesh().ico(4).unwrap())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba_u8(0xFF, 0xAA, 0x00, (base_opacity * 255.0) as u8),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
                SunGlow { layer, base_opacity },
                Pickable::IGNORE,
            ))
            .id();
        commands.entity(core).add_child(shell);
    }

    registry.register(core, BodyKind::Star);
}

fn spawn_lens_flare(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(200.0, 200.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.9, 0.6, 0.0),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        LensFlare {
            max_angle: 1.5,
            max_opacity: 0.8,
        },
        Pickable::IGNORE,
    ));
}

fn spawn_planets(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
) -> Vec<Entity> {
    let mut planets = Vec::with_capacity(PLANETS.len());
    for (index, config) in PLANETS.iter().enumerate() {
        // Spread the starting phases evenly around the sun.
        let angle = index as f32 / PLANETS.len() as f32 * TAU;
        let color = srgb(config.rgb);

        let mut planet = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(config.radius).mesh().ico(5).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.9,
                metallic: 0.05,
                emissive: color.to_linear() * 0.05,
                ..default()
            })),
            Transform::from_translation(circular_position(Vec3::ZERO, config.distance, angle)),
            CircularOrbit {
                center: OrbitCenter::Origin,
                radius: config.distance,
                angle,
                speed: config.speed,
            },
            Spin { rate: 0.01 },
            OrbitAnchor,
            Selectable,
            Labeled {
                offset: config.radius + 20.0,
            },
            Name::new(config.name),
        ));

        planet.with_children(|parent| {
            if config.has_rings {
                parent.spawn((
                    Mesh3d(meshes.add(Annulus::new(config.radius * 1.5, config.radius * 2.5))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgba_u8(0xC9, 0xB8, 0xA0, 0x99),
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        double_sided: true,
                        cull_mode: None,
                        ..default()
                    })),
                    Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                ));
            }
            if let Some(atmosphere) = &config.atmosphere {
                parent.spawn((
                    Mesh3d(
                        meshes.add(
                            Sphere::new(config.radius * atmosphere.scale)
                                .mesh()
                                .ico(4)
                                .unwrap(),
                        ),
                    ),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: srgb(atmosphere.rgb).with_alpha(atmosphere.opacity),
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        ..default()
                    })),
                    Transform::default(),
                ));
            }
        });

        let id = planet.id();
        registry.register(id, BodyKind::Planet);
        planets.push(id);
    }
    planets
}

fn spawn_moon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    earth: Entity,
) {
    let moon = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(7.0).mesh().ico(4).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0xBB, 0xBB, 0xBB),
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::default(),
            CircularOrbit {
                center: OrbitCenter::Body(earth),
                radius: MOON_ORBIT_RADIUS,
                angle: 0.0,
                speed: MOON_SPEED,
            },
            Spin { rate: 0.01 },
            Name::new("Moon"),
        ))
        .id();
    registry.register(moon, BodyKind::Moon);
}

fn spawn_station(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    earth: Entity,
) {
    let hull = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xCC, 0xCC, 0xDD),
        metallic: 0.8,
        perceptual_roughness: 0.3,
        ..default()
    });
    let panel = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0x44, 0x88),
        metallic: 0.4,
        perceptual_roughness: 0.2,
        emissive: LinearRgba::rgb(0.02, 0.05, 0.15),
        ..default()
    });

    let station = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            CircularOrbit {
                center: OrbitCenter::Body(earth),
                radius: STATION_ORBIT_RADIUS,
                angle: PI,
                speed: STATION_SPEED,
            },
            FaceOrbitCenter,
            Trail::new(120, Color::srgba(0.6, 0.8, 1.0, 0.5)),
            Name::new("Station"),
        ))
        .with_children(|parent| {
            // Main habitat tube.
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.8, 6.0))),
                MeshMaterial3d(hull.clone()),
                Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2)),
            ));
            // Cross module.
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.6, 4.0))),
                MeshMaterial3d(hull),
                Transform::default(),
            ));
            // Solar arrays.
            for side in [-1.0, 1.0] {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(2.0, 0.1, 8.0))),
                    MeshMaterial3d(panel.clone()),
                    Transform::from_xyz(side * 4.5, 0.0, 0.0),
                ));
            }
        })
        .id();
    registry.register(station, BodyKind::Station);
}

fn spawn_satellites(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
) {
    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xAA, 0xAA, 0xB0),
        metallic: 0.9,
        perceptual_roughness: 0.35,
        ..default()
    });
    let panel_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x11, 0x33, 0x77),
        metallic: 0.3,
        perceptual_roughness: 0.2,
        ..default()
    });

    for (index, config) in SATELLITES.iter().enumerate() {
        let angle = index as f32 / SATELLITES.len() as f32 * TAU;
        let size = config.size;
        let satellite = commands
            .spawn((
                Transform::from_translation(circular_position(Vec3::ZERO, config.distance, angle)),
                Visibility::default(),
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: config.distance,
                    angle,
                    speed: config.speed,
                },
                Spin { rate: 0.02 },
                Name::new(format!("Satellite {}", index + 1)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(size * 2.0, size, size))),
                    MeshMaterial3d(body_material.clone()),
                    Transform::default(),
                ));
                for side in [-1.0, 1.0] {
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::new(size * 4.0, size * 0.2, size * 2.0))),
                        MeshMaterial3d(panel_material.clone()),
                        Transform::from_xyz(side * size * 3.0, 0.0, 0.0),
                    ));
                }
                parent.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.2, size * 2.0))),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_xyz(0.0, size * 1.5, 0.0),
                ));
            })
            .id();
        registry.register(satellite, BodyKind::Satellite);
    }
}

fn spawn_ships(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    for (index, config) in SHIPS.iter().enumerate() {
        let angle = index as f32 / SHIPS.len() as f32 * TAU + PI;
        let mut transform =
            Transform::from_translation(circular_position(Vec3::ZERO, config.distance, angle));
        transform.translation.y = rng.gen_range(-25.0..25.0);

        let (name, trail_color) = match config.style {
            ShipStyle::Explorer => ("Explorer", Color::srgba(1.0, 0.6, 0.2, 0.5)),
            ShipStyle::Shuttle => ("Shuttle", Color::srgba(0.4, 1.0, 0.6, 0.5)),
        };

        let ship = commands
            .spawn((
                transform,
                Visibility::default(),
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: config.distance,
                    angle,
                    speed: config.speed,
                },
                FaceTravel,
                VerticalBob {
                    speed: rng.gen_range(-0.005..0.005),
                    limit: 100.0,
                },
                Trail::new(80, trail_color),
                Name::new(name),
            ))
            .with_children(|parent| match config.style {
                ShipStyle::Explorer => {
                    parent.spawn((
                        Mesh3d(meshes.add(Cylinder::new(3.0, 15.0))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgb_u8(0xD0, 0xD0, 0xD8),
                            metallic: 0.7,
                            perceptual_roughness: 0.3,
                            ..default()
                        })),
                        Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                    ));
                    parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(3.5).mesh().ico(3).unwrap())),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgba(0.4, 0.7, 1.0, 0.7),
                            alpha_mode: AlphaMode::Blend,
                            metallic: 0.2,
                            ..default()
                        })),
                        Transform::from_xyz(8.0, 0.0, 0.0),
                    ));
                    parent.spawn((
                        Mesh3d(meshes.add(Cone::new(2.0, 4.0))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgb_u8(0xFF, 0x88, 0x22),
                            emissive: LinearRgba::rgb(2.0, 0.8, 0.1),
                            unlit: true,
                            ..default()
                        })),
                        Transform::from_xyz(-9.0, 0.0, 0.0)
                            .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                    ));
                }
                ShipStyle::Shuttle => {
                    parent.spawn((
                        Mesh3d(meshes.add(Cone::new(4.0, 12.0))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: Color::srgb_u8(0xE8, 0xE8, 0xF0),
                            metallic: 0.5,
                            perceptual_roughness: 0.4,
                            ..default()
                        })),
                        Transform::from_rotation(Quat::from_rotation_z(-FRAC_PI_2)),
                    ));
                    for side in [-1.0, 1.0] {
                        parent.spawn((
                            Mesh3d(meshes.add(Cuboid::new(6.0, 1.0, 8.0))),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: Color::srgb_u8(0xB0, 0x30, 0x30),
                                metallic: 0.5,
                                perceptual_roughness: 0.4,
                                ..default()
                            })),
                            Transform::from_xyz(-2.0, 0.0, side * 5.0),
                        ));
                    }
                }
            })
            .id();
        registry.register(ship, BodyKind::Ship);
    }
}

fn spawn_asteroids(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    // One coarse unit sphere shared by the whole belt; per-rock variety
    // comes from non-uniform scale and tumbling.
    let mesh = meshes.add(Sphere::new(1.0).mesh().ico(1).unwrap());
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x8B, 0x7D, 0x6B),
        perceptual_roughness: 1.0,
        ..default()
    });

    for _ in 0..ASTEROID_COUNT {
        let distance = rng.gen_range(ASTEROID_BELT_INNER..ASTEROID_BELT_OUTER);
        let angle = rng.gen_range(0.0..TAU);
        let mut transform = Transform::from_translation(circular_position(
            Vec3::ZERO,
            distance,
            angle,
        ));
        transform.translation.y = rng.gen_range(-10.0..10.0);
        transform.scale = Vec3::new(
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.5..2.0),
        );

        let asteroid = commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                transform,
                CircularOrbit {
                    center: OrbitCenter::Origin,
                    radius: distance,
                    angle,
                    speed: rng.gen_range(0.003..0.005),
                },
                Tumble {
                    rates: Vec3::new(
                        rng.gen_range(-0.01..0.01),
                        rng.gen_range(-0.01..0.01),
                        rng.gen_range(-0.01..0.01),
                    ),
                },
            ))
            .id();
        registry.register(asteroid, BodyKind::Asteroid);
    }
}

fn spawn_comet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
) {
    let start = elliptical_position(
        COMET_SEMI_MAJOR_AXIS,
        COMET_ECCENTRICITY,
        COMET_BOB_AMPLITUDE,
        0.0,
    );
    let comet = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(4.0).mesh().ico(3).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(0x88, 0xCC, 0xFF),
                emissive: LinearRgba::rgb(0.6, 1.2, 2.0),
                ..default()
            })),
            Transform::from_translation(start),
            EllipticalOrbit {
                angle: 0.0,
                speed: COMET_SPEED,
                semi_major_axis: COMET_SEMI_MAJOR_AXIS,
                eccentricity: COMET_ECCENTRICITY,
                bob_amplitude: COMET_BOB_AMPLITUDE,
            },
            FaceTravel,
            Trail::new(100, Color::srgba(0.53, 0.8, 1.0, 0.6)),
            Name::new("Comet"),
        ))
        .id();
    registry.register(comet, BodyKind::Comet);
}

fn spawn_ufos(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    let saucer_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x99, 0xA0, 0xAA),
        metallic: 0.9,
        perceptual_roughness: 0.25,
        ..default()
    });
    let dome_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.3, 1.0, 0.5, 0.7),
        alpha_mode: AlphaMode::Blend,
        emissive: LinearRgba::rgb(0.2, 1.0, 0.4),
        ..default()
    });
    let light_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xFF, 0x22, 0xCC),
        emissive: LinearRgba::rgb(2.5, 0.3, 2.0),
        unlit: true,
        ..default()
    });

    for index in 0..UFO_COUNT {
        let transform = Transform::from_xyz(
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-1000.0..1000.0),
        );
        let ufo = commands
            .spawn((
                transform,
                Visibility::default(),
                FreeRoam {
                    velocity: Vec3::new(
                        rng.gen_range(-1.0..1.0),
                        rng.gen_range(-1.0..1.0),
                        rng.gen_range(-1.0..1.0),
                    ),
                    retarget_interval: 100,
                    frames_since_retarget: 0,
                },
                Spin { rate: 0.1 },
                Name::new(format!("UFO {}", index + 1)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(5.0).mesh().ico(3).unwrap())),
                    MeshMaterial3d(saucer_material.clone()),
                    Transform::from_scale(Vec3::new(1.0, 0.3, 1.0)),
                ));
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(2.0).mesh().ico(3).unwrap())),
                    MeshMaterial3d(dome_material.clone()),
                    Transform::from_xyz(0.0, 1.5, 0.0),
                ));
                for light in 0..8 {
                    let angle = light as f32 / 8.0 * TAU;
                    parent.spawn((
                        Mesh3d(meshes.add(Sphere::new(0.5).mesh().ico(1).unwrap())),
                        MeshMaterial3d(light_material.clone()),
                        Transform::from_xyz(angle.cos() * 4.5, 0.0, angle.sin() * 4.5),
                    ));
                }
            })
            .id();
        registry.register(ufo, BodyKind::Ufo);
    }
}

fn spawn_nebulas(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    let quad = meshes.add(Rectangle::new(400.0, 400.0));
    let palette = [
        (0x44u8, 0x00u8, 0x88u8),
        (0x00, 0x44, 0x88),
        (0x88, 0x00, 0x44),
    ];

    for index in 0..NEBULA_COUNT {
        let angle = index as f32 / NEBULA_COUNT as f32 * TAU;
        let position = Vec3::new(
            angle.cos() * 2000.0,
            rng.gen_range(-400.0..400.0),
            angle.sin() * 2000.0,
        );
        let rgb = palette[index % palette.len()];
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba_u8(rgb.0, rgb.1, rgb.2, 8),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        let nebula = commands
            .spawn((
                Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
                Visibility::default(),
                Name::new(format!("Nebula {}", index + 1)),
            ))
            .with_children(|parent| {
                for _ in 0..50 {
                    parent.spawn((
                        Mesh3d(quad.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(
                            rng.gen_range(-300.0..300.0),
                            rng.gen_range(-100.0..100.0),
                            rng.gen_range(-300.0..300.0),
                        )
                        .with_rotation(Quat::from_rotation_z(rng.gen_range(0.0..PI)))
                        .with_scale(Vec3::splat(rng.gen_range(1.0..2.0))),
                        Pickable::IGNORE,
                    ));
                }
            })
            .id();
        registry.register(nebula, BodyKind::Nebula);
    }
}

fn spawn_wormhole(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    let particle_mesh = meshes.add(Sphere::new(1.0).mesh().ico(1).unwrap());
    let particle_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xDD, 0x44, 0xFF),
        emissive: LinearRgba::rgb(2.0, 0.5, 3.0),
        unlit: true,
        ..default()
    });

    let wormhole = commands
        .spawn((
            Transform::from_translation(WORMHOLE_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
            Visibility::default(),
            Name::new("Wormhole"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Torus {
                    minor_radius: 8.0,
                    major_radius: 40.0,
                })),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(0.6, 0.2, 1.0, 0.5),
                    alpha_mode: AlphaMode::Blend,
                    emissive: LinearRgba::rgb(1.5, 0.4, 3.0),
                    unlit: true,
                    ..default()
                })),
                Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                WormholeRing,
                Pickable::IGNORE,
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(30.0).mesh().ico(4).unwrap())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgba(0.2, 0.9, 1.0, 0.3),
                    alpha_mode: AlphaMode::Add,
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
                Pickable::IGNORE,
            ));
            parent
                .spawn((Transform::default(), Visibility::default(), WormholeParticles))
                .with_children(|shell| {
                    for _ in 0..200 {
                        let theta = rng.gen_range(0.0..TAU);
                        let phi = rng.gen_range(0.0..PI);
                        let r = rng.gen_range(50.0..150.0);
                        shell.spawn((
                            Mesh3d(particle_mesh.clone()),
                            MeshMaterial3d(particle_material.clone()),
                            Transform::from_xyz(
                                r * phi.sin() * theta.cos(),
                                r * phi.cos(),
                                r * phi.sin() * theta.sin(),
                            ),
                            Pickable::IGNORE,
                        ));
                    }
                });
        })
        .id();
    registry.register(wormhole, BodyKind::Wormhole);
}

fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut SceneRegistry,
    rng: &mut impl Rng,
) {
    let mesh = meshes.add(Sphere::new(2.0).mesh().ico(0).unwrap());
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    for _ in 0..STAR_COUNT {
        let star = commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(
                    rng.gen_range(-2000.0..2000.0),
                    rng.gen_range(-2000.0..2000.0),
                    rng.gen_range(-2000.0..2000.0),
                ),
                StarPoint,
                Pickable::IGNORE,
            ))
            .id();
        registry.register(star, BodyKind::Star);
    }
}
