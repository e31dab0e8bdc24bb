use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

mod config;
mod effects;
mod focus;
mod prefs;
mod registry;
mod scene;
mod sim;
mod trails;
mod ui;

use config::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, OVERVIEW_POSE};
use effects::EffectsPlugin;
use focus::{FocusPlugin, MainCamera};
use scene::ScenePlugin;
use sim::SimPlugin;
use trails::TrailsPlugin;
use ui::UiPlugin;

/// Lighting and camera setup.
fn setup(mut commands: Commands) {
    // Ambient floor so the dark sides of bodies stay readable.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });

    // The sun is the only real light source in the scene.
    commands.spawn((
        PointLight {
            intensity: 5.0e7,
            range: 5000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 1.0,
            far: 10_000.0,
            ..default()
        }),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: OVERVIEW_POSE.focus,
            radius: Some(OVERVIEW_POSE.radius),
            yaw: Some(OVERVIEW_POSE.yaw),
            pitch: Some(OVERVIEW_POSE.pitch),
            zoom_lower_limit: CAMERA_MIN_DISTANCE,
            zoom_upper_limit: Some(CAMERA_MAX_DISTANCE),
            force_update: true,
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, OVERVIEW_POSE.radius, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(SimPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(TrailsPlugin)
        .add_plugins(FocusPlugin)
        .add_plugins(EffectsPlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, setup)
        .run();
}
