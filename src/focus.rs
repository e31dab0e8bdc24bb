//! Picking and focus control.
//!
//! Maps pointer clicks to the nearest intersected body (intersection
//! testing is delegated to the mesh picking backend), tracks the single
//! focused body, retargets the orbit camera toward it, and drives the
//! keyboard camera presets with an eased tween.

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::config::{CAMERA_PRESETS, CameraPose, OVERVIEW_POSE};
use crate::registry::SceneRegistry;
use crate::scene::Selectable;
use crate::sim::SimSet;
use crate::ui::UiState;

/// Marker for the scene camera.
#[derive(Component)]
pub struct MainCamera;

/// Camera distance held while following a focused body.
pub const FOCUS_RADIUS: f32 = 300.0;

/// Duration of a preset camera jump.
pub const PRESET_TWEEN_SECONDS: f32 = 1.6;

/// At most one focused body, process-wide.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(Entity),
}

impl FocusState {
    /// Apply a click outcome: a hit focuses the hit body (last hit wins),
    /// a miss clears any existing focus.
    pub fn apply_click(&mut self, hit: Option<Entity>) {
        *self = match hit {
            Some(entity) => FocusState::Focused(entity),
            None => FocusState::Unfocused,
        };
    }

    pub fn focused(&self) -> Option<Entity> {
        match self {
            FocusState::Focused(entity) => Some(*entity),
            FocusState::Unfocused => None,
        }
    }
}

/// An in-flight preset camera jump. While one is active, further preset
/// requests are ignored.
pub struct ActiveTween {
    pub from: CameraPose,
    pub to: CameraPose,
    pub elapsed: f32,
    pub duration: f32,
}

#[derive(Resource, Default)]
pub struct PresetTween(pub Option<ActiveTween>);

/// Cubic in/out easing on [0, 1].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn lerp_pose(from: CameraPose, to: CameraPose, s: f32) -> CameraPose {
    CameraPose {
        focus: from.focus.lerp(to.focus, s),
        yaw: from.yaw + (to.yaw - from.yaw) * s,
        pitch: from.pitch + (to.pitch - from.pitch) * s,
        radius: from.radius + (to.radius - from.radius) * s,
    }
}

/// Walk ownership links upward from a picked sub-mesh until a registered
/// top-level body is reached.
fn resolve_top_level(
    mut entity: Entity,
    registry: &SceneRegistry,
    parents: &Query<&ChildOf>,
) -> Option<Entity> {
    loop {
        if registry.contains(entity) {
            return Some(entity);
        }
        match parents.get(entity) {
            Ok(child_of) => entity = child_of.parent(),
            Err(_) => return None,
        }
    }
}

/// System to turn pointer clicks into focus transitions
pub fn handle_clicks(
    mut clicks: EventReader<Pointer<Click>>,
    mouse: Res<ButtonInput<MouseButton>>,
    ui_state: Res<UiState>,
    registry: Res<SceneRegistry>,
    selectable: Query<&Name, With<Selectable>>,
    parents: Query<&ChildOf>,
    mut focus: ResMut<FocusState>,
) {
    if ui_state.pointer_over_ui {
        clicks.clear();
        return;
    }

    let mut hit = None;
    for event in clicks.read() {
        if event.button != PointerButton::Primary {
            continue;
        }
        if let Some(body) = resolve_top_level(event.target, &registry, &parents) {
            if let Ok(name) = selectable.get(body) {
                hit = Some((body, name.as_str().to_owned()));
            }
        }
    }

    if let Some((body, name)) = hit {
        focus.apply_click(Some(body));
        if let Some(kind) = registry.kind_of(body) {
            info!("Focused on: {name} ({kind:?})");
        }
    } else if mouse.just_released(MouseButton::Left) && focus.focused().is_some() {
        // Click landed on empty space (or an unselectable body).
        focus.apply_click(None);
    }
}

fn apply_pose_targets(camera: &mut PanOrbitCamera, pose: CameraPose) {
    camera.target_focus = pose.focus;
    camera.target_yaw = pose.yaw;
    camera.target_pitch = pose.pitch;
    camera.target_radius = pose.radius;
}

/// System to retarget the camera toward the focused body each frame,
/// and back to the overview when focus clears
pub fn follow_focused(
    focus: Res<FocusState>,
    tween: Res<PresetTween>,
    bodies: Query<&Transform>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };
    match *focus {
        FocusState::Focused(entity) => {
            if let Ok(transform) = bodies.get(entity) {
                camera.target_focus = transform.translation;
                camera.target_radius = FOCUS_RADIUS;
            }
        }
        FocusState::Unfocused => {
            // Reset once, and not while a preset jump owns the camera.
            if focus.is_changed() && tween.0.is_none() {
                apply_pose_targets(&mut camera, OVERVIEW_POSE);
            }
        }
    }
}

const PRESET_KEYS: &[KeyCode] = &[
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

/// System to start a preset camera jump from the keyboard. A second
/// request while a jump is in flight is ignored; any jump clears focus.
pub fn handle_preset_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut tween: ResMut<PresetTween>,
    mut focus: ResMut<FocusState>,
    cameras: Query<&PanOrbitCamera, With<MainCamera>>,
) {
    let requested = if keys.just_pressed(KeyCode::KeyR) {
        Some(OVERVIEW_POSE)
    } else {
        PRESET_KEYS
            .iter()
            .position(|key| keys.just_pressed(*key))
            .and_then(|i| CAMERA_PRESETS.get(i).copied())
    };
    let Some(pose) = requested else {
        return;
    };
    if tween.0.is_some() {
        return;
    }
    let Ok(camera) = cameras.single() else {
        return;
    };

    if focus.focused().is_some() {
        *focus = FocusState::Unfocused;
    }
    let from = CameraPose {
        focus: camera.focus,
        yaw: camera.yaw.unwrap_or(camera.target_yaw),
        pitch: camera.pitch.unwrap_or(camera.target_pitch),
        radius: camera.radius.unwrap_or(camera.target_radius),
    };
    tween.0 = Some(ActiveTween {
        from,
        to: pose,
        elapsed: 0.0,
        duration: PRESET_TWEEN_SECONDS,
    });
}

/// System to advance the active preset jump with cubic in/out easing
pub fn advance_preset_tween(
    time: Res<Time>,
    mut tween: ResMut<PresetTween>,
    mut cameras: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let Some(active) = tween.0.as_mut() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    active.elapsed += time.delta_secs();
    let t = (active.elapsed / active.duration).min(1.0);
    let pose = lerp_pose(active.from, active.to, ease_in_out_cubic(t));

    camera.focus = pose.focus;
    camera.yaw = Some(pose.yaw);
    camera.pitch = Some(pose.pitch);
    camera.radius = Some(pose.radius);
    apply_pose_targets(&mut camera, pose);
    camera.force_update = true;

    if t >= 1.0 {
        tween.0 = None;
    }
}

/// Plugin for picking, focus and camera control
pub struct FocusPlugin;

impl Plugin for FocusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusState>()
            .init_resource::<PresetTween>()
            .add_systems(
                Update,
                (handle_clicks, handle_preset_keys).in_set(SimSet::Clock),
            )
            .add_systems(
                Update,
                (follow_focused, advance_preset_tween.after(follow_focused))
                    .in_set(SimSet::PostIntegrate),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_hit_focuses_and_last_hit_wins() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let mut focus = FocusState::default();

        focus.apply_click(Some(a));
        assert_eq!(focus, FocusState::Focused(a));

        focus.apply_click(Some(b));
        assert_eq!(focus, FocusState::Focused(b));
    }

    #[test]
    fn click_miss_clears_focus() {
        let mut focus = FocusState::Focused(Entity::from_raw(4));
        focus.apply_click(None);
        assert_eq!(focus, FocusState::Unfocused);
        assert_eq!(focus.focused(), None);

        // A miss while unfocused stays unfocused.
        focus.apply_click(None);
        assert_eq!(focus, FocusState::Unfocused);
    }

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        // Slow start, slow finish.
        assert!(ease_in_out_cubic(0.1) < 0.1);
        assert!(ease_in_out_cubic(0.9) > 0.9);
    }

    #[test]
    fn pose_lerp_hits_both_ends() {
        let from = CameraPose {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.2,
            radius: 1200.0,
        };
        let to = CameraPose {
            focus: Vec3::new(100.0, 0.0, -50.0),
            yaw: 1.0,
            pitch: 0.8,
            radius: 400.0,
        };
        assert_eq!(lerp_pose(from, to, 0.0), from);
        assert_eq!(lerp_pose(from, to, 1.0), to);

        let mid = lerp_pose(from, to, 0.5);
        assert!((mid.radius - 800.0).abs() < 1e-3);
        assert!((mid.yaw - 0.5).abs() < 1e-6);
    }
}
