//! egui panel pass: top control bar, bottom clock strip, the focused-body
//! info window and the projected name labels.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::facts_for;
use crate::focus::{FocusState, MainCamera};
use crate::prefs::ThemeMode;
use crate::registry::{BodyKind, SceneRegistry};
use crate::scene::Labeled;
use crate::sim::SimulationClock;
use crate::ui::clocks::ClockBoard;
use crate::ui::state::UiState;
use crate::ui::theme::ThemeState;

#[allow(clippy::too_many_arguments)]
pub fn draw_ui(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut theme: ResMut<ThemeState>,
    mut ui_state: ResMut<UiState>,
    mut focus: ResMut<FocusState>,
    board: Res<ClockBoard>,
    registry: Res<SceneRegistry>,
    names: Query<&Name>,
    labels: Query<(&GlobalTransform, &Name, &Labeled)>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if theme.applied != Some(theme.mode) {
        ctx.set_visuals(theme.visuals());
        theme.applied = Some(theme.mode);
    }

    egui::TopBottomPanel::top("control_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Orrery");
            ui.separator();
            ui.label("Speed:");
            ui.add(
                egui::Slider::new(&mut clock.time_scale, 0.0..=5.0)
                    .fixed_decimals(1)
                    .suffix("x"),
            );
            if ui.button("Reset").clicked() {
                clock.time_scale = 1.0;
            }
            ui.separator();
            let toggle_label = match theme.mode {
                ThemeMode::Dark => "Light mode",
                ThemeMode::Light => "Dark mode",
            };
            if ui.button(toggle_label).clicked() {
                theme.toggle();
            }
            ui.separator();
            ui.weak("1-6 camera presets, R to reset, click a planet for details");
        });
    });

    egui::TopBottomPanel::bottom("clock_strip").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for zone in &board.zones {
                ui.vertical(|ui| {
                    ui.strong(zone.label);
                    ui.monospace(&zone.time);
                    ui.weak(&zone.date);
                });
                ui.separator();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "{} bodies ({} planets, {} asteroids, {} meteors)",
                    registry.total(),
                    registry.count(BodyKind::Planet),
                    registry.count(BodyKind::Asteroid),
                    registry.count(BodyKind::Meteor),
                ));
            });
        });
    });

    draw_info_window(ctx, &mut focus, &names);
    draw_labels(ctx, theme.mode, &labels, &cameras);

    ui_state.pointer_over_ui = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}

/// The fact window for the focused body; Close clears focus.
fn draw_info_window(ctx: &egui::Context, focus: &mut FocusState, names: &Query<&Name>) {
    let Some(entity) = focus.focused() else {
        return;
    };
    let Ok(name) = names.get(entity) else {
        return;
    };
    let Some(facts) = facts_for(name.as_str()) else {
        return;
    };

    let mut close = false;
    egui::Window::new(facts.name)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("body_facts").num_columns(2).show(ui, |ui| {
                ui.label("Type:");
                ui.label(facts.body_type);
                ui.end_row();
                ui.label("Diameter:");
                ui.label(facts.diameter);
                ui.end_row();
                ui.label("Distance:");
                ui.label(facts.distance);
                ui.end_row();
            });
            ui.separator();
            ui.label(facts.description);
            ui.add_space(4.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    if close {
        focus.apply_click(None);
    }
}

/// Names projected above labeled bodies. Bodies behind the camera fail the
/// viewport projection and are simply skipped.
fn draw_labels(
    ctx: &egui::Context,
    mode: ThemeMode,
    labels: &Query<(&GlobalTransform, &Name, &Labeled)>,
    cameras: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let color = match mode {
        ThemeMode::Dark => egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
        ThemeMode::Light => egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220),
    };
    let painter = ctx.layer_painter(egui::LayerId::background());

    for (transform, name, labeled) in labels {
        let anchor = transform.translation() + Vec3::Y * labeled.offset;
        let Ok(viewport) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };
        painter.text(
            egui::pos2(viewport.x, viewport.y),
            egui::Align2::CENTER_BOTTOM,
            name.as_str(),
            egui::FontId::proportional(13.0),
            color,
        );
    }
}
