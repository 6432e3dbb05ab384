//! Floating control panel.
//!
//! Widgets never touch simulation state; each interaction is sent as a
//! [`ControlCommand`] and applied by the controls system.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{BodyId, BodyRegistry};
use crate::controls::{ControlCommand, MAX_GLOBAL_SPEED, MAX_PLANET_SPEED, SPEED_STEP};
use crate::render::body_color;
use crate::types::SimulationState;

use super::icons;

/// Colors used by the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// Label and hover text for the pause button in the given state.
pub fn pause_button_label(paused: bool) -> (&'static str, &'static str) {
    if paused {
        ("Resume", "Resume orbits (Space)")
    } else {
        ("Pause", "Pause orbits (Space)")
    }
}

/// Convert a Bevy color into an egui color.
pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Render the control panel.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    state: Res<SimulationState>,
    registry: Res<BodyRegistry>,
    mut commands: MessageWriter<ControlCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .collapsible(true)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_pause_button(ui, state.paused, &mut commands);
                render_reset_button(ui, &mut commands);
            });

            ui.separator();

            let mut global = state.global_speed_multiplier;
            ui.label(
                egui::RichText::new(format!("{} Global Speed", icons::SPEED)).color(colors::TEXT),
            );
            if ui.add(speed_slider(&mut global, MAX_GLOBAL_SPEED)).changed() {
                commands.write(ControlCommand::SetGlobalSpeed(global));
            }

            ui.separator();

            egui::Grid::new("planet_speeds")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for body in registry.planets() {
                        render_planet_row(ui, body.id, body.current_angular_speed, &mut commands);
                        ui.end_row();
                    }
                });
        });
}

fn speed_slider(value: &mut f64, max: f64) -> egui::Slider<'_> {
    egui::Slider::new(value, 0.0..=max)
        .step_by(SPEED_STEP)
        .fixed_decimals(1)
        .suffix("x")
}

fn render_pause_button(
    ui: &mut egui::Ui,
    paused: bool,
    commands: &mut MessageWriter<ControlCommand>,
) {
    let (label, hover) = pause_button_label(paused);
    let (icon, color) = if paused {
        (icons::PLAY, colors::PLAY_ICON)
    } else {
        (icons::PAUSE, colors::PAUSE_ICON)
    };

    let button = egui::Button::new(egui::RichText::new(format!("{icon} {label}")).color(color));
    if ui.add(button).on_hover_text(hover).clicked() {
        commands.write(ControlCommand::TogglePause);
    }
}

fn render_reset_button(ui: &mut egui::Ui, commands: &mut MessageWriter<ControlCommand>) {
    let button = egui::Button::new(format!("{} Reset", icons::RESET));
    if ui
        .add(button)
        .on_hover_text("Restore speeds and shuffle positions (R)")
        .clicked()
    {
        commands.write(ControlCommand::Reset);
    }
}

fn render_planet_row(
    ui: &mut egui::Ui,
    body: BodyId,
    speed: f64,
    commands: &mut MessageWriter<ControlCommand>,
) {
    ui.label(egui::RichText::new(body.name()).color(to_color32(body_color(body))));

    let mut value = speed;
    if ui.add(speed_slider(&mut value, MAX_PLANET_SPEED)).changed() {
        commands.write(ControlCommand::SetPlanetSpeed { body, speed: value });
    }
}
