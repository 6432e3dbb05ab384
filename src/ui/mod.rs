//! UI module providing the egui-based control panel and body tooltip.

mod control_panel;
pub mod icons;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::types::UiPointerCapture;

pub use control_panel::{pause_button_label, to_color32};
pub use tooltip::{CURSOR_OFFSET, TOOLTIP_RESERVE, TooltipContent, tooltip_position};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<UiPointerCapture>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_system,
                    tooltip::tooltip_system,
                    track_pointer_capture,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Speed readout used by the sliders and the tooltip.
pub fn format_speed(value: f64) -> String {
    format!("{value:.1}x")
}

/// Record whether egui owns the pointer so camera and picking input can back off.
fn track_pointer_capture(mut contexts: EguiContexts, mut capture: ResMut<UiPointerCapture>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let over_ui = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    if capture.over_ui != over_ui {
        capture.over_ui = over_ui;
    }
}
