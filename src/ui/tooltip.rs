//! Hover tooltip for the body under the pointer.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{Body, BodyKind, BodyRegistry};
use crate::picking::HoveredBody;

use super::{format_speed, icons};

/// Offset from the cursor to the tooltip's top-left corner (pixels).
pub const CURSOR_OFFSET: f32 = 15.0;

/// Space reserved for the tooltip when clamping it inside the window.
pub const TOOLTIP_RESERVE: Vec2 = Vec2::new(200.0, 100.0);

/// Text shown for a hovered body.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: &'static str,
    pub description: &'static str,
    pub details: Vec<String>,
}

impl TooltipContent {
    /// Fixed facts for the Sun; distance, current speed and size for planets.
    pub fn for_body(body: &Body) -> Self {
        let details = match body.kind {
            BodyKind::Sun => vec![
                "Type: G-type main-sequence star".to_string(),
                "Temperature: ~5,778 K".to_string(),
            ],
            BodyKind::Planet => vec![
                format!("Distance: {} AU", body.orbital_distance),
                format!("Speed: {}", format_speed(body.current_angular_speed)),
                format!("Relative Size: {:.1}x Earth", body.radius),
            ],
        };

        Self {
            title: body.name(),
            description: body.description,
            details,
        }
    }
}

/// Top-left corner of the tooltip: just below-right of the cursor, kept on screen.
pub fn tooltip_position(cursor: Vec2, viewport: Vec2) -> Vec2 {
    let offset = cursor + Vec2::splat(CURSOR_OFFSET);
    offset.min(viewport - TOOLTIP_RESERVE)
}

/// Render the tooltip while a body is hovered.
pub fn tooltip_system(
    mut contexts: EguiContexts,
    hovered: Res<HoveredBody>,
    registry: Res<BodyRegistry>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(body) = hovered.body.and_then(|id| registry.get(id)) else {
        return;
    };

    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let content = TooltipContent::for_body(body);
    let pos = tooltip_position(hovered.cursor, Vec2::new(window.width(), window.height()));
    let icon = match body.kind {
        BodyKind::Sun => icons::SUN,
        BodyKind::Planet => icons::PLANET,
    };

    egui::Area::new(egui::Id::new("body_tooltip"))
        .fixed_pos(egui::pos2(pos.x, pos.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(TOOLTIP_RESERVE.x);
                ui.label(egui::RichText::new(format!("{icon} {}", content.title)).strong());
                ui.label(egui::RichText::new(content.description).italics());
                for line in &content.details {
                    ui.label(line);
                }
            });
        });
}
