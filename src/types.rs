//! Shared simulation types, system sets and state resources.

use bevy::prelude::*;

/// System sets ordering the per-frame update.
///
/// Clock ticks first so every later set sees the same frame delta. Body transforms
/// are synced last, after the simulator has moved them.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrrerySet {
    /// Wall clock advancement.
    Clock,
    /// Control commands and camera input handling.
    Input,
    /// Orbital advance.
    Simulate,
    /// Camera idle drift and transform update.
    Camera,
    /// Copy body state onto render transforms.
    Sync,
}

/// Global simulation state owned by the controller.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationState {
    /// Whether orbital motion is paused.
    pub paused: bool,
    /// Multiplier applied to every body's motion (always >= 0).
    pub global_speed_multiplier: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            paused: false,
            global_speed_multiplier: 1.0,
        }
    }
}

/// Whether the pointer currently belongs to a UI panel.
///
/// Written by the UI pass, read by camera input and picking so that dragging a
/// slider never rotates the camera and panels hide the tooltip.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct UiPointerCapture {
    pub over_ui: bool,
}
