//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::input::gestures::PinchGesture;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{CursorLeft, CursorMoved, WindowOccluded};
use orrery::bodies::{BodyId, BodyRegistry};
use orrery::camera::{CameraPlugin, MainCamera};
use orrery::controls::ControlsPlugin;
use orrery::picking::PickingPlugin;
use orrery::simulation::SimulationPlugin;
use orrery::time::TimePlugin as ClockPlugin;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed frame length used by headless apps.
pub const FRAME: Duration = Duration::from_millis(100);

/// Registry with deterministic starting angles.
pub fn seeded_registry(seed: u64) -> BodyRegistry {
    BodyRegistry::new(&mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Headless app running the clock, controls and simulation on fixed frames.
///
/// Window and input plugins are absent, so the resources and messages they
/// would provide are registered by hand.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_message::<WindowOccluded>()
        .insert_resource(seeded_registry(7))
        .add_plugins((ClockPlugin, SimulationPlugin, ControlsPlugin));
    app
}

/// Headless app that also runs the camera rig and hover picking.
///
/// Pointer and touch input resources start empty; tests fill them in directly.
pub fn create_view_app() -> App {
    let mut app = create_headless_app();
    app.init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<AccumulatedMouseMotion>()
        .init_resource::<AccumulatedMouseScroll>()
        .init_resource::<Touches>()
        .add_message::<PinchGesture>()
        .add_message::<CursorMoved>()
        .add_message::<CursorLeft>()
        .add_plugins((CameraPlugin, PickingPlugin));
    app
}

/// Translation of the main camera entity.
pub fn camera_translation(app: &mut App) -> Vec3 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<MainCamera>>();
    query.single(app.world()).unwrap().translation
}

/// Current orbital angle of a body.
pub fn angle(app: &App, id: BodyId) -> f64 {
    app.world()
        .resource::<BodyRegistry>()
        .get(id)
        .unwrap()
        .angle
}
