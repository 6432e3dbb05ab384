//! Orrery - Animated Solar System
//!
//! A desktop application showing the Sun and eight planets orbiting in 3D,
//! with per-planet speed controls and an orbiting camera.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::bodies::BodyRegistry;
use orrery::camera::CameraPlugin;
use orrery::controls::ControlsPlugin;
use orrery::picking::PickingPlugin;
use orrery::render::RenderPlugin;
use orrery::simulation::SimulationPlugin;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;

const LOAD_ERROR: &str = "Error loading Solar System. Please restart the application.";

fn main() -> AppExit {
    let registry = match BodyRegistry::new(&mut rand::rng()) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{LOAD_ERROR}");
            eprintln!("{err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Insert resources before plugins that depend on them
        .insert_resource(registry)
        .add_plugins((
            TimePlugin,
            SimulationPlugin,
            ControlsPlugin,
            CameraPlugin,
            PickingPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run()
}
