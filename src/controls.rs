//! Simulation controller.
//!
//! Every user action (panel widgets, keyboard shortcuts) is expressed as a
//! [`ControlCommand`] message. A single system applies them to the simulation state
//! and the body registry, so the UI never mutates simulator state directly.

use bevy::prelude::*;
use rand::Rng;

use crate::bodies::{BodyId, BodyRegistry, random_angle};
use crate::error::OrreryError;
use crate::types::{OrrerySet, SimulationState};

/// Upper bound of the per-planet speed slider.
pub const MAX_PLANET_SPEED: f64 = 10.0;

/// Upper bound of the global speed slider.
pub const MAX_GLOBAL_SPEED: f64 = 5.0;

/// Slider granularity for both speed controls.
pub const SPEED_STEP: f64 = 0.1;

/// A state transition requested by the user.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ControlCommand {
    /// Flip between paused and running.
    TogglePause,
    /// Pause or resume explicitly.
    SetPaused(bool),
    /// Set the global speed multiplier.
    SetGlobalSpeed(f64),
    /// Set one planet's angular speed.
    SetPlanetSpeed { body: BodyId, speed: f64 },
    /// Restore speeds and shuffle positions.
    Reset,
}

/// Plugin providing command handling and keyboard shortcuts.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlCommand>().add_systems(
            Update,
            (keyboard_shortcuts, apply_control_commands)
                .chain()
                .in_set(OrrerySet::Input),
        );
    }
}

/// Pause or resume orbital motion.
pub fn set_pause(state: &mut SimulationState, paused: bool) {
    state.paused = paused;
}

/// Set the global multiplier, clamped to `[0, MAX_GLOBAL_SPEED]`.
pub fn set_global_speed_multiplier(state: &mut SimulationState, multiplier: f64) {
    if multiplier.is_nan() {
        return;
    }
    state.global_speed_multiplier = multiplier.clamp(0.0, MAX_GLOBAL_SPEED);
}

/// Set a planet's angular speed, clamped to `[0, MAX_PLANET_SPEED]`.
pub fn set_planet_speed(
    registry: &mut BodyRegistry,
    id: BodyId,
    speed: f64,
) -> Result<(), OrreryError> {
    let body = registry.get_mut(id).ok_or(OrreryError::UnknownBody(id))?;
    if !body.is_planet() {
        return Err(OrreryError::NotAPlanet(id));
    }
    if !speed.is_nan() {
        body.current_angular_speed = speed.clamp(0.0, MAX_PLANET_SPEED);
    }
    Ok(())
}

/// Shuffle reset.
///
/// Restores every speed to its base value and the global multiplier to 1, resumes
/// the simulation, and draws a fresh random angle for every body. Positions are
/// deliberately not restored to the session-start layout.
pub fn reset<R: Rng + ?Sized>(
    state: &mut SimulationState,
    registry: &mut BodyRegistry,
    rng: &mut R,
) {
    for body in registry.iter_mut() {
        body.current_angular_speed = body.base_angular_speed;
        body.angle = random_angle(rng);
        body.update_position();
    }
    *state = SimulationState::default();
}

/// Apply one command.
pub fn apply_command<R: Rng + ?Sized>(
    command: ControlCommand,
    state: &mut SimulationState,
    registry: &mut BodyRegistry,
    rng: &mut R,
) -> Result<(), OrreryError> {
    match command {
        ControlCommand::TogglePause => {
            let paused = !state.paused;
            set_pause(state, paused);
        }
        ControlCommand::SetPaused(paused) => set_pause(state, paused),
        ControlCommand::SetGlobalSpeed(multiplier) => {
            set_global_speed_multiplier(state, multiplier)
        }
        ControlCommand::SetPlanetSpeed { body, speed } => {
            set_planet_speed(registry, body, speed)?
        }
        ControlCommand::Reset => reset(state, registry, rng),
    }
    Ok(())
}

/// Drain pending commands in order.
fn apply_control_commands(
    mut commands: MessageReader<ControlCommand>,
    mut state: ResMut<SimulationState>,
    mut registry: ResMut<BodyRegistry>,
) {
    let mut rng = rand::rng();
    for command in commands.read() {
        let was_paused = state.paused;
        match apply_command(*command, &mut state, &mut registry, &mut rng) {
            Ok(()) => match command {
                ControlCommand::Reset => info!("Simulation reset"),
                ControlCommand::TogglePause | ControlCommand::SetPaused(_)
                    if was_paused != state.paused =>
                {
                    info!("Simulation {}", if state.paused { "paused" } else { "running" });
                }
                _ => {}
            },
            Err(err) => warn!("Ignoring {:?}: {}", command, err),
        }
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut commands: MessageWriter<ControlCommand>) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        commands.write(ControlCommand::TogglePause);
    }

    // R: shuffle reset
    if keys.just_pressed(KeyCode::KeyR) {
        commands.write(ControlCommand::Reset);
    }
}
