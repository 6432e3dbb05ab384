//! Orbital simulator.
//!
//! Advances every planet along its circular orbit and spins every body about its
//! axis. Motion is stylized: per-body speeds are slider values, not Keplerian rates.

#[cfg(test)]
mod proptest_simulation;

use bevy::prelude::*;

use crate::bodies::{BodyKind, BodyRegistry};
use crate::time::SimClock;
use crate::types::{OrrerySet, SimulationState};

/// Converts slider speed units into radians per second of orbital angle.
pub const ORBIT_SCALE: f64 = 0.05;

/// Sun self-rotation in radians per second, unaffected by the global multiplier.
pub const SUN_ROTATION_SPEED: f64 = 0.2;

/// Plugin providing orbital advancement and the per-frame system ordering.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .configure_sets(
                Update,
                (
                    OrrerySet::Clock,
                    OrrerySet::Input,
                    OrrerySet::Simulate,
                    OrrerySet::Camera,
                    OrrerySet::Sync,
                )
                    .chain(),
            )
            .add_systems(Update, advance_bodies.in_set(OrrerySet::Simulate));
    }
}

/// Advance every body by `dt` seconds at the given global multiplier.
///
/// Planets move along their orbit and spin; the Sun only spins, at a fixed rate.
pub fn advance(registry: &mut BodyRegistry, dt: f64, global_multiplier: f64) {
    for body in registry.iter_mut() {
        match body.kind {
            BodyKind::Sun => {
                body.axial_rotation += SUN_ROTATION_SPEED * dt;
            }
            BodyKind::Planet => {
                body.angle += dt * body.current_angular_speed * global_multiplier * ORBIT_SCALE;
                body.update_position();
                body.axial_rotation += dt * body.axial_rotation_speed * global_multiplier;
            }
        }
    }
}

/// Advance unless the simulation is paused.
///
/// Returns whether the bodies moved.
pub fn step(state: &SimulationState, registry: &mut BodyRegistry, dt: f64) -> bool {
    if state.paused {
        return false;
    }
    advance(registry, dt, state.global_speed_multiplier);
    true
}

/// Frame system driving [`step`] with the clock's delta.
fn advance_bodies(
    clock: Res<SimClock>,
    state: Res<SimulationState>,
    mut registry: ResMut<BodyRegistry>,
) {
    step(&state, &mut registry, clock.delta() as f64);
}
