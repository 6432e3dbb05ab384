//! End-to-end orbit scenarios on the pure simulation API.
//!
//! Run with: cargo test --test orbit_scenarios

mod common;

use approx::assert_relative_eq;
use common::seeded_registry;
use orrery::bodies::{BodyId, BodyRegistry};
use orrery::controls::{ControlCommand, apply_command};
use orrery::simulation::{ORBIT_SCALE, step};
use orrery::types::SimulationState;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run `frames` steps of `dt` seconds, applying `commands` before the first one.
fn run(
    registry: &mut BodyRegistry,
    state: &mut SimulationState,
    commands: &[ControlCommand],
    frames: usize,
    dt: f64,
) {
    let mut rng = StdRng::seed_from_u64(11);
    for command in commands {
        let _ = apply_command(*command, state, registry, &mut rng);
    }
    for _ in 0..frames {
        step(state, registry, dt);
    }
}

fn angle(registry: &BodyRegistry, id: BodyId) -> f64 {
    registry.get(id).unwrap().angle
}

#[test]
fn test_earth_moves_0_149_rad_per_second() {
    let mut registry = seeded_registry(1);
    let mut state = SimulationState::default();
    let start = angle(&registry, BodyId::Earth);

    run(&mut registry, &mut state, &[], 60, 1.0 / 60.0);

    assert_relative_eq!(angle(&registry, BodyId::Earth) - start, 0.149, epsilon = 1e-9);
}

#[test]
fn test_stopping_mars_leaves_others_moving() {
    let mut registry = seeded_registry(2);
    let mut state = SimulationState::default();
    let before = registry.clone();

    run(
        &mut registry,
        &mut state,
        &[ControlCommand::SetPlanetSpeed {
            body: BodyId::Mars,
            speed: 0.0,
        }],
        120,
        1.0 / 60.0,
    );

    for id in BodyId::PLANETS {
        let moved = angle(&registry, *id) - angle(&before, *id);
        if *id == BodyId::Mars {
            assert_eq!(moved, 0.0);
        } else {
            assert!(moved > 0.0, "{id:?} should have moved");
        }
    }
}

#[test]
fn test_doubling_global_speed_doubles_travel() {
    let mut normal = seeded_registry(3);
    let mut doubled = normal.clone();
    let start = angle(&normal, BodyId::Neptune);

    run(&mut normal, &mut SimulationState::default(), &[], 30, 0.1);
    run(
        &mut doubled,
        &mut SimulationState::default(),
        &[ControlCommand::SetGlobalSpeed(2.0)],
        30,
        0.1,
    );

    let normal_travel = angle(&normal, BodyId::Neptune) - start;
    assert_relative_eq!(normal_travel, 3.0 * 0.54 * ORBIT_SCALE, epsilon = 1e-9);
    assert_relative_eq!(
        angle(&doubled, BodyId::Neptune) - start,
        2.0 * normal_travel,
        epsilon = 1e-9
    );
}

#[test]
fn test_pause_then_resume_continues_from_same_place() {
    let mut registry = seeded_registry(4);
    let mut state = SimulationState::default();

    run(&mut registry, &mut state, &[ControlCommand::SetPaused(true)], 100, 0.1);
    let paused = registry.clone();
    for id in BodyId::ALL {
        assert_eq!(angle(&registry, *id), angle(&seeded_registry(4), *id));
    }

    run(&mut registry, &mut state, &[ControlCommand::SetPaused(false)], 1, 0.1);
    assert_relative_eq!(
        angle(&registry, BodyId::Mercury) - angle(&paused, BodyId::Mercury),
        0.1 * 4.74 * ORBIT_SCALE,
        epsilon = 1e-12
    );
}

#[test]
fn test_reset_after_tuning() {
    let mut registry = seeded_registry(5);
    let mut state = SimulationState::default();

    run(
        &mut registry,
        &mut state,
        &[
            ControlCommand::SetPlanetSpeed {
                body: BodyId::Saturn,
                speed: 10.0,
            },
            ControlCommand::SetGlobalSpeed(5.0),
            ControlCommand::SetPaused(true),
            ControlCommand::Reset,
        ],
        10,
        0.1,
    );

    assert!(!state.paused);
    assert_eq!(state.global_speed_multiplier, 1.0);
    let saturn = registry.get(BodyId::Saturn).unwrap();
    assert_eq!(saturn.current_angular_speed, saturn.base_angular_speed);
}

#[test]
fn test_positions_stay_on_orbit() {
    let mut registry = seeded_registry(6);
    let mut state = SimulationState::default();

    run(&mut registry, &mut state, &[ControlCommand::SetGlobalSpeed(5.0)], 500, 0.25);

    for body in registry.planets() {
        let radius = (body.position.x.powi(2) + body.position.z.powi(2)).sqrt();
        assert_relative_eq!(radius, body.orbital_distance as f32, epsilon = 1e-3);
        assert_eq!(body.position.y, 0.0);
    }
}
