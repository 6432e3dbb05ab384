//! Property-based tests for the orbital simulator using proptest.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{ORBIT_SCALE, advance, step};
use crate::bodies::{BodyId, BodyRegistry};
use crate::controls::{reset, set_planet_speed};
use crate::types::SimulationState;

fn registry(seed: u64) -> BodyRegistry {
    BodyRegistry::new(&mut StdRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The angle grows exactly when the effective speed and delta are positive.
    #[test]
    fn prop_angle_monotonic(
        seed in any::<u64>(),
        dt in 0.01f64..10.0,
        speed in prop_oneof![Just(0.0f64), 0.1f64..10.0],
        multiplier in prop_oneof![Just(0.0f64), 0.1f64..5.0],
    ) {
        let mut registry = registry(seed);
        set_planet_speed(&mut registry, BodyId::Saturn, speed).unwrap();
        let before = registry.get(BodyId::Saturn).unwrap().angle;

        advance(&mut registry, dt, multiplier);

        let after = registry.get(BodyId::Saturn).unwrap().angle;
        prop_assert!(after >= before);
        if speed * multiplier > 0.0 {
            prop_assert!(after > before, "angle did not advance: {} -> {}", before, after);
        } else {
            prop_assert_eq!(after, before);
        }
    }

    /// The advance is linear in delta time for every planet.
    #[test]
    fn prop_advance_matches_formula(
        seed in any::<u64>(),
        dt in 0.0f64..5.0,
        multiplier in 0.0f64..5.0,
    ) {
        let mut registry = registry(seed);
        let before: Vec<f64> = registry.planets().map(|b| b.angle).collect();

        advance(&mut registry, dt, multiplier);

        for (body, start) in registry.planets().zip(before) {
            let expected = start + dt * body.current_angular_speed * multiplier * ORBIT_SCALE;
            prop_assert!((body.angle - expected).abs() < 1e-9);
        }
    }

    /// Paused steps never move anything, whatever the delta.
    #[test]
    fn prop_paused_step_is_noop(seed in any::<u64>(), dt in 0.0f64..100.0) {
        let mut registry = registry(seed);
        let before = registry.clone();
        let state = SimulationState { paused: true, global_speed_multiplier: 1.0 };

        step(&state, &mut registry, dt);

        for (a, b) in registry.iter().zip(before.iter()) {
            prop_assert_eq!(a.angle, b.angle);
            prop_assert_eq!(a.axial_rotation, b.axial_rotation);
        }
    }

    /// Reset restores speeds and state regardless of prior changes.
    #[test]
    fn prop_reset_restores_speeds(
        seed in any::<u64>(),
        speeds in proptest::collection::vec(0.0f64..10.0, 8),
        paused in any::<bool>(),
        multiplier in 0.0f64..5.0,
    ) {
        let mut registry = registry(seed);
        for (id, speed) in BodyId::PLANETS.iter().zip(speeds) {
            set_planet_speed(&mut registry, *id, speed).unwrap();
        }
        let mut state = SimulationState { paused, global_speed_multiplier: multiplier };

        reset(&mut state, &mut registry, &mut StdRng::seed_from_u64(seed.wrapping_add(1)));

        prop_assert!(!state.paused);
        prop_assert_eq!(state.global_speed_multiplier, 1.0);
        for body in registry.iter() {
            prop_assert_eq!(body.current_angular_speed, body.base_angular_speed);
            prop_assert!((0.0..std::f64::consts::TAU).contains(&body.angle));
        }
    }
}
