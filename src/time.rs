//! Wall clock for the simulation loop.
//!
//! Wraps Bevy's frame delta in a clock that can be stopped while the window is
//! hidden. A stopped clock reports zero delta and freezes elapsed time, and the
//! first tick after restarting also reports zero, so the gap never shows up as a jump.

use bevy::prelude::*;
use bevy::window::WindowOccluded;

use crate::types::OrrerySet;

/// Frame deltas above this are treated as hitches and capped (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Stoppable clock tracking delta and elapsed wall time in seconds.
#[derive(Resource, Clone, Debug)]
pub struct SimClock {
    delta: f32,
    elapsed: f32,
    running: bool,
    /// Set on restart so the next tick discards the stopped interval.
    resuming: bool,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            delta: 0.0,
            elapsed: 0.0,
            running: true,
            resuming: false,
        }
    }
}

impl SimClock {
    /// Advance by the raw frame delta and return the delta this frame reports.
    pub fn tick(&mut self, raw_delta: f32) -> f32 {
        self.delta = if !self.running || self.resuming {
            0.0
        } else {
            raw_delta.clamp(0.0, MAX_FRAME_DELTA)
        };
        self.resuming = false;
        self.elapsed += self.delta;
        self.delta
    }

    /// Stop accumulating time.
    pub fn stop(&mut self) {
        self.running = false;
        self.delta = 0.0;
    }

    /// Resume after [`stop`](Self::stop). No-op while already running.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.resuming = true;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Delta of the latest tick in seconds.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total running time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Plugin providing clock advancement and visibility handling.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>().add_systems(
            Update,
            (pause_clock_when_hidden, tick_clock)
                .chain()
                .in_set(OrrerySet::Clock),
        );
    }
}

/// Tick the simulation clock from Bevy's frame time.
fn tick_clock(mut clock: ResMut<SimClock>, time: Res<Time>) {
    clock.tick(time.delta_secs());
}

/// Stop the clock while the window is occluded and restart it when visible again.
fn pause_clock_when_hidden(
    mut occluded: MessageReader<WindowOccluded>,
    mut clock: ResMut<SimClock>,
) {
    let Some(latest) = occluded.read().last() else {
        return;
    };

    if latest.occluded && clock.is_running() {
        clock.stop();
        info!("Window hidden, clock stopped");
    } else if !latest.occluded && !clock.is_running() {
        clock.start();
        info!("Window visible, clock resumed");
    }
}
