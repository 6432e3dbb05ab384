//! Rendering systems for the solar system view.
//!
//! This module provides the visual representation of the bodies, their orbit
//! rings and the background. None of it owns simulation state.

mod background;
pub mod bodies;
mod orbits;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{BodyVisualPlugin, sync_body_transforms};
use self::orbits::OrbitPathPlugin;
use crate::types::OrrerySet;

// Re-export for use in other modules
pub use self::background::{Star, StarfieldSettings, generate_starfield, star_palette};
pub use self::bodies::{BodyVisual, body_color};
pub use self::orbits::{OrbitPathSettings, orbit_ring_points};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodyVisualPlugin, BackgroundPlugin, OrbitPathPlugin))
            .add_systems(Update, sync_body_transforms.in_set(OrrerySet::Sync));
    }
}
