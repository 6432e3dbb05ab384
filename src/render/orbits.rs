//! Orbit ring rendering using Bevy Gizmos.
//!
//! Orbits are circles on the ecliptic (xz) plane, so each ring is drawn as a closed
//! polyline at the planet's orbital distance.

use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};

/// Plugin providing orbit ring visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit ring rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit rings.
    pub visible: bool,
    /// Number of segments per ring (higher = smoother).
    pub segments: u32,
    /// Alpha value for ring color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.2,
        }
    }
}

/// Points of a closed ring of `radius` on the xz plane, first point repeated last.
pub fn orbit_ring_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin())
        })
        .collect()
}

/// Draw a faint ring along every planet orbit.
fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    registry: Res<BodyRegistry>,
) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(0.2, 0.2, 0.2, settings.alpha);

    for &id in BodyId::PLANETS {
        let Some(body) = registry.get(id) else {
            continue;
        };

        gizmos.linestrip(
            orbit_ring_points(body.orbital_distance as f32, settings.segments),
            color,
        );
    }
}
