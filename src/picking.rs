//! Pointer picking for hover tooltips.
//!
//! Casts a ray from the pointer through the perspective camera and returns the
//! nearest body sphere it hits. Runs only when the cursor actually moved.

use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};

use crate::bodies::{BodyId, BodyRegistry};
use crate::camera::MainCamera;
use crate::types::{OrrerySet, UiPointerCapture};

/// Plugin providing hover detection.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<UiPointerCapture>()
            .add_systems(Update, update_hover.in_set(OrrerySet::Sync));
    }
}

/// Resource tracking the body under the pointer.
#[derive(Resource, Default, Debug)]
pub struct HoveredBody {
    /// Body under the pointer, if any.
    pub body: Option<BodyId>,
    /// Latest cursor position in logical window pixels.
    pub cursor: Vec2,
}

/// Sphere a ray can hit.
#[derive(Clone, Copy, Debug)]
pub struct PickTarget {
    pub body: BodyId,
    pub center: Vec3,
    pub radius: f32,
}

impl PickTarget {
    /// One target per registered body at its current position.
    pub fn from_registry(registry: &BodyRegistry) -> impl Iterator<Item = PickTarget> + '_ {
        registry.iter().map(|body| PickTarget {
            body: body.id,
            center: body.position,
            radius: body.radius,
        })
    }
}

/// Distance along the ray to the first intersection with a sphere.
///
/// Hits behind the origin are ignored; an origin inside the sphere reports the exit.
pub fn ray_sphere_distance(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let t_closest = to_center.dot(*ray.direction);

    let dist_sq = to_center.length_squared() - t_closest * t_closest;
    let radius_sq = radius * radius;
    if dist_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - dist_sq).sqrt();
    let t_entry = t_closest - half_chord;
    let t_exit = t_closest + half_chord;

    if t_entry >= 0.0 {
        Some(t_entry)
    } else if t_exit >= 0.0 {
        Some(t_exit)
    } else {
        None
    }
}

/// Nearest body hit by `ray`, if any.
pub fn hit_test(ray: &Ray3d, targets: impl IntoIterator<Item = PickTarget>) -> Option<BodyId> {
    targets
        .into_iter()
        .filter_map(|target| {
            ray_sphere_distance(ray, target.center, target.radius).map(|t| (target.body, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(body, _)| body)
}

/// Update [`HoveredBody`] from the latest cursor movement.
fn update_hover(
    mut moved: MessageReader<CursorMoved>,
    mut left: MessageReader<CursorLeft>,
    capture: Res<UiPointerCapture>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<BodyRegistry>,
    mut hovered: ResMut<HoveredBody>,
) {
    if left.read().count() > 0 {
        hovered.body = None;
    }

    let Some(cursor) = moved.read().last().map(|m| m.position) else {
        return;
    };
    hovered.cursor = cursor;

    if capture.over_ui {
        hovered.body = None;
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let hit = camera
        .viewport_to_world(camera_transform, cursor)
        .ok()
        .and_then(|ray| hit_test(&ray, PickTarget::from_registry(&registry)));

    if hit != hovered.body {
        debug!("Hovered body: {:?}", hit);
        hovered.body = hit;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn ray(origin: Vec3, toward: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(toward - origin).unwrap(),
        }
    }

    #[test]
    fn test_ray_sphere_distance() {
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);

        assert_relative_eq!(ray_sphere_distance(&r, Vec3::ZERO, 2.0).unwrap(), 8.0, epsilon = 1e-5);
        assert!(ray_sphere_distance(&r, Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Behind the origin
        assert!(ray_sphere_distance(&r, Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let r = ray(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let targets = [
            PickTarget { body: BodyId::Sun, center: Vec3::ZERO, radius: 3.0 },
            PickTarget { body: BodyId::Earth, center: Vec3::new(0.0, 0.0, 16.0), radius: 1.0 },
        ];

        assert_eq!(hit_test(&r, targets), Some(BodyId::Earth));
    }

    #[test]
    fn test_ray_through_only_earth_picks_earth() {
        let mut registry = BodyRegistry::new(&mut StdRng::seed_from_u64(3)).unwrap();
        // Park Earth on the +z axis so a ray across it misses every other orbit
        let earth = registry.get_mut(BodyId::Earth).unwrap();
        earth.angle = std::f64::consts::FRAC_PI_2;
        earth.update_position();
        let earth_pos = earth.position;

        // Cast straight down onto Earth from above the ecliptic
        let r = ray(earth_pos + Vec3::Y * 50.0, earth_pos);

        assert_eq!(hit_test(&r, PickTarget::from_registry(&registry)), Some(BodyId::Earth));
    }

    #[test]
    fn test_miss_returns_none() {
        let registry = BodyRegistry::new(&mut StdRng::seed_from_u64(3)).unwrap();
        // Far outside every orbit, pointing away from the system
        let r = ray(Vec3::new(0.0, 100.0, 0.0), Vec3::new(0.0, 200.0, 0.0));

        assert_eq!(hit_test(&r, PickTarget::from_registry(&registry)), None);
    }
}
