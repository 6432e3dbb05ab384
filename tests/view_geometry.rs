//! View geometry tests: camera rig, pointer picking and tooltip placement.

mod common;

use bevy::prelude::*;
use common::seeded_registry;
use orrery::bodies::BodyId;
use orrery::camera::{CameraRig, INITIAL_POSITION, MAX_DISTANCE, MIN_DISTANCE};
use orrery::picking::{PickTarget, hit_test};
use orrery::ui::{TooltipContent, tooltip_position};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Ray along the camera's view axis, the one under the screen center.
fn center_ray(rig: &CameraRig) -> Ray3d {
    let transform = rig.transform();
    Ray3d::new(transform.translation, transform.forward())
}

#[test]
fn test_screen_center_picks_sun() {
    let registry = seeded_registry(8);
    let rig = CameraRig::from_position(INITIAL_POSITION);

    let ray = center_ray(&rig);

    assert_eq!(
        hit_test(&ray, PickTarget::from_registry(&registry)),
        Some(BodyId::Sun)
    );
}

#[test]
fn test_sun_stays_centered_while_orbiting() {
    let registry = seeded_registry(8);
    let mut rig = CameraRig::from_position(INITIAL_POSITION);

    for _ in 0..20 {
        rig.on_drag(Vec2::new(37.0, -11.0));
        rig.on_zoom(1.0);
        let ray = center_ray(&rig);
        assert_eq!(
            hit_test(&ray, PickTarget::from_registry(&registry)),
            Some(BodyId::Sun)
        );
    }
}

#[test]
fn test_empty_sky_picks_nothing() {
    let rig = CameraRig::from_position(INITIAL_POSITION);
    let target = PickTarget {
        body: BodyId::Earth,
        center: Vec3::ZERO,
        radius: 1.0,
    };

    // Looking along the camera's up axis, well away from the origin
    let transform = rig.transform();
    let ray = Ray3d::new(transform.translation, transform.up());
    assert_eq!(hit_test(&ray, [target]), None);
}

#[test]
fn test_nearer_body_occludes_farther() {
    let rig = CameraRig::from_position(INITIAL_POSITION);
    let camera = rig.position();
    let toward_origin = -camera.normalize();

    let near = PickTarget {
        body: BodyId::Mercury,
        center: camera + toward_origin * 10.0,
        radius: 0.5,
    };
    let far = PickTarget {
        body: BodyId::Sun,
        center: Vec3::ZERO,
        radius: 3.0,
    };

    let ray = center_ray(&rig);
    assert_eq!(hit_test(&ray, [far, near]), Some(BodyId::Mercury));
}

#[test]
fn test_zoom_range_is_respected() {
    let mut rig = CameraRig::default();
    for _ in 0..100 {
        rig.on_zoom(-1.0);
    }
    assert_eq!(rig.distance, MIN_DISTANCE);

    for _ in 0..100 {
        rig.on_zoom(1.0);
    }
    assert_eq!(rig.distance, MAX_DISTANCE);
}

#[test]
fn test_tooltip_for_hovered_body() {
    let registry = seeded_registry(8);
    let content = TooltipContent::for_body(registry.get(BodyId::Jupiter).unwrap());

    assert_eq!(content.title, "Jupiter");
    assert!(content.details.contains(&"Distance: 28 AU".to_string()));
    assert!(content.details.contains(&"Speed: 1.3x".to_string()));

    let pos = tooltip_position(Vec2::new(640.0, 700.0), VIEWPORT);
    assert_eq!(pos, Vec2::new(655.0, 620.0));
}
