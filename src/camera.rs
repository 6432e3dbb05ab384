//! Camera rig for the solar system view.
//!
//! The camera orbits the origin. Its pose lives in spherical coordinates
//! (distance, azimuth, polar) which are the single source of truth: drag and zoom
//! update them directly and the Cartesian transform is derived every frame.

use std::f32::consts::PI;

use bevy::{
    input::{
        gestures::PinchGesture,
        mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
        touch::Touches,
    },
    pbr::{DistanceFog, FogFalloff},
    prelude::*,
};

use crate::time::SimClock;
use crate::types::{OrrerySet, UiPointerCapture};

/// Closest allowed camera distance from the origin.
pub const MIN_DISTANCE: f32 = 15.0;

/// Furthest allowed camera distance from the origin.
pub const MAX_DISTANCE: f32 = 250.0;

/// Polar angle limits keep the camera off the poles.
pub const MIN_POLAR: f32 = 0.1;
pub const MAX_POLAR: f32 = PI - 0.1;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.01;

/// Fractional distance change per zoom step.
pub const ZOOM_STEP: f32 = 0.1;

/// Idle drift: `y += sin(elapsed * DRIFT_FREQUENCY) * DRIFT_AMPLITUDE` per frame.
pub const DRIFT_FREQUENCY: f32 = 0.1;
pub const DRIFT_AMPLITUDE: f32 = 0.02;

/// Starting camera position, looking at the origin.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 30.0, 60.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Linear fog range, matching the depth of the planetary system.
pub const FOG_START: f32 = 100.0;
pub const FOG_END: f32 = 300.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical camera state around the world origin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// Distance from the origin, within `[MIN_DISTANCE, MAX_DISTANCE]`.
    pub distance: f32,
    /// Rotation about the y axis, measured from +z towards +x.
    pub azimuth: f32,
    /// Angle from the +y axis, within `[MIN_POLAR, MAX_POLAR]`.
    pub polar: f32,
    /// Accumulated idle drift added to the camera height.
    pub drift: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_position(INITIAL_POSITION)
    }
}

impl CameraRig {
    /// Derive spherical coordinates from a Cartesian position (used once at setup).
    pub fn from_position(position: Vec3) -> Self {
        let distance = position.length().max(f32::EPSILON);
        let polar = (position.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = position.x.atan2(position.z);
        Self {
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            azimuth,
            polar: polar.clamp(MIN_POLAR, MAX_POLAR),
            drift: 0.0,
        }
    }

    /// Rotate around the origin by a pointer drag of `delta` pixels.
    pub fn on_drag(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * ROTATE_SPEED;
        self.polar = (self.polar + delta.y * ROTATE_SPEED).clamp(MIN_POLAR, MAX_POLAR);
    }

    /// Zoom one step. Positive `direction` zooms out, negative zooms in, zero is ignored.
    pub fn on_zoom(&mut self, direction: f32) {
        if direction == 0.0 || !direction.is_finite() {
            return;
        }
        self.set_distance(self.distance * (1.0 + direction.signum() * ZOOM_STEP));
    }

    /// Set the distance, clamped to the allowed range.
    pub fn set_distance(&mut self, distance: f32) {
        if distance.is_nan() {
            return;
        }
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Add one frame of idle drift for the given elapsed wall time.
    pub fn apply_idle_drift(&mut self, elapsed: f32) {
        self.drift += (elapsed * DRIFT_FREQUENCY).sin() * DRIFT_AMPLITUDE;
    }

    /// Position on the orbit sphere, without drift.
    pub fn orbit_position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vec3::new(
            self.distance * sin_polar * sin_azimuth,
            self.distance * cos_polar,
            self.distance * sin_polar * cos_azimuth,
        )
    }

    /// Final camera position including drift.
    pub fn position(&self) -> Vec3 {
        self.orbit_position() + Vec3::Y * self.drift
    }

    /// Camera transform aimed at the origin.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Resource tracking whether a mouse drag is in progress.
#[derive(Resource, Default)]
pub struct DragState {
    /// Left button went down over the viewport and has not been released.
    pub dragging: bool,
}

/// Plugin providing camera spawn, input and drift.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .init_resource::<DragState>()
            .init_resource::<UiPointerCapture>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_mouse_drag, camera_touch_drag, camera_zoom).in_set(OrrerySet::Input),
            )
            .add_systems(
                Update,
                (camera_idle_drift, apply_camera_transform)
                    .chain()
                    .in_set(OrrerySet::Camera),
            );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        rig.transform(),
        DistanceFog {
            color: Color::BLACK,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        // Dim fill so the night side of planets is not pitch black
        AmbientLight {
            color: Color::srgb(0.25, 0.25, 0.25),
            brightness: 150.0,
            ..default()
        },
        MainCamera,
    ));

    info!(
        "Camera at distance {:.1}, polar {:.3}",
        rig.distance, rig.polar
    );
}

/// Rotate the camera while the left mouse button drags over the viewport.
fn camera_mouse_drag(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    capture: Res<UiPointerCapture>,
    mut drag: ResMut<DragState>,
    mut rig: ResMut<CameraRig>,
) {
    // Only drags that start outside UI panels rotate the camera
    if mouse_buttons.just_pressed(MouseButton::Left) && !capture.over_ui {
        drag.dragging = true;
    }
    if !mouse_buttons.pressed(MouseButton::Left) {
        drag.dragging = false;
        return;
    }

    if drag.dragging && mouse_motion.delta != Vec2::ZERO {
        rig.on_drag(mouse_motion.delta);
    }
}

/// Rotate the camera with a single-finger touch drag. Multi-touch is ignored.
fn camera_touch_drag(
    touches: Res<Touches>,
    capture: Res<UiPointerCapture>,
    mut rig: ResMut<CameraRig>,
) {
    if capture.over_ui {
        return;
    }

    let mut active = touches.iter();
    let (Some(touch), None) = (active.next(), active.next()) else {
        return;
    };

    let delta = touch.delta();
    if delta != Vec2::ZERO {
        rig.on_drag(delta);
    }
}

/// Zoom with the scroll wheel or a trackpad pinch.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut pinches: MessageReader<PinchGesture>,
    capture: Res<UiPointerCapture>,
    mut rig: ResMut<CameraRig>,
) {
    let pinch: f32 = pinches.read().map(|gesture| gesture.0).sum();
    if capture.over_ui {
        return;
    }

    // Scrolling up (positive y) moves the camera closer
    if mouse_scroll.delta.y != 0.0 {
        rig.on_zoom(-mouse_scroll.delta.y.signum());
    }

    // Positive pinch magnifies
    if pinch != 0.0 {
        rig.on_zoom(-pinch.signum());
    }
}

/// Apply the idle drift, whether or not the simulation is paused.
fn camera_idle_drift(clock: Res<SimClock>, mut rig: ResMut<CameraRig>) {
    if !clock.is_running() {
        return;
    }
    rig.apply_idle_drift(clock.elapsed());
}

/// Write the rig pose onto the camera transform.
fn apply_camera_transform(
    rig: Res<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !rig.is_changed() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = rig.transform();
}
