//! Background rendering for the solar system visualization.
//!
//! Provides the starfield and lighting.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Settings for the starfield shell.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    /// Number of stars to scatter.
    pub count: usize,
    /// Inner radius of the shell the stars occupy.
    pub inner_radius: f32,
    /// Outer radius (exclusive).
    pub outer_radius: f32,
    /// Radius of each star sphere.
    pub star_size: f32,
    /// Number of distinct star tints (materials shared between stars).
    pub tints: usize,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 2000,
            inner_radius: 200.0,
            outer_radius: 400.0,
            star_size: 0.6,
            tints: 12,
        }
    }
}

/// One background star.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Vec3,
    /// Index into the tint palette.
    pub tint: usize,
}

/// Scatter stars uniformly over directions, uniformly in radius within the shell.
pub fn generate_starfield<R: Rng + ?Sized>(settings: &StarfieldSettings, rng: &mut R) -> Vec<Star> {
    let tints = settings.tints.max(1);
    (0..settings.count)
        .map(|_| {
            let radius = rng.random_range(settings.inner_radius..settings.outer_radius);
            let theta = rng.random_range(0.0..TAU);
            let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            );
            Star {
                position,
                tint: rng.random_range(0..tints),
            }
        })
        .collect()
}

/// White to blue-white star colors.
pub fn star_palette<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Color> {
    (0..count.max(1))
        .map(|_| {
            let hue = 360.0 * (0.6 + rng.random::<f32>() * 0.1);
            let lightness = 0.8 + rng.random::<f32>() * 0.2;
            Color::hsl(hue, 0.2, lightness)
        })
        .collect()
}

/// Spawn the starfield around the solar system.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let mut rng = rand::rng();

    // Stars are unlit and sit beyond the fog range
    let tints: Vec<Handle<StandardMaterial>> = star_palette(settings.tints, &mut rng)
        .into_iter()
        .map(|color| {
            materials.add(StandardMaterial {
                base_color: color.with_alpha(0.8),
                alpha_mode: AlphaMode::Add,
                unlit: true,
                fog_enabled: false,
                ..default()
            })
        })
        .collect();

    let star_mesh = meshes.add(Sphere::new(settings.star_size));

    let stars = generate_starfield(&settings, &mut rng);
    for star in &stars {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(tints[star.tint % tints.len()].clone()),
            Transform::from_translation(star.position),
        ));
    }

    info!("Spawned {} background stars", stars.len());
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Sunlight radiating from the origin
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 10_000_000.0,
            range: 300.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Faint blue rim light from above the ecliptic
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0x44, 0x44, 0xff),
            illuminance: 300.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 50.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
