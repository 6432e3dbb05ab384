//! Body meshes and transform sync.
//!
//! Each rendered body carries only a [`BodyVisual`] back-reference; positions and
//! spins are copied from the registry every frame the registry changes.

use bevy::prelude::*;

use crate::bodies::{BodyId, BodyKind, BodyRegistry};

/// Radius of the translucent corona around the Sun.
pub const CORONA_RADIUS: f32 = 3.5;

/// Glow shell radius relative to a gas giant's radius.
pub const GLOW_SCALE: f32 = 1.1;

/// Component linking a render entity to its body record.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyVisual(pub BodyId);

/// Plugin providing body spawning and sync.
pub struct BodyVisualPlugin;

impl Plugin for BodyVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Approximate visual color for a body.
pub fn body_color(id: BodyId) -> Color {
    match id {
        BodyId::Sun => Color::srgb_u8(0xfd, 0xb8, 0x13),
        BodyId::Mercury => Color::srgb_u8(0x8c, 0x78, 0x53),
        BodyId::Venus => Color::srgb_u8(0xff, 0xc6, 0x49),
        BodyId::Earth => Color::srgb_u8(0x6b, 0x93, 0xd6),
        BodyId::Mars => Color::srgb_u8(0xc1, 0x44, 0x0e),
        BodyId::Jupiter => Color::srgb_u8(0xd8, 0xca, 0x9d),
        BodyId::Saturn => Color::srgb_u8(0xfa, 0xd5, 0xa5),
        BodyId::Uranus => Color::srgb_u8(0x4f, 0xd0, 0xe7),
        BodyId::Neptune => Color::srgb_u8(0x4b, 0x70, 0xdd),
    }
}

/// Translucent unlit shell used for the corona and gas giant glows.
fn shell_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(0.1),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Spawn one mesh per registered body.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<BodyRegistry>,
) {
    for body in registry.iter() {
        let color = body_color(body.id);

        let material = match body.kind {
            // The Sun glows and is not shaded by its own light
            BodyKind::Sun => StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 4.0,
                unlit: true,
                ..default()
            },
            BodyKind::Planet => StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.8,
                ..default()
            },
        };

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.radius))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(body.position),
            BodyVisual(body.id),
            Name::new(body.name()),
        ));

        let shell_radius = match body.kind {
            BodyKind::Sun => Some(CORONA_RADIUS),
            BodyKind::Planet if body.id.is_gas_giant() => Some(body.radius * GLOW_SCALE),
            BodyKind::Planet => None,
        };

        if let Some(radius) = shell_radius {
            let mesh = meshes.add(Sphere::new(radius));
            let material = materials.add(shell_material(color));
            entity.with_children(|parent| {
                parent.spawn((Mesh3d(mesh), MeshMaterial3d(material)));
            });
        }
    }

    info!("Spawned {} bodies", registry.len());
}

/// Copy registry positions and spins onto body transforms.
pub fn sync_body_transforms(
    registry: Res<BodyRegistry>,
    mut query: Query<(&BodyVisual, &mut Transform)>,
) {
    if !registry.is_changed() {
        return;
    }

    for (visual, mut transform) in query.iter_mut() {
        let Some(body) = registry.get(visual.0) else {
            continue;
        };
        transform.translation = body.position;
        transform.rotation = Quat::from_rotation_y(body.axial_rotation as f32);
    }
}
