//! Body catalog and registry.
//!
//! The registry is the sole owner of every Sun/Planet record. Render entities only
//! hold a [`BodyId`] and look their body up here.

use std::f64::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::error::OrreryError;

/// Identifier for the bodies of the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// Every body, Sun first, planets by increasing distance.
    pub const ALL: &'static [BodyId] = &[
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// All planets (not including the Sun).
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }

    /// Kind of body this id names.
    pub fn kind(&self) -> BodyKind {
        match self {
            BodyId::Sun => BodyKind::Sun,
            _ => BodyKind::Planet,
        }
    }

    /// Gas giants get a faint glow shell when rendered.
    pub fn is_gas_giant(&self) -> bool {
        matches!(
            self,
            BodyId::Jupiter | BodyId::Saturn | BodyId::Uranus | BodyId::Neptune
        )
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Whether a body sits at the center or orbits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
}

/// Static catalog entry for one body.
#[derive(Clone, Copy, Debug)]
pub struct BodyData {
    pub id: BodyId,
    /// Display radius in scene units (Earth = 1).
    pub radius: f32,
    /// Orbit radius in scene units, shown to users as AU.
    pub distance: f64,
    /// Base angular speed (dimensionless slider units).
    pub speed: f64,
    /// One-line description shown in the tooltip.
    pub description: &'static str,
}

/// The Sun and the eight planets. Sizes and distances are stylized.
pub const CATALOG: [BodyData; 9] = [
    BodyData {
        id: BodyId::Sun,
        radius: 3.0,
        distance: 0.0,
        speed: 0.0,
        description: "The star at the center of our solar system",
    },
    BodyData {
        id: BodyId::Mercury,
        radius: 0.38,
        distance: 8.0,
        speed: 4.74,
        description: "Closest planet to the Sun",
    },
    BodyData {
        id: BodyId::Venus,
        radius: 0.95,
        distance: 12.0,
        speed: 3.5,
        description: "Hottest planet in our solar system",
    },
    BodyData {
        id: BodyId::Earth,
        radius: 1.0,
        distance: 16.0,
        speed: 2.98,
        description: "Our home planet",
    },
    BodyData {
        id: BodyId::Mars,
        radius: 0.53,
        distance: 20.0,
        speed: 2.41,
        description: "The Red Planet",
    },
    BodyData {
        id: BodyId::Jupiter,
        radius: 2.5,
        distance: 28.0,
        speed: 1.31,
        description: "Largest planet in our solar system",
    },
    BodyData {
        id: BodyId::Saturn,
        radius: 2.1,
        distance: 36.0,
        speed: 0.97,
        description: "Famous for its prominent rings",
    },
    BodyData {
        id: BodyId::Uranus,
        radius: 1.6,
        distance: 44.0,
        speed: 0.68,
        description: "Tilted on its side",
    },
    BodyData {
        id: BodyId::Neptune,
        radius: 1.5,
        distance: 52.0,
        speed: 0.54,
        description: "Windiest planet",
    },
];

/// Range planet self-rotation speeds are drawn from (radians per second).
pub const AXIAL_SPEED_RANGE: std::ops::Range<f64> = 0.01..0.03;

/// Simulation record for one body.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub radius: f32,
    /// Zero for the Sun.
    pub orbital_distance: f64,
    pub base_angular_speed: f64,
    /// Always >= 0.
    pub current_angular_speed: f64,
    /// Orbital angle in radians. Never wrapped; only sin/cos consume it.
    pub angle: f64,
    pub axial_rotation_speed: f64,
    /// Accumulated self-rotation about the y axis.
    pub axial_rotation: f64,
    /// World position derived from `angle` and `orbital_distance`.
    pub position: Vec3,
    pub description: &'static str,
}

impl Body {
    fn from_data<R: Rng + ?Sized>(data: &BodyData, rng: &mut R) -> Self {
        let kind = data.id.kind();
        let axial_rotation_speed = match kind {
            BodyKind::Sun => 0.0,
            BodyKind::Planet => rng.random_range(AXIAL_SPEED_RANGE),
        };
        let mut body = Self {
            id: data.id,
            kind,
            radius: data.radius,
            orbital_distance: data.distance,
            base_angular_speed: data.speed,
            current_angular_speed: data.speed,
            angle: random_angle(rng),
            axial_rotation_speed,
            axial_rotation: 0.0,
            position: Vec3::ZERO,
            description: data.description,
        };
        body.update_position();
        body
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn is_planet(&self) -> bool {
        self.kind == BodyKind::Planet
    }

    /// Recompute `position` on the ecliptic (xz) plane from the current angle.
    pub fn update_position(&mut self) {
        let x = self.orbital_distance * self.angle.cos();
        let z = self.orbital_distance * self.angle.sin();
        self.position = Vec3::new(x as f32, 0.0, z as f32);
    }
}

/// Uniform angle in `[0, 2π)`.
pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(0.0..TAU)
}

/// Resource owning every body record, indexed by [`BodyId`].
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    /// Build the registry from a catalog, drawing initial angles from `rng`.
    ///
    /// The catalog must name every [`BodyId`] exactly once, with finite,
    /// non-negative distances and speeds, and only the Sun at distance zero.
    pub fn from_catalog<R: Rng + ?Sized>(
        catalog: &[BodyData],
        rng: &mut R,
    ) -> Result<Self, OrreryError> {
        validate_catalog(catalog)?;

        let mut bodies = Vec::with_capacity(BodyId::ALL.len());
        for id in BodyId::ALL {
            // Presence was checked by validation.
            let Some(data) = catalog.iter().find(|d| d.id == *id) else {
                return Err(OrreryError::InvalidCatalog(format!("{id:?} missing")));
            };
            bodies.push(Body::from_data(data, rng));
        }
        Ok(Self { bodies })
    }

    /// Build the registry from the built-in [`CATALOG`].
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, OrreryError> {
        Self::from_catalog(&CATALOG, rng)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Planets only, in catalog order.
    pub fn planets(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_planet())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn validate_catalog(catalog: &[BodyData]) -> Result<(), OrreryError> {
    if catalog.len() != BodyId::ALL.len() {
        return Err(OrreryError::InvalidCatalog(format!(
            "expected {} bodies, got {}",
            BodyId::ALL.len(),
            catalog.len()
        )));
    }

    for id in BodyId::ALL {
        let count = catalog.iter().filter(|d| d.id == *id).count();
        if count != 1 {
            return Err(OrreryError::InvalidCatalog(format!(
                "{id:?} appears {count} times"
            )));
        }
    }

    for data in catalog {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(data.distance) || !valid(data.speed) {
            return Err(OrreryError::InvalidCatalog(format!(
                "{:?} has a negative or non-finite distance/speed",
                data.id
            )));
        }
        if !(data.radius.is_finite() && data.radius > 0.0) {
            return Err(OrreryError::InvalidCatalog(format!(
                "{:?} has a non-positive radius",
                data.id
            )));
        }
        let at_center = data.distance == 0.0;
        if at_center != (data.id.kind() == BodyKind::Sun) {
            return Err(OrreryError::InvalidCatalog(format!(
                "{:?} has distance {} but only the Sun sits at the center",
                data.id, data.distance
            )));
        }
    }

    Ok(())
}
