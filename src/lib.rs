//! Orrery - Animated Solar System
//!
//! A library crate providing the body catalog, orbital simulation, camera
//! rig and UI plugins for testing and integration purposes.

pub mod bodies;
pub mod camera;
pub mod controls;
pub mod error;
pub mod picking;
pub mod render;
pub mod simulation;
pub mod time;
pub mod types;
pub mod ui;
