//! Decorative torus placement.
//!
//! Each non-pole fiber can carry one decorative ring expressed entirely in
//! the fiber's local frame. The descriptor has no placement math of its own;
//! the assembler parents it to the fiber and applies the deformations.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};
use crate::fiber::FiberDescriptor;

/// Uniform scale applied to the unit torus.
pub const DECORATION_SCALE: f64 = 0.25;
/// Strength of the spherical cast deformation.
pub const CAST_FACTOR: f64 = -1.5;
/// Divisor from hue degrees to twist strength.
pub const TWIST_HUE_DIVISOR: f64 = 45.0;

/// Mesh resolution and proportions of the decorative torus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusMesh {
    pub major_segments: u32,
    pub minor_segments: u32,
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl Default for TorusMesh {
    fn default() -> Self {
        Self {
            major_segments: 12,
            minor_segments: 12,
            major_radius: 1.0,
            minor_radius: 2.0,
        }
    }
}

/// One decorative ring attached to a non-pole fiber's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    /// Uniform scale relative to the unit torus.
    pub scale: f64,
    /// Spherical cast deformation strength.
    pub cast_factor: f64,
    /// Offset in the parent fiber's frame, along the fiber's tangent.
    pub local_offset: DVec3,
    pub torus: TorusMesh,
    /// Twist deformation strength about the local z axis, when requested.
    pub twist_factor: Option<f64>,
    /// Inherited from the parent fiber.
    pub color: Rgb,
}

/// Derive the decoration for `fiber`, or `None` for the pole fiber.
#[must_use]
pub fn decorate(fiber: &FiberDescriptor, twist: bool) -> Option<DecorationDescriptor> {
    if fiber.is_pole() {
        return None;
    }

    let twist_factor = twist
        .then(|| color::hue_degrees(fiber.elevation, fiber.azimuth) / TWIST_HUE_DIVISOR);

    Some(DecorationDescriptor {
        scale: DECORATION_SCALE,
        cast_factor: CAST_FACTOR,
        local_offset: DVec3::new(0.0, 1.0, 0.0),
        torus: TorusMesh::default(),
        twist_factor,
        color: fiber.color,
    })
}
