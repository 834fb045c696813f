//! Fiber placement.
//!
//! Maps one (elevation, azimuth) sample on the base sphere to the placement
//! of its fiber in 3D: a circle for every elevation inside `[0, π)`, a
//! straight line for the degenerate pole at elevation π. The two cases are a
//! tagged enum rather than one struct with a pole flag, so nothing can read
//! circle fields off the line fiber.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};
use crate::error::ConfigurationError;

/// Nominal cross-section radius shared by all fibers.
pub const SECTION_RADIUS: f64 = 0.02;
/// Multiplier from cross-section radius to bevel depth.
pub const BEVEL_FACTOR: f64 = 4.0;
/// Multiplier from cross-section radius to extrusion depth.
pub const EXTRUDE_FACTOR: f64 = 10.0;
/// Linear scale applied along the pole fiber's axis to stand in for an
/// unbounded line.
pub const POLE_LENGTH_SCALE: f64 = 1000.0;

/// Where and how a fiber sits in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FiberPlacement {
    /// A circle in the local frame given by the two rotations.
    Circle {
        center: DVec3,
        radius: f64,
        rotation_y: f64,
        rotation_z: f64,
    },
    /// The degenerate pole fiber: a long straight segment through the
    /// origin, along the x-axis rotated by `axis_rotation_y` about y.
    Line {
        axis_rotation_y: f64,
        length_scale: f64,
    },
}

/// Visual thickness of a fiber, scaled so on-screen width is roughly
/// constant across fibers of different geometric radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub bevel_depth: f64,
    pub extrude: f64,
}

/// End-point flare attached to a circle fiber when requested: the curve's
/// terminal points get an enlarged radius and opposing tilts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flare {
    pub end_radius: f64,
    pub tilt_in_degrees: f64,
    pub tilt_out_degrees: f64,
}

impl Default for Flare {
    fn default() -> Self {
        Self {
            end_radius: 10.0,
            tilt_in_degrees: -100.0,
            tilt_out_degrees: 100.0,
        }
    }
}

/// One generated fiber: sampled angles, placement, thickness, and color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberDescriptor {
    /// The sampled elevation (grid value; placement halves it internally).
    pub elevation: f64,
    /// The sampled azimuth.
    pub azimuth: f64,
    pub placement: FiberPlacement,
    pub cross_section: CrossSection,
    pub color: Rgb,
    pub flare: Option<Flare>,
}

impl FiberDescriptor {
    /// True only for the degenerate pole fiber.
    #[must_use]
    pub fn is_pole(&self) -> bool {
        matches!(self.placement, FiberPlacement::Line { .. })
    }

    /// The fiber's anchor point for path aggregation. The pole fiber
    /// anchors at the origin.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        match self.placement {
            FiberPlacement::Circle { center, .. } => center,
            FiberPlacement::Line { .. } => DVec3::ZERO,
        }
    }

    /// Attach the end-point flare. No effect on the pole fiber, which has
    /// no terminal bezier points to flare.
    #[must_use]
    pub fn with_flare(mut self) -> Self {
        if !self.is_pole() {
            self.flare = Some(Flare::default());
        }
        self
    }
}

/// Place the fiber for one `(elevation, azimuth)` sample.
///
/// `elevation = π` produces the pole line; any other elevation in `[0, π)`
/// produces a circle. `elevation = 0` is valid here (the unit equatorial
/// circle) even though the grid never emits it.
pub fn place(elevation: f64, azimuth: f64) -> Result<FiberDescriptor, ConfigurationError> {
    if !(0.0..=PI).contains(&elevation) {
        return Err(ConfigurationError::ElevationOutOfRange(elevation));
    }

    if elevation == PI {
        return Ok(FiberDescriptor {
            elevation,
            azimuth,
            placement: FiberPlacement::Line {
                axis_rotation_y: FRAC_PI_2,
                length_scale: POLE_LENGTH_SCALE,
            },
            cross_section: CrossSection {
                bevel_depth: SECTION_RADIUS * BEVEL_FACTOR,
                extrude: 0.0,
            },
            color: color::color_for(elevation, azimuth, true),
            flare: None,
        });
    }

    let h = elevation / 2.0;
    let base_radius = 2.0 * (1.0 / (FRAC_PI_2 - h) - 2.0 / PI);
    let radius = base_radius + 1.0 / (base_radius + 1.0);
    if !radius.is_finite() {
        // Reachable only for direct calls with elevation pushed against the
        // pole in floating point.
        return Err(ConfigurationError::DegenerateRadius { elevation });
    }

    Ok(FiberDescriptor {
        elevation,
        azimuth,
        placement: FiberPlacement::Circle {
            center: DVec3::new(base_radius * azimuth.sin(), base_radius * azimuth.cos(), 0.0),
            radius,
            rotation_y: h,
            rotation_z: -azimuth,
        },
        cross_section: CrossSection {
            bevel_depth: SECTION_RADIUS / radius * BEVEL_FACTOR,
            extrude: SECTION_RADIUS / radius * EXTRUDE_FACTOR,
        },
        color: color::color_for(elevation, azimuth, false),
        flare: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn circle_of(fiber: &FiberDescriptor) -> (DVec3, f64, f64, f64) {
        match fiber.placement {
            FiberPlacement::Circle {
                center,
                radius,
                rotation_y,
                rotation_z,
            } => (center, radius, rotation_y, rotation_z),
            FiberPlacement::Line { .. } => panic!("expected a circle fiber"),
        }
    }

    #[test]
    fn test_equatorial_fiber_is_unit_circle_at_origin() {
        let fiber = place(0.0, 0.0).unwrap();
        let (center, radius, rotation_y, rotation_z) = circle_of(&fiber);
        assert!(center.length() < EPSILON, "center must be the origin");
        assert!((radius - 1.0).abs() < EPSILON, "radius must be 1");
        assert!(rotation_y.abs() < EPSILON);
        assert!(rotation_z.abs() < EPSILON);
        assert!(!fiber.is_pole());
    }

    #[test]
    fn test_pole_fiber_is_line_through_origin() {
        for azimuth in [0.0, 1.0, 4.5] {
            let fiber = place(PI, azimuth).unwrap();
            assert!(fiber.is_pole());
            assert_eq!(fiber.center(), DVec3::ZERO);
            match fiber.placement {
                FiberPlacement::Line {
                    axis_rotation_y,
                    length_scale,
                } => {
                    assert!((axis_rotation_y - FRAC_PI_2).abs() < EPSILON);
                    assert_eq!(length_scale, POLE_LENGTH_SCALE);
                }
                FiberPlacement::Circle { .. } => panic!("pole must be a line"),
            }
            assert_eq!(fiber.color, crate::color::Rgb::BLUE);
        }
    }

    #[test]
    fn test_placement_formula() {
        let elevation = PI / 3.0;
        let azimuth = 1.25;
        let fiber = place(elevation, azimuth).unwrap();
        let (center, radius, rotation_y, rotation_z) = circle_of(&fiber);

        let h = elevation / 2.0;
        let base = 2.0 * (1.0 / (FRAC_PI_2 - h) - 2.0 / PI);
        assert!((radius - (base + 1.0 / (base + 1.0))).abs() < EPSILON);
        assert!((center.x - base * azimuth.sin()).abs() < EPSILON);
        assert!((center.y - base * azimuth.cos()).abs() < EPSILON);
        assert_eq!(center.z, 0.0);
        assert!((rotation_y - h).abs() < EPSILON);
        assert!((rotation_z + azimuth).abs() < EPSILON);
    }

    #[test]
    fn test_azimuth_samples_distinguishable() {
        let elevation = 2.0 * PI / 3.0;
        let a = place(elevation, 0.5).unwrap();
        let b = place(elevation, 2.5).unwrap();
        assert_ne!(a.center(), b.center(), "distinct azimuths move the center");

        let (_, radius_a, ..) = circle_of(&a);
        let (_, radius_b, ..) = circle_of(&b);
        assert!(
            (radius_a - radius_b).abs() < EPSILON,
            "radius depends only on elevation"
        );
    }

    #[test]
    fn test_cross_section_shrinks_with_radius() {
        let near = place(0.5, 0.0).unwrap();
        let far = place(2.8, 0.0).unwrap();
        let (_, radius_near, ..) = circle_of(&near);
        let (_, radius_far, ..) = circle_of(&far);
        assert!(radius_far > radius_near);
        assert!(
            far.cross_section.bevel_depth < near.cross_section.bevel_depth,
            "larger fibers get a thinner cross section"
        );
        assert!(
            (near.cross_section.bevel_depth * radius_near
                - far.cross_section.bevel_depth * radius_far)
                .abs()
                < EPSILON,
            "bevel depth scales exactly inversely with radius"
        );
    }

    #[test]
    fn test_out_of_range_elevation_rejected() {
        for bad in [-0.1, PI + 0.1, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    place(bad, 0.0),
                    Err(ConfigurationError::ElevationOutOfRange(_))
                ),
                "elevation {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_flare_attaches_to_circles_only() {
        let circle = place(1.0, 0.0).unwrap().with_flare();
        assert_eq!(circle.flare, Some(Flare::default()));

        let pole = place(PI, 0.0).unwrap().with_flare();
        assert_eq!(pole.flare, None);
    }
}
