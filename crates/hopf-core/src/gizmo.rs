//! Gizmo polyline assembly.
//!
//! Threads a single polyline through every generated fiber center, in
//! generation order (elevation-major, azimuth-minor), between two fixed
//! anchor points. The ribbon's visual meaning depends on that order, so the
//! builder takes an explicitly ordered slice rather than any set-like input.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// First anchor, high above the scene on the z axis.
pub const START_ANCHOR: DVec3 = DVec3::new(0.0, 0.0, 50.0);
/// Second anchor at the origin.
pub const ORIGIN_ANCHOR: DVec3 = DVec3::ZERO;
/// Offset of the optional trailing point from the last fiber center.
pub const TRAILING_OFFSET: DVec3 = DVec3::new(0.0, 50.0, 0.0);

/// Taper radius at the first and last points.
pub const END_RADIUS: f64 = 10.0;
/// Per-point radius everywhere else.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// One polyline vertex with its taper radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GizmoPoint {
    pub position: DVec3,
    pub radius: f64,
}

/// How the assembler should turn the polyline into a ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonStyle {
    pub extrude: f64,
    pub thickness: f64,
    pub material_a: Rgb,
    pub material_b: Rgb,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            extrude: 0.4,
            thickness: 0.1,
            material_a: Rgb::RED,
            material_b: Rgb::BLUE,
        }
    }
}

/// The connecting polyline through all fiber centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GizmoPath {
    pub points: Vec<GizmoPoint>,
    pub ribbon: RibbonStyle,
}

impl GizmoPath {
    /// Assemble the path, or `None` when disabled or when fewer than two
    /// centers are available.
    ///
    /// Points: start anchor, origin anchor, every center in order, then
    /// (when `append_trailing`) the last center shifted by
    /// [`TRAILING_OFFSET`]. Radii default to 1, overridden to 10 at index
    /// 0, 0 at index 1, and 10 at the last index.
    #[must_use]
    pub fn build(centers: &[DVec3], enabled: bool, append_trailing: bool) -> Option<Self> {
        if !enabled || centers.len() < 2 {
            return None;
        }

        let mut points: Vec<GizmoPoint> = [START_ANCHOR, ORIGIN_ANCHOR]
            .iter()
            .chain(centers)
            .map(|&position| GizmoPoint {
                position,
                radius: DEFAULT_RADIUS,
            })
            .collect();

        if append_trailing {
            let last = points[points.len() - 1].position;
            points.push(GizmoPoint {
                position: last + TRAILING_OFFSET,
                radius: DEFAULT_RADIUS,
            });
        }

        points[1].radius = 0.0;
        points[0].radius = END_RADIUS;
        let last = points.len() - 1;
        points[last].radius = END_RADIUS;

        Some(Self {
            points,
            ribbon: RibbonStyle::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(n: usize) -> Vec<DVec3> {
        (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_disabled_builds_nothing() {
        assert!(GizmoPath::build(&centers(5), false, true).is_none());
    }

    #[test]
    fn test_too_few_centers_builds_nothing() {
        assert!(GizmoPath::build(&centers(0), true, true).is_none());
        assert!(GizmoPath::build(&centers(1), true, true).is_none());
    }

    #[test]
    fn test_point_order_and_radii() {
        let path = GizmoPath::build(&centers(3), true, false).unwrap();
        assert_eq!(path.points.len(), 5);
        assert_eq!(path.points[0].position, START_ANCHOR);
        assert_eq!(path.points[1].position, ORIGIN_ANCHOR);
        for (i, point) in path.points[2..].iter().enumerate() {
            assert_eq!(point.position, DVec3::new(i as f64, 0.0, 0.0));
        }

        assert_eq!(path.points[0].radius, END_RADIUS);
        assert_eq!(path.points[1].radius, 0.0);
        assert_eq!(path.points[4].radius, END_RADIUS);
        assert_eq!(path.points[2].radius, DEFAULT_RADIUS);
        assert_eq!(path.points[3].radius, DEFAULT_RADIUS);
    }

    #[test]
    fn test_trailing_point_offsets_last_center() {
        let path = GizmoPath::build(&centers(3), true, true).unwrap();
        assert_eq!(path.points.len(), 6);
        let trailing = path.points[5];
        assert_eq!(
            trailing.position,
            DVec3::new(2.0, 50.0, 0.0),
            "trailing point sits 50 above the last center on y"
        );
        assert_eq!(trailing.radius, END_RADIUS);
        // The last real center keeps the default radius once a trailing
        // point takes over the end of the path.
        assert_eq!(path.points[4].radius, DEFAULT_RADIUS);
    }

    #[test]
    fn test_ribbon_style_defaults() {
        let path = GizmoPath::build(&centers(2), true, false).unwrap();
        assert_eq!(path.ribbon.extrude, 0.4);
        assert_eq!(path.ribbon.thickness, 0.1);
        assert_eq!(path.ribbon.material_a, Rgb::RED);
        assert_eq!(path.ribbon.material_b, Rgb::BLUE);
    }
}
