//! The generation pipeline.
//!
//! One call turns a [`FibrationParams`] into the complete set of descriptors
//! an external scene assembler needs: the sampling grid, the ordered fiber
//! list, the parallel decoration list, and the optional gizmo path. The
//! computation is pure and single-threaded; a failure aborts the whole pass
//! and leaves nothing partial behind.

use std::f64::consts::PI;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::decoration::{self, DecorationDescriptor};
use crate::error::ConfigurationError;
use crate::fiber::{self, FiberDescriptor};
use crate::gizmo::GizmoPath;
use crate::grid::AngleGrid;
use crate::params::FibrationParams;

/// Everything one generation pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibrationScene {
    pub grid: AngleGrid,
    /// Fibers in generation order: elevation-major, azimuth-minor, then the
    /// explicit equatorial fiber, then the explicit pole fiber.
    pub fibers: Vec<FiberDescriptor>,
    /// Parallel to `fibers`; `None` for the pole fiber or when decorations
    /// are disabled.
    pub decorations: Vec<Option<DecorationDescriptor>>,
    pub gizmo: Option<GizmoPath>,
}

impl FibrationScene {
    /// Run one generation pass.
    pub fn generate(params: &FibrationParams) -> Result<Self, ConfigurationError> {
        params.validate()?;
        let grid = AngleGrid::sample(params)?;

        let mut fibers = Vec::with_capacity(grid.fiber_count() + 2);
        for &elevation in &grid.elevations {
            for &azimuth in &grid.azimuths {
                let mut fiber = fiber::place(elevation, azimuth)?;
                if params.include_flare {
                    fiber = fiber.with_flare();
                }
                fibers.push(fiber);
            }
        }

        // The grid excludes both extremes; place them explicitly so the
        // family always contains the unit equatorial circle and the pole
        // line, whatever the band count.
        fibers.push(fiber::place(0.0, 0.0)?);
        fibers.push(fiber::place(PI, 0.0)?);

        let decorations = fibers
            .iter()
            .map(|fiber| {
                if params.include_decoration {
                    decoration::decorate(fiber, params.include_twist)
                } else {
                    None
                }
            })
            .collect();

        let centers: Vec<DVec3> = fibers.iter().map(FiberDescriptor::center).collect();
        let gizmo = GizmoPath::build(&centers, params.include_gizmo, true);

        Ok(Self {
            grid,
            fibers,
            decorations,
            gizmo,
        })
    }
}
