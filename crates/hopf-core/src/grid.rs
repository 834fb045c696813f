//! Sampling grid over the base sphere.
//!
//! Produces the ordered (elevation, azimuth) pairs visited by the generation
//! pass. Elevations stay strictly inside `(0, π)`: the equator (elevation 0)
//! and the pole (elevation π) are deliberately excluded and placed as two
//! explicit extra fibers by the pipeline.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::params::FibrationParams;

/// The ordered elevation and azimuth samples for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleGrid {
    /// `(i+1)·π/tori_count` for `i` in `0..tori_count-1`, strictly increasing.
    pub elevations: Vec<f64>,
    /// `a·2π·section/fibres_per_torus` for `a` in `0..fibres_per_torus`.
    pub azimuths: Vec<f64>,
}

impl AngleGrid {
    /// Sample the grid described by `params`.
    ///
    /// `elevations` has length `tori_count - 1` (empty for `tori_count = 1`);
    /// `azimuths` has length `fibres_per_torus`. Degenerate parameters are
    /// rejected, never clamped.
    pub fn sample(params: &FibrationParams) -> Result<Self, ConfigurationError> {
        params.validate()?;

        let tori = params.tori_count as f64;
        let elevations = (0..params.tori_count.saturating_sub(1))
            .map(|i| (i + 1) as f64 * PI / tori)
            .collect();

        let fibres = params.fibres_per_torus as f64;
        let azimuths = (0..params.fibres_per_torus)
            .map(|a| a as f64 * 2.0 * PI * params.section / fibres)
            .collect();

        Ok(Self {
            elevations,
            azimuths,
        })
    }

    /// Number of grid fibers (excluding the two explicit extra fibers).
    pub fn fiber_count(&self) -> usize {
        self.elevations.len() * self.azimuths.len()
    }
}
