//! Generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Immutable input describing one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibrationParams {
    /// Number of elevation bands. The grid samples `tori_count - 1` interior
    /// elevations; the pole itself is handled as one explicit extra fiber.
    pub tori_count: u32,
    /// Azimuth samples per elevation band.
    pub fibres_per_torus: u32,
    /// Fraction of a full revolution sampled in azimuth, in (0, 1].
    pub section: f64,
    /// Attach a decorative torus to every non-pole fiber.
    pub include_decoration: bool,
    /// Build the connecting gizmo polyline through all fiber centers.
    pub include_gizmo: bool,
    /// Flare the end points of each circle fiber.
    pub include_flare: bool,
    /// Add a twist deformation to decorations, strength derived from hue.
    pub include_twist: bool,
}

impl Default for FibrationParams {
    fn default() -> Self {
        Self {
            tori_count: 6,
            fibres_per_torus: 50,
            section: 0.8,
            include_decoration: false,
            include_gizmo: false,
            include_flare: false,
            include_twist: false,
        }
    }
}

impl FibrationParams {
    /// Reject degenerate parameter combinations.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tori_count == 0 {
            return Err(ConfigurationError::InvalidToriCount(self.tori_count));
        }
        if self.fibres_per_torus == 0 {
            return Err(ConfigurationError::InvalidFibreCount(self.fibres_per_torus));
        }
        if !self.section.is_finite() || self.section <= 0.0 || self.section > 1.0 {
            return Err(ConfigurationError::InvalidSection(self.section));
        }
        Ok(())
    }
}
