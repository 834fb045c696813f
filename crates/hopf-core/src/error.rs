//! Generation error types.

/// Errors raised when a generation request is given invalid parameters.
///
/// Every variant is fatal to the request that produced it; parameters are
/// never silently clamped or corrected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// `tori_count` must be at least 1.
    #[error("tori count must be at least 1, got {0}")]
    InvalidToriCount(u32),

    /// `fibres_per_torus` must be at least 1.
    #[error("fibres per torus must be at least 1, got {0}")]
    InvalidFibreCount(u32),

    /// `section` must lie in the half-open interval (0, 1].
    #[error("section must lie in (0, 1], got {0}")]
    InvalidSection(f64),

    /// An elevation outside `[0, π]` was passed directly to the placer.
    #[error("elevation {0} lies outside [0, \u{03c0}]")]
    ElevationOutOfRange(f64),

    /// The placement formula produced a non-finite radius.
    ///
    /// Cannot happen for grid-sampled elevations; guards direct placer calls
    /// that approach the division-by-zero boundary.
    #[error("fiber radius is non-finite at elevation {elevation}")]
    DegenerateRadius { elevation: f64 },
}
