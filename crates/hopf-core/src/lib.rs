//! Geometry and color generation for a Hopf fibration visualization.
//!
//! Maps a sampling grid of (elevation, azimuth) pairs on the base sphere to
//! circle/line placements in 3D, a deterministic hue per fiber, optional
//! decorative torus placements, and a connecting gizmo polyline. The crate
//! is purely computational: it emits descriptors for an external scene
//! assembler and touches no rendering or document state.

mod color;
mod decoration;
mod error;
mod fiber;
mod gizmo;
mod grid;
mod params;
mod scene;

pub use color::{Rgb, color_for, hsv_to_rgb, hue_degrees};
pub use decoration::{
    CAST_FACTOR, DECORATION_SCALE, DecorationDescriptor, TWIST_HUE_DIVISOR, TorusMesh, decorate,
};
pub use error::ConfigurationError;
pub use fiber::{
    BEVEL_FACTOR, CrossSection, EXTRUDE_FACTOR, FiberDescriptor, FiberPlacement, Flare,
    POLE_LENGTH_SCALE, SECTION_RADIUS, place,
};
pub use gizmo::{
    DEFAULT_RADIUS, END_RADIUS, GizmoPath, GizmoPoint, ORIGIN_ANCHOR, RibbonStyle, START_ANCHOR,
    TRAILING_OFFSET,
};
pub use grid::AngleGrid;
pub use params::FibrationParams;
pub use scene::FibrationScene;
