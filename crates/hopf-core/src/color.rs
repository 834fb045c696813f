//! Deterministic per-fiber coloring.
//!
//! Each fiber's hue is a linear blend of its base-sphere coordinates; the
//! pole fiber is always pure blue.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// An RGB triple with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const RED: Rgb = Rgb {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

/// Hue in degrees for a fiber sampled at `(elevation, azimuth)`.
///
/// `elevation` is the grid value, exactly as handed to the placer. The
/// result is NOT wrapped modulo 360 before the HSV sector lookup below;
/// hues at or past 360° fall through to the last sector. Known quirk,
/// kept for parity with existing renders.
#[inline]
#[must_use]
pub fn hue_degrees(elevation: f64, azimuth: f64) -> f64 {
    azimuth * 15.0 / PI + elevation * 330.0 / PI
}

/// Convert HSV to RGB via the standard six-sector interpolation.
///
/// Assumes `hue` already lies in `[0, 360)`; values outside that range are
/// not normalized (see [`hue_degrees`]).
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

/// Color for the fiber at `(elevation, azimuth)`; the pole fiber is fixed
/// pure blue regardless of azimuth.
#[must_use]
pub fn color_for(elevation: f64, azimuth: f64, is_pole: bool) -> Rgb {
    if is_pole {
        return Rgb::BLUE;
    }
    hsv_to_rgb(hue_degrees(elevation, azimuth), 1.0, 1.0)
}
