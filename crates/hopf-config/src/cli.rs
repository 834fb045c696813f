//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Hopf fibration layout generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "hopf", about = "Hopf fibration layout generator")]
pub struct CliArgs {
    /// Number of elevation bands.
    #[arg(long)]
    pub tori: Option<u32>,

    /// Azimuth samples per band.
    #[arg(long)]
    pub fibres_per_torus: Option<u32>,

    /// Fraction of a full revolution sampled in azimuth (0, 1].
    #[arg(long)]
    pub section: Option<f64>,

    /// Attach decorative torus rings to the fibers.
    #[arg(long)]
    pub spacetime: Option<bool>,

    /// Build the connecting gizmo ribbon.
    #[arg(long)]
    pub gizmo: Option<bool>,

    /// Flare each fiber's end points.
    #[arg(long)]
    pub flare: Option<bool>,

    /// Twist the decorative rings by hue.
    #[arg(long)]
    pub twist: Option<bool>,

    /// Output format ("ron" or "json").
    #[arg(long)]
    pub format: Option<String>,

    /// Output file path (stdout when omitted).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(tori) = args.tori {
            self.fibration.tori = tori;
        }
        if let Some(fibres) = args.fibres_per_torus {
            self.fibration.fibres_per_torus = fibres;
        }
        if let Some(section) = args.section {
            self.fibration.section = section;
        }
        if let Some(spacetime) = args.spacetime {
            self.fibration.spacetime = spacetime;
        }
        if let Some(gizmo) = args.gizmo {
            self.fibration.gizmo = gizmo;
        }
        if let Some(flare) = args.flare {
            self.fibration.flare = flare;
        }
        if let Some(twist) = args.twist {
            self.fibration.twist = twist;
        }
        if let Some(ref format) = args.format {
            self.export.format = format.clone();
        }
        if let Some(ref output) = args.output {
            self.export.output = Some(output.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
