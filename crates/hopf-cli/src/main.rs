//! Command-line entry point for the Hopf fibration layout generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. The generated scene descriptors are written to stdout or a file,
//! as RON or JSON, for an external scene assembler to consume.
//!
//! Run with `cargo run -p hopf-cli -- --tori 3 --fibres-per-torus 3 --gizmo true`.

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use hopf_config::{CliArgs, Config};
use hopf_core::FibrationScene;
use hopf_export::ExportFormat;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("hopf")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    hopf_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // A failed pass leaves nothing to assemble; no partial output
            // is ever written.
            error!("generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let format = ExportFormat::parse(&config.export.format)?;
    let params = config.fibration.to_params();

    let scene = FibrationScene::generate(&params)?;
    info!(
        fibers = scene.fibers.len(),
        gizmo = scene.gizmo.is_some(),
        "generated fibration layout"
    );

    match &config.export.output {
        Some(path) => {
            let mut file = File::create(path)?;
            hopf_export::write_scene(&scene, format, &mut file)?;
            info!("wrote scene to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            hopf_export::write_scene(&scene, format, &mut stdout.lock())?;
        }
    }

    Ok(())
}
