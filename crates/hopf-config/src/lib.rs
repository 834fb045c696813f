//! Configuration system for the Hopf fibration layout generator.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, FibrationConfig};
pub use error::ConfigError;
