//! Scene descriptor serialization.
//!
//! The generation core hands its descriptors to an external scene assembler;
//! this crate is that boundary. A [`hopf_core::FibrationScene`] is written
//! out as RON or JSON for whatever host application builds the actual
//! curves, meshes, and materials.

use std::io::Write;

use hopf_core::FibrationScene;

/// Errors that can occur while exporting a scene.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Unrecognized output format name.
    #[error("unknown export format {0:?} (expected \"ron\" or \"json\")")]
    UnknownFormat(String),

    /// Failed to serialize the scene to RON.
    #[error("failed to serialize scene to RON: {0}")]
    RonError(#[source] ron::Error),

    /// Failed to serialize the scene to JSON.
    #[error("failed to serialize scene to JSON: {0}")]
    JsonError(#[source] serde_json::Error),

    /// Failed to write the serialized scene.
    #[error("failed to write scene: {0}")]
    IoError(#[source] std::io::Error),
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Ron,
    Json,
}

impl ExportFormat {
    /// Parse a format name as given on the command line or in config.
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name {
            "ron" => Ok(Self::Ron),
            "json" => Ok(Self::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Serialize the scene to a string in the requested format.
pub fn scene_to_string(scene: &FibrationScene, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Ron => {
            let pretty = ron::ser::PrettyConfig::new()
                .depth_limit(4)
                .separate_tuple_members(true)
                .enumerate_arrays(false);
            ron::ser::to_string_pretty(scene, pretty).map_err(ExportError::RonError)
        }
        ExportFormat::Json => serde_json::to_string_pretty(scene).map_err(ExportError::JsonError),
    }
}

/// Serialize the scene and write it to `writer`, with a trailing newline.
pub fn write_scene(
    scene: &FibrationScene,
    format: ExportFormat,
    writer: &mut impl Write,
) -> Result<(), ExportError> {
    let serialized = scene_to_string(scene, format)?;
    writer
        .write_all(serialized.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(ExportError::IoError)
}
