//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use hopf_core::FibrationParams;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Generation settings.
    pub fibration: FibrationConfig,
    /// Output settings.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Generation settings for the fibration layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FibrationConfig {
    /// Number of elevation bands.
    pub tori: u32,
    /// Azimuth samples per band.
    pub fibres_per_torus: u32,
    /// Fraction of a full revolution sampled in azimuth (0, 1].
    pub section: f64,
    /// Attach decorative torus rings to the fibers.
    pub spacetime: bool,
    /// Build the connecting gizmo ribbon.
    pub gizmo: bool,
    /// Flare each fiber's end points.
    pub flare: bool,
    /// Twist the decorative rings by hue.
    pub twist: bool,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Output format name ("ron" or "json").
    pub format: String,
    /// Output file path; stdout when unset.
    pub output: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl FibrationConfig {
    /// Translate config values into generation parameters.
    ///
    /// Validation happens in the core when generation starts; this is a
    /// plain field mapping.
    pub fn to_params(&self) -> FibrationParams {
        FibrationParams {
            tori_count: self.tori,
            fibres_per_torus: self.fibres_per_torus,
            section: self.section,
            include_decoration: self.spacetime,
            include_gizmo: self.gizmo,
            include_flare: self.flare,
            include_twist: self.twist,
        }
    }
}

// --- Default implementations ---

impl Default for FibrationConfig {
    fn default() -> Self {
        Self {
            tori: 6,
            fibres_per_torus: 50,
            section: 0.8,
            spacetime: false,
            gizmo: false,
            flare: false,
            twist: false,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "ron".to_string(),
            output: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("tori: 6"));
        assert!(ron_str.contains("fibres_per_torus: 50"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `export` section entirely
        let ron_str = "(fibration: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_to_params_maps_fields() {
        let fibration = FibrationConfig {
            tori: 3,
            fibres_per_torus: 7,
            section: 1.0,
            spacetime: true,
            gizmo: true,
            flare: false,
            twist: true,
        };
        let params = fibration.to_params();
        assert_eq!(params.tori_count, 3);
        assert_eq!(params.fibres_per_torus, 7);
        assert_eq!(params.section, 1.0);
        assert!(params.include_decoration);
        assert!(params.include_gizmo);
        assert!(!params.include_flare);
        assert!(params.include_twist);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.fibration.tori = 12;
        config.fibration.gizmo = true;
        config.export.format = "json".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.fibration.fibres_per_torus = 100;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().fibration.fibres_per_torus, 100);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
