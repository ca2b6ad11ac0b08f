//! Configuration file loading
//!
//! One distance unit is chosen per deployment and used for radius presets,
//! distance computation and display alike.

use anyhow::{bail, Context, Result};
use parkease_geo::{DistanceUnit, DEFAULT_SEGMENTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CANDIDATES: &[&str] = &[".parkease.toml", "parkease.toml", ".config/parkease.toml"];

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Radius search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub unit: DistanceUnit,

    #[serde(default = "default_radius")]
    pub default_radius: f64,

    /// Radii offered in the filter menu, in `unit`
    #[serde(default = "default_radius_presets")]
    pub radius_presets: Vec<f64>,

    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            default_radius: default_radius(),
            radius_presets: default_radius_presets(),
            circle_segments: default_circle_segments(),
        }
    }
}

fn default_radius() -> f64 {
    1.0
}

fn default_radius_presets() -> Vec<f64> {
    vec![0.5, 1.0, 2.0, 5.0]
}

fn default_circle_segments() -> usize {
    DEFAULT_SEGMENTS
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    pub fn search(&self) -> &SearchConfig {
        &self.schema.search
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let search = &schema.search;
    if !(search.default_radius.is_finite() && search.default_radius > 0.0) {
        bail!("search.default_radius must be positive, got {}", search.default_radius);
    }
    if let Some(bad) = search.radius_presets.iter().find(|r| !(r.is_finite() && **r > 0.0)) {
        bail!("search.radius_presets must all be positive, got {}", bad);
    }
    if search.circle_segments < 3 {
        bail!("search.circle_segments must be at least 3, got {}", search.circle_segments);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.search().unit, DistanceUnit::Miles);
        assert_eq!(config.search().default_radius, 1.0);
        assert_eq!(config.search().radius_presets, vec![0.5, 1.0, 2.0, 5.0]);
        assert_eq!(config.search().circle_segments, 64);
        assert_eq!(config.schema.logging.level, "info");
    }

    #[test]
    fn test_config_load_file() {
        let file = write_config(
            r#"
            [search]
            unit = "kilometers"
            default_radius = 2.0
            radius_presets = [1.0, 2.0, 5.0, 10.0]

            [logging]
            level = "debug"
            "#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.search().unit, DistanceUnit::Kilometers);
        assert_eq!(config.search().default_radius, 2.0);
        assert_eq!(config.search().circle_segments, 64);
        assert_eq!(config.schema.logging.level, "debug");
        assert_eq!(config.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("[logging]\nlevel = \"warn\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.search(), &SearchConfig::default());
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/parkease.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let file = write_config("[search]\ndefault_radius = 0.0\n");
        assert!(Config::load(Some(file.path())).is_err());

        let file = write_config("[search]\nradius_presets = [1.0, -2.0]\n");
        assert!(Config::load(Some(file.path())).is_err());

        let file = write_config("[search]\ncircle_segments = 2\n");
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_rejects_unknown_unit() {
        let file = write_config("[search]\nunit = \"furlongs\"\n");
        assert!(Config::load(Some(file.path())).is_err());
    }
}
