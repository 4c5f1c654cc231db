//! Configuration management and validation.
//!
//! Provides configuration structures for the well importer and the
//! orientation output, with TOML file loading and validation rules.

use crate::constants::{COORDINATE_THRESHOLD, MIN_HEADER_FIELDS};
use crate::numeric::AngleUnit;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings for the schema-sniffing well importer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Magnitude from which numeric tokens count as coordinates
    pub coordinate_threshold: f64,

    /// Minimum number of header tokens required for schema detection
    pub min_header_fields: usize,

    /// Ignore empty data lines instead of reporting them
    pub skip_blank_lines: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            coordinate_threshold: COORDINATE_THRESHOLD,
            min_header_fields: MIN_HEADER_FIELDS,
            skip_blank_lines: true,
        }
    }
}

impl ImportConfig {
    /// Use a custom coordinate threshold
    pub fn with_coordinate_threshold(mut self, threshold: f64) -> Self {
        self.coordinate_threshold = threshold;
        self
    }

    /// Report blank data lines as skipped lines
    pub fn with_blank_line_diagnostics(mut self) -> Self {
        self.skip_blank_lines = false;
        self
    }

    /// Validate importer settings
    pub fn validate(&self) -> Result<()> {
        if !self.coordinate_threshold.is_finite() || self.coordinate_threshold <= 0.0 {
            return Err(Error::configuration(format!(
                "coordinate_threshold must be a positive number, got {}",
                self.coordinate_threshold
            )));
        }

        // Both known schemas need six positional fields
        if self.min_header_fields < MIN_HEADER_FIELDS {
            return Err(Error::configuration(format!(
                "min_header_fields must be at least {}, got {}",
                MIN_HEADER_FIELDS, self.min_header_fields
            )));
        }

        Ok(())
    }
}

/// Top-level toolbox configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Importer settings
    pub import: ImportConfig,

    /// Unit used when reporting dip and azimuth
    pub angle_unit: AngleUnit,
}

impl ToolboxConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config: ToolboxConfig = toml::from_str(&content)?;
        config.validate()?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Use a custom angle unit
    pub fn with_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.import.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ToolboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.import.coordinate_threshold, 100_000.0);
        assert_eq!(config.import.min_header_fields, 6);
        assert_eq!(config.angle_unit, AngleUnit::Degree);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ToolboxConfig::default().with_angle_unit(AngleUnit::Gon);
        assert_eq!(config.angle_unit, AngleUnit::Gon);
        assert_eq!(config.import.coordinate_threshold, 100_000.0);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = ImportConfig::default().with_coordinate_threshold(-1.0);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));

        let config = ImportConfig::default().with_coordinate_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_header_fields_below_schema_width_rejected() {
        let config = ImportConfig {
            min_header_fields: 4,
            ..ImportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "angle_unit = \"gon\"").unwrap();
        writeln!(file, "[import]").unwrap();
        writeln!(file, "coordinate_threshold = 50000.0").unwrap();

        let config = ToolboxConfig::load(file.path()).unwrap();
        assert_eq!(config.angle_unit, AngleUnit::Gon);
        assert_eq!(config.import.coordinate_threshold, 50_000.0);
        // Unspecified values keep their defaults
        assert_eq!(config.import.min_header_fields, 6);
        assert!(config.import.skip_blank_lines);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ToolboxConfig::load(Path::new("/nonexistent/toolbox.toml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[import").unwrap();

        let result = ToolboxConfig::load(file.path());
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
