// File: src/config.rs
// Purpose: Configuration parsing from formcheck.toml

use crate::evaluator::ValidateOptions;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How records are evaluated
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    #[serde(default = "default_false")]
    pub stop_on_first_field_error: bool,

    /// Evaluation date used instead of the local calendar date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Diagnostic output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ValidationConfig {
    pub fn options(&self) -> ValidateOptions {
        ValidateOptions {
            stop_on_first_field_error: self.stop_on_first_field_error,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./formcheck.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formcheck.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(!config.validation.stop_on_first_field_error);
        assert_eq!(config.validation.today, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.validation.options(), ValidateOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [validation]
            stop_on_first_field_error = true
            today = "2024-06-01"

            [logging]
            level = "debug"
        "#;

        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validation.options().stop_on_first_field_error);
        assert_eq!(
            config.validation.today,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = toml::from_str("[logging]\nlevel = \"warn\"").unwrap();
        assert_eq!(config.validation, ValidationConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(dir.path().join("formcheck.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[validation]\nstop_on_first_field_error = true").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert!(config.validation.stop_on_first_field_error);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[validation]\nstop_on_first_field_error = \"sometimes\"").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
