use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::resolver::ResolverConfig;

pub const CONFIG_ENV_VAR: &str = "ZONECRAWL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "zonecrawl.toml";

/// Main configuration structure for zonecrawl
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External resolver invocation
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Output file naming
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonecrawl.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "resolver.program cannot be empty".to_string(),
            ));
        }

        if self.resolver.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "resolver.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.output.metadata_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.metadata_file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
