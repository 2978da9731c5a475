//! Configuration system for SeatForge.
//!
//! Load engine configuration from TOML or YAML files to control the random
//! seed, the probing budget and the fallback strategy without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatforge_config::{FallbackType, SeatingConfig};
//!
//! let config = SeatingConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//!
//!     [general_placement]
//!     max_trials = 25
//!     fallback = "first_free"
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.general_placement.max_trials, 25);
//! assert_eq!(config.general_placement.fallback, FallbackType::FirstFree);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatforge_config::SeatingConfig;
//!
//! let config = SeatingConfig::load("seating.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of random probes per student before falling back.
pub const DEFAULT_MAX_TRIALS: usize = 10;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeatingConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// General placement configuration.
    #[serde(default)]
    pub general_placement: GeneralPlacementConfig,
}

impl SeatingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed and switches to reproducible mode.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self.environment_mode = EnvironmentMode::Reproducible;
        self
    }

    /// Sets the number of random probes per student.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.general_placement.max_trials = max_trials;
        self
    }

    /// Sets the fallback strategy.
    pub fn with_fallback(mut self, fallback: FallbackType) -> Self {
        self.general_placement.fallback = fallback;
        self
    }

    /// Checks settings that serde cannot express.
    ///
    /// # Errors
    ///
    /// Reproducible mode requires a random seed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment_mode == EnvironmentMode::Reproducible && self.random_seed.is_none() {
            return Err(ConfigError::Invalid(
                "reproducible environment mode requires random_seed".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment mode affecting engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Fresh entropy for every run.
    #[default]
    NonReproducible,

    /// Deterministic runs from `random_seed`.
    Reproducible,
}

/// General placement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneralPlacementConfig {
    /// Random probes per student before the fallback kicks in.
    #[serde(default = "default_max_trials")]
    pub max_trials: usize,

    /// What to do when every probe hit an unsafe seat.
    #[serde(default)]
    pub fallback: FallbackType,
}

impl Default for GeneralPlacementConfig {
    fn default() -> Self {
        Self {
            max_trials: DEFAULT_MAX_TRIALS,
            fallback: FallbackType::default(),
        }
    }
}

fn default_max_trials() -> usize {
    DEFAULT_MAX_TRIALS
}

/// Fallback strategies for general placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackType {
    /// Scan free seats in layout order for a safe one, then take the first
    /// free seat if none is safe.
    #[default]
    FirstSafeThenFirstFree,

    /// Take the first free seat in layout order.
    FirstFree,
}

#[cfg(test)]
mod tests;
