//! # Configuration Management Module
//!
//! ## Purpose
//! Configuration for suggester behavior, loaded from TOML files with
//! environment variable overrides and validation.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration struct with defaults
//! - **Validation**: Range checks with detailed error messages
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (highest priority)
//! 2. Configuration files
//! 3. Default values (lowest priority)

use crate::errors::{Result, SuggestError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of completions returned when the caller does not ask for a
/// specific result size.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default multiplier applied to a term's recorded search count. Large enough
/// that a single recorded search dominates base-score ties between terms.
pub const DEFAULT_SEARCHED_MULTIPLIER: u64 = 1_000;

/// Suggester behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
    /// Default maximum number of completions per query
    pub max_results: usize,
    /// Weight multiplier for each recorded search of a term
    pub searched_multiplier: u64,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            searched_multiplier: DEFAULT_SEARCHED_MULTIPLIER,
        }
    }
}

impl SuggesterConfig {
    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SuggestError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: SuggesterConfig =
            toml::from_str(&content).map_err(|e| SuggestError::Config {
                message: format!("Failed to parse config file {:?}: {}", path, e),
            })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(max_results) = std::env::var("SUGGESTER_MAX_RESULTS") {
            self.max_results = max_results.parse().map_err(|_| SuggestError::Config {
                message: "Invalid value in SUGGESTER_MAX_RESULTS".to_string(),
            })?;
        }
        if let Ok(multiplier) = std::env::var("SUGGESTER_SEARCHED_MULTIPLIER") {
            self.searched_multiplier = multiplier.parse().map_err(|_| SuggestError::Config {
                message: "Invalid value in SUGGESTER_SEARCHED_MULTIPLIER".to_string(),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SuggestError::ValidationFailed {
                field: "max_results".to_string(),
                reason: "Result size cannot be zero".to_string(),
            });
        }

        // A zero multiplier would erase the popularity signal entirely.
        if self.searched_multiplier == 0 {
            return Err(SuggestError::ValidationFailed {
                field: "searched_multiplier".to_string(),
                reason: "Multiplier must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SuggestError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
