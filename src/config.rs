//! Analyzer configuration.
//!
//! Exactly two knobs control the analysis: the sample size cap and
//! the deviation threshold. Both are fixed at start time and passed
//! into the analyzer at construction, never mutated during a run.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default sample size cap in bytes (1 MiB).
pub const DEFAULT_DATASET: usize = 1024 * 1024;

/// Default absolute deviation that triggers a bias verdict.
pub const DEFAULT_THRESHOLD: f64 = 0.0005;

/// Configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of bytes to read from the input.
    pub dataset: usize,
    /// Absolute deviation from the uniform fraction that flags a
    /// byte value as biased.
    pub threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset == 0 {
            return Err(ConfigError::InvalidDataset);
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("dataset size must be at least 1 byte")]
    InvalidDataset,
    #[error("threshold must be a finite, non-negative value")]
    InvalidThreshold,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.analyzer.validate()?;
        Ok(config)
    }
}
