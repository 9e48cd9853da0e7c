//! Detector configuration.

use crate::constants::DEFAULT_R2_MIN;
use crate::error::{Result, WallScanError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of the wall detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum squared correlation for a 4-point window to admit a run and
    /// for the run to keep extending.
    /// Default: 0.9
    pub r2_min: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            r2_min: DEFAULT_R2_MIN,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the collinearity threshold.
    pub fn with_r2_min(mut self, value: f64) -> Self {
        self.r2_min = value;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.r2_min) {
            return Err(WallScanError::InvalidThreshold(self.r2_min));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration. Missing fields take their
    /// default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
