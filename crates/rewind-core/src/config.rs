//! Configuration loaded from a TOML file.
//!
//! ```toml
//! [judge]
//! timing_miss_policy = "always-advance"
//!
//! [correction]
//! seed = 1234
//!
//! [score]
//! force_full_combo = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::judge::TimingMissPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub judge: JudgeConfig,
    pub correction: CorrectionConfig,
    pub score: ScoreConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.correction.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    pub timing_miss_policy: TimingMissPolicy,
}

/// Sampling ranges for the aim corrector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Fixed RNG seed; unset means a fresh random edit every run
    pub seed: Option<u64>,
    /// Lower bound of the fraction of the hit radius the press lands at
    pub ratio_floor: f64,
    /// Half-width of the edited frame window, drawn from `min..max`
    pub neighborhood_min: usize,
    pub neighborhood_max: usize,
    /// Per-frame decay base, drawn from `min..max`
    pub pull_min: f64,
    pub pull_max: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ratio_floor: 0.5,
            neighborhood_min: 12,
            neighborhood_max: 18,
            pull_min: 0.8,
            pull_max: 0.9,
        }
    }
}

impl CorrectionConfig {
    /// Every sampling range must be non-empty and inside its domain.
    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.ratio_floor && self.ratio_floor < 1.0) {
            return Err(Error::ConfigParseError(format!(
                "correction.ratio_floor must be in (0, 1), got {}",
                self.ratio_floor
            )));
        }
        if self.neighborhood_min >= self.neighborhood_max {
            return Err(Error::ConfigParseError(format!(
                "correction.neighborhood_min ({}) must be below neighborhood_max ({})",
                self.neighborhood_min, self.neighborhood_max
            )));
        }
        if !(0.0 < self.pull_min && self.pull_min < self.pull_max && self.pull_max <= 1.0) {
            return Err(Error::ConfigParseError(format!(
                "correction pull range must satisfy 0 < pull_min < pull_max <= 1, got {}..{}",
                self.pull_min, self.pull_max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Overwrite the recorded max combo with the chart's after reconstruction
    pub force_full_combo: bool,
}
