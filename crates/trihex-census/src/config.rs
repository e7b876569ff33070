//! Census configuration.
//!
//! Ranges are passed explicitly instead of being fixed in a driver script.
//! Defaults reproduce the published tables: an 11 × 11 signature grid,
//! counts through 200 hexagons, deviance statistics over `98..=198`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ranges for one census run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusConfig {
    /// Signature tables cover spine lengths `0..max_spine`
    pub max_spine: u64,

    /// Signature tables cover belt counts `0..max_belts`
    pub max_belts: u64,

    /// Counts and bounds cover hexagon counts `0..=hexagon_count_bound`
    pub hexagon_count_bound: u64,

    /// Deviance statistics start at this hexagon count
    pub deviance_min: u64,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            max_spine: 11,
            max_belts: 11,
            hexagon_count_bound: 200,
            deviance_min: 98,
        }
    }
}

impl CensusConfig {
    /// Defaults overridden by `TRIHEX_MAX_SPINE`, `TRIHEX_MAX_BELTS`,
    /// `TRIHEX_HEXAGON_BOUND` and `TRIHEX_DEVIANCE_MIN`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            max_spine: env_u64("TRIHEX_MAX_SPINE", defaults.max_spine)?,
            max_belts: env_u64("TRIHEX_MAX_BELTS", defaults.max_belts)?,
            hexagon_count_bound: env_u64("TRIHEX_HEXAGON_BOUND", defaults.hexagon_count_bound)?,
            deviance_min: env_u64("TRIHEX_DEVIANCE_MIN", defaults.deviance_min)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded census config");
        Ok(config)
    }

    /// Reject empty grids and inverted deviance windows.
    pub fn validate(&self) -> Result<()> {
        if self.max_spine == 0 || self.max_belts == 0 {
            return Err(Error::InvalidConfig(format!(
                "signature grid {} x {} is empty",
                self.max_spine, self.max_belts
            )));
        }
        if self.deviance_min > self.hexagon_count_bound {
            return Err(Error::InvalidConfig(format!(
                "deviance window starts at {} beyond bound {}",
                self.deviance_min, self.hexagon_count_bound
            )));
        }
        Ok(())
    }
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig(format!("{} is not a non-negative integer: {:?}", name, value))),
        Err(_) => Ok(default),
    }
}
