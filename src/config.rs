use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_DAYS, DEFAULT_FAMILY_SIZE, DEFAULT_STOCK_MULTIPLIER_MAX, DEFAULT_STOCK_MULTIPLIER_MIN,
};
use crate::error::{Result, SimError};

/// Range of whole multiples of reference mass used to seed the pantry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMultiplier {
    pub min: u32,
    pub max: u32,
}

impl Default for StockMultiplier {
    fn default() -> Self {
        Self {
            min: DEFAULT_STOCK_MULTIPLIER_MIN,
            max: DEFAULT_STOCK_MULTIPLIER_MAX,
        }
    }
}

/// Settings for one simulation run.
///
/// Loaded from an optional YAML file; every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub days: u32,

    /// Stored with the run; does not change consumption.
    pub family_size: u32,

    /// Random seed. A fresh one is drawn and reported when unset.
    pub seed: Option<u64>,

    /// First simulated day. Today when unset.
    pub start_date: Option<NaiveDate>,

    pub stock_multiplier: StockMultiplier,

    pub products_dir: PathBuf,
    pub recipes_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            family_size: DEFAULT_FAMILY_SIZE,
            seed: None,
            start_date: None,
            stock_multiplier: StockMultiplier::default(),
            products_dir: PathBuf::from("data").join("products"),
            recipes_dir: PathBuf::from("data").join("recipes"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl SimulationConfig {
    /// Load a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a config from YAML text. Empty text yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(SimError::InvalidConfig("days must be at least 1".to_string()));
        }
        if self.family_size == 0 {
            return Err(SimError::InvalidConfig(
                "family_size must be at least 1".to_string(),
            ));
        }
        let StockMultiplier { min, max } = self.stock_multiplier;
        if min == 0 || min > max {
            return Err(SimError::InvalidConfig(format!(
                "stock_multiplier must satisfy 1 <= min <= max (got {}..={})",
                min, max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_household_run() {
        let config = SimulationConfig::default();
        assert_eq!(config.days, 14);
        assert_eq!(config.family_size, 4);
        assert_eq!(config.stock_multiplier, StockMultiplier { min: 1, max: 3 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let config = SimulationConfig::parse(
            "days: 30\nseed: 99\nstart_date: '2025-01-01'\nstock_multiplier: {min: 2, max: 2}\n",
        )
        .unwrap();

        assert_eq!(config.days, 30);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(config.stock_multiplier.min, 2);
        assert_eq!(config.family_size, 4);
        assert_eq!(config.reports_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SimulationConfig::parse("  \n").unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimulationConfig {
            days: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));

        config.days = 5;
        config.stock_multiplier = StockMultiplier { min: 3, max: 1 };
        assert!(config.validate().is_err());

        config.stock_multiplier = StockMultiplier { min: 0, max: 1 };
        assert!(config.validate().is_err());
    }
}
