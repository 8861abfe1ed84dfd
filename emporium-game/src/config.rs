//! Shop configuration loaded from JSON with per-field defaults.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_SHOP_NAME, MAX_STARTING_GOLD, MIN_STARTING_GOLD};

/// Inclusive range a new player's starting gold is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRange {
    #[serde(default = "GoldRange::default_min")]
    pub min: u32,
    #[serde(default = "GoldRange::default_max")]
    pub max: u32,
}

impl GoldRange {
    const fn default_min() -> u32 {
        MIN_STARTING_GOLD
    }

    const fn default_max() -> u32 {
        MAX_STARTING_GOLD
    }

    #[must_use]
    pub const fn contains(&self, gold: u32) -> bool {
        gold >= self.min && gold <= self.max
    }
}

impl Default for GoldRange {
    fn default() -> Self {
        Self {
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }
}

/// Errors raised while loading or validating shop configuration.
#[derive(Debug, Error)]
pub enum ShopConfigError {
    #[error("shop config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("starting gold minimum {min} exceeds maximum {max}")]
    InvertedGoldRange { min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default = "ShopConfig::default_shop_name")]
    pub shop_name: String,
    #[serde(default)]
    pub starting_gold: GoldRange,
}

impl ShopConfig {
    fn default_shop_name() -> String {
        DEFAULT_SHOP_NAME.to_string()
    }

    /// Parse a JSON document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ShopConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ShopConfigError::InvertedGoldRange`] when `min > max`.
    pub fn validate(&self) -> Result<(), ShopConfigError> {
        let range = self.starting_gold;
        if range.min > range.max {
            return Err(ShopConfigError::InvertedGoldRange {
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: Self::default_shop_name(),
            starting_gold: GoldRange::default(),
        }
    }
}
