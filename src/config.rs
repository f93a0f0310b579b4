//! Serializable configuration for geohash groups.

use crate::geohash::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Group configuration.
///
/// Designed to be loadable from JSON or TOML; missing fields fall back to
/// their defaults.
///
/// # Example
///
/// ```rust
/// use geogrid::GroupConfig;
///
/// let config = GroupConfig::default();
/// assert_eq!(config.geohash_precision, 7);
///
/// let config = GroupConfig::from_json(r#"{ "geohash_precision": 9 }"#).unwrap();
/// assert_eq!(config.geohash_precision, 9);
///
/// assert!(GroupConfig::from_json(r#"{ "geohash_precision": 0 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Geohash length used for the center and its neighbors (1-12, default: 7)
    #[serde(default = "GroupConfig::default_geohash_precision")]
    pub geohash_precision: usize,
}

impl GroupConfig {
    const fn default_geohash_precision() -> usize {
        DEFAULT_PRECISION
    }

    pub fn with_geohash_precision(mut self, precision: usize) -> Self {
        self.geohash_precision = precision;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.geohash_precision < 1 || self.geohash_precision > MAX_PRECISION {
            return Err(format!(
                "Geohash precision must be between 1 and {}",
                MAX_PRECISION
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GroupConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: GroupConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            geohash_precision: Self::default_geohash_precision(),
        }
    }
}
