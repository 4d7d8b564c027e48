//! Tracker configuration
//!
//! Loaded from an optional JSON string passed in by the page. Missing fields
//! fall back to the tuned defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ClassifierConfig;
use crate::stability::{CONFIRMATION_MS, DETECTION_INTERVAL_MS, STABILITY_THRESHOLD};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum time between classified frames
    pub detection_interval_ms: f64,
    /// Consecutive identical frames before a gesture is stable
    pub stability_threshold: u32,
    /// Time a stable gesture must go unchallenged before it is confirmed
    pub confirmation_ms: f64,
    pub classifier: ClassifierConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            detection_interval_ms: DETECTION_INTERVAL_MS,
            stability_threshold: STABILITY_THRESHOLD,
            confirmation_ms: CONFIRMATION_MS,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate; an empty or blank string yields the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.detection_interval_ms.is_finite() && self.detection_interval_ms > 0.0) {
            return Err(ConfigError::Invalid {
                field: "detection_interval_ms",
                reason: "must be a finite, positive number",
            });
        }
        if !(self.confirmation_ms.is_finite() && self.confirmation_ms > 0.0) {
            return Err(ConfigError::Invalid {
                field: "confirmation_ms",
                reason: "must be a finite, positive number",
            });
        }
        if self.stability_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "stability_threshold",
                reason: "must be at least 1",
            });
        }
        if let Some(field) = self.classifier.first_non_finite() {
            return Err(ConfigError::Invalid { field, reason: "must be finite" });
        }
        Ok(())
    }
}
