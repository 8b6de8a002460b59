use crate::errors::ConfigError;
use crate::global_variables::{DEFAULT_MAX_GREEN, DEFAULT_MIN_GREEN, DEFAULT_YELLOW_DURATION};
use serde::{Deserialize, Serialize};

/// Timing parameters for the controller, all in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub min_green: u32,
    pub max_green: u32,
    pub yellow_duration: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_green: DEFAULT_MIN_GREEN,
            max_green: DEFAULT_MAX_GREEN,
            yellow_duration: DEFAULT_YELLOW_DURATION,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_green > self.max_green {
            return Err(ConfigError::GreenRange {
                min: self.min_green,
                max: self.max_green,
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Omitted fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
