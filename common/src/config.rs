use crate::error::ConfigError;
use crate::transition::TransitionConfig;
use serde::{Deserialize, Serialize};

/// Runtime configuration for the shell components.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub overlay: TransitionConfig,
    pub connectivity: ConnectivityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    /// Skip listener delivery when the platform repeats the current value.
    pub suppress_duplicates: bool,
}

impl ShellConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let overlay = &self.overlay;
        if overlay.duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "overlay.duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if overlay.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "overlay.frame_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !overlay.offset_y_px.is_finite() {
            return Err(ConfigError::Invalid {
                field: "overlay.offset_y_px",
                reason: format!("must be a finite number, got {}", overlay.offset_y_px),
            });
        }
        Ok(())
    }
}
