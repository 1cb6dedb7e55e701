use thiserror::Error;

/// Errors reported by a host connectivity primitive.
///
/// The store never surfaces these to readers; it logs them and keeps the
/// optimistic default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("Connectivity primitive unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to register connectivity listener: {0}")]
    RegistrationFailed(String),
}

/// Errors produced while loading or validating a [`crate::config::ShellConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error.message().to_string())
    }
}
