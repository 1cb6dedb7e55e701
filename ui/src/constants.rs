use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use shellkit_core::ShellConfig;

/// Configuration bundled with the build.
const SHELL_CONFIG_TOML: &str = include_str!("../shell.toml");

pub static SHELL_CONFIG: Lazy<ShellConfig> = Lazy::new(load_shell_config);

/// Base classes of the full-viewport overlay layer.
pub const OVERLAY_CLASS: &str = "shell-overlay";

/// Base classes of the overlay's content box. Caller classes are appended.
pub const OVERLAY_CONTENT_CLASS: &str = "shell-overlay-content";

fn load_shell_config() -> ShellConfig {
    match ShellConfig::from_toml_str(SHELL_CONFIG_TOML) {
        Ok(config) => {
            info!("Loaded shell configuration: {:?}", config);
            config
        }
        Err(e) => {
            warn!("Invalid bundled shell configuration, using defaults: {}", e);
            ShellConfig::default()
        }
    }
}
