//! Brickview configuration system.
//!
//! TOML-based configuration for the overlay geometry, the cross-window
//! bridge, and logging. Every section uses serde defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use brickview_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    BrickviewConfig, BridgeConfig, LogLevel, LoggingConfig, OverlayConfig, CONFIG_SCHEMA_VERSION,
};

use brickview_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists, then validates.
pub fn load_config() -> Result<BrickviewConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BrickviewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&BrickviewConfig::default());
        assert!(json.contains("\"overlay\""));
        assert!(json.contains("\"bridge\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&BrickviewConfig::default());
        let parsed: BrickviewConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.overlay.hide_delay_ms, 200);
        assert_eq!(parsed.bridge.target_origin, "*");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
