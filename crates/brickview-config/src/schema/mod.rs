//! Configuration schema types for Brickview.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod logging;
mod overlay;

pub use bridge::*;
pub use logging::*;
pub use overlay::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Brickview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BrickviewConfig {
    pub overlay: OverlayConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: BrickviewConfig = toml::from_str("").unwrap();
        assert_eq!(config.overlay.hide_delay_ms, 200);
        assert_eq!(config.bridge.selection_position_interval_ms, 0);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: BrickviewConfig = toml::from_str(
            r#"
[overlay]
hide_delay_ms = 350
"#,
        )
        .unwrap();
        assert_eq!(config.overlay.hide_delay_ms, 350);
        assert!((config.overlay.empty_padding - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.bridge.target_origin, "*");
    }
}
