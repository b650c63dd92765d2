//! Hover overlay geometry and timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Overlay geometry and hide debounce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Grace period before a lost hover clears the highlight (valid range: 0-5000).
    pub hide_delay_ms: u64,
    /// Padding added on every side of an empty slot's highlight (valid range: 0-64).
    pub empty_padding: f64,
    /// Minimum highlight height for an empty slot (valid range: 0-400).
    pub empty_min_height: f64,
    /// Side length of the square add/edit control (valid range: 8-96).
    pub affordance_size: f64,
    /// Inset of the edit control from the element's top-right corner (valid range: 0-64).
    pub edit_inset: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 200,
            empty_padding: 4.0,
            empty_min_height: 40.0,
            affordance_size: 24.0,
            edit_inset: 4.0,
        }
    }
}

impl OverlayConfig {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_config_defaults() {
        let config = OverlayConfig::default();
        assert_eq!(config.hide_delay_ms, 200);
        assert!((config.empty_padding - 4.0).abs() < f64::EPSILON);
        assert!((config.empty_min_height - 40.0).abs() < f64::EPSILON);
        assert!((config.affordance_size - 24.0).abs() < f64::EPSILON);
        assert!((config.edit_inset - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hide_delay_duration() {
        assert_eq!(OverlayConfig::default().hide_delay(), Duration::from_millis(200));
    }
}
