//! Cross-window bridge settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// `targetOrigin` passed to `postMessage`.
    pub target_origin: String,
    /// Minimum spacing between `updateContentSelectionPosition` posts.
    /// 0 posts on every pointer move (valid range: 0-1000).
    pub selection_position_interval_ms: u64,
    /// Slide index announced to the parent when the course view mounts.
    pub initial_slide_index: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            target_origin: "*".to_string(),
            selection_position_interval_ms: 0,
            initial_slide_index: 0,
        }
    }
}

impl BridgeConfig {
    /// `None` when every move should be forwarded.
    pub fn selection_position_interval(&self) -> Option<Duration> {
        match self.selection_position_interval_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
