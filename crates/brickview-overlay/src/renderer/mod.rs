//! Highlight renderer.
//!
//! A pure function of the tracker's state: no tracked element renders
//! nothing; otherwise one non-interactive highlight box plus exactly one
//! interactive control (add for empty slots, edit for populated ones).

mod click;
mod types;


pub use click::ClickOutcome;
pub use types::{Affordance, AffordanceKind, HighlightBox, HighlightTone, OverlayFrame};

use brickview_common::Rect;
use brickview_config::OverlayConfig;

use crate::kind::BrickKind;
use crate::tracker::TrackedElement;

/// Class carried by every node the overlay renders, so the tracker can tell
/// its own furniture apart from page content.
pub const OVERLAY_CLASS: &str = "brick-overlay";

#[derive(Debug, Clone)]
pub struct HighlightRenderer {
    empty_padding: f64,
    empty_min_height: f64,
    affordance_size: f64,
    edit_inset: f64,
}

impl Default for HighlightRenderer {
    fn default() -> Self {
        Self::new(&OverlayConfig::default())
    }
}

impl HighlightRenderer {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            empty_padding: config.empty_padding,
            empty_min_height: config.empty_min_height,
            affordance_size: config.affordance_size,
            edit_inset: config.edit_inset,
        }
    }

    pub fn render(&self, tracked: Option<&TrackedElement>) -> Option<OverlayFrame> {
        let tracked = tracked?;
        let tone = HighlightTone::for_kind(tracked.kind);
        let affordance_kind = if tracked.kind.is_editable() {
            AffordanceKind::Edit
        } else {
            AffordanceKind::Add
        };
        Some(OverlayFrame {
            highlight: HighlightBox {
                rect: self.highlight_rect(tracked.kind, tracked.bounds),
                tone,
            },
            affordance: Affordance {
                kind: affordance_kind,
                rect: self.affordance_rect(affordance_kind, tracked.bounds),
                tone,
            },
        })
    }

    /// Empty slots are padded on every side and floored to a minimum height
    /// so zero-height placeholders stay clickable; other kinds are exact.
    pub fn highlight_rect(&self, kind: BrickKind, bounds: Rect) -> Rect {
        match kind {
            BrickKind::Empty => {
                let padded = bounds.inflate(self.empty_padding);
                Rect {
                    height: padded.height.max(self.empty_min_height),
                    ..padded
                }
            }
            BrickKind::Text | BrickKind::Html => bounds,
        }
    }

    /// Add controls sit centered on the element; edit controls hug the
    /// top-right corner, inset on both axes.
    pub fn affordance_rect(&self, kind: AffordanceKind, bounds: Rect) -> Rect {
        let size = self.affordance_size;
        match kind {
            AffordanceKind::Add => {
                let center = bounds.center();
                Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
            }
            AffordanceKind::Edit => Rect::new(
                bounds.right() - size - self.edit_inset,
                bounds.top() + self.edit_inset,
                size,
                size,
            ),
        }
    }
}
