//! Tracker state types.

use brickview_common::Rect;
use serde::Serialize;

use crate::document::NodeId;
use crate::kind::BrickKind;

/// The one region the overlay is currently attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedElement {
    pub node: NodeId,
    pub kind: BrickKind,
    pub brick_id: Option<String>,
    pub bounds: Rect,
}

/// Placement of the highlight, derived from the tracked element's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for OverlayRect {
    fn from(r: Rect) -> Self {
        Self {
            top: r.top(),
            left: r.left(),
            width: r.width,
            height: r.height,
        }
    }
}
