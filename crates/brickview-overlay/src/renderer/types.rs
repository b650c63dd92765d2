//! Render output types.

use brickview_common::{Point, Rect};
use serde::Serialize;

use crate::kind::BrickKind;

/// Color family of a highlight, keyed by brick kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightTone {
    Green,
    Blue,
    Purple,
}

impl HighlightTone {
    pub fn for_kind(kind: BrickKind) -> Self {
        match kind {
            BrickKind::Empty => HighlightTone::Green,
            BrickKind::Text => HighlightTone::Blue,
            BrickKind::Html => HighlightTone::Purple,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            HighlightTone::Green => "#22c55e",
            HighlightTone::Blue => "#3b82f6",
            HighlightTone::Purple => "#a855f7",
        }
    }

    /// Empty slots are drawn a little stronger than populated content.
    pub fn fill_opacity(&self) -> f64 {
        match self {
            HighlightTone::Green => 0.3,
            HighlightTone::Blue | HighlightTone::Purple => 0.2,
        }
    }
}

/// The non-interactive rectangle drawn over the tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HighlightBox {
    pub rect: Rect,
    pub tone: HighlightTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AffordanceKind {
    Add,
    Edit,
}

impl AffordanceKind {
    pub fn title(&self) -> &'static str {
        match self {
            AffordanceKind::Add => "Click to add content",
            AffordanceKind::Edit => "Click to edit content",
        }
    }
}

/// The single clickable control rendered next to the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Affordance {
    pub kind: AffordanceKind,
    pub rect: Rect,
    pub tone: HighlightTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub highlight: HighlightBox,
    pub affordance: Affordance,
}

impl OverlayFrame {
    /// Whether `point` lands on overlay furniture that can receive pointer
    /// events. The highlight box ignores the pointer, so only the control counts.
    pub fn furniture_contains(&self, point: Point) -> bool {
        self.affordance.rect.contains(point)
    }

    /// The control under `point`, if any.
    pub fn affordance_at(&self, point: Point) -> Option<AffordanceKind> {
        self.furniture_contains(point).then_some(self.affordance.kind)
    }
}
