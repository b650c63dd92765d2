//! Node types for the region document.

use brickview_common::Rect;
use serde::{Deserialize, Serialize};

use crate::kind::BrickKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Opt-in tracking marker for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickMarker {
    pub kind: BrickKind,
    /// Stable identifier, when the slot was rendered with one.
    pub brick_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Upper-case, as the DOM reports `tagName`.
    pub tag_name: String,
    pub class_name: String,
    pub bounds: Rect,
    pub marker: Option<BrickMarker>,
    /// The node's own text, excluding descendants.
    pub text: String,
    /// The node's inner markup.
    pub markup: String,
}

/// Description of a node to register.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub tag_name: String,
    pub class_name: String,
    pub bounds: Rect,
    /// Raw brick-type marker value (`text`, `html`, `empty`).
    pub brick_type: Option<String>,
    pub brick_id: Option<String>,
    pub text: String,
    pub markup: String,
}

impl NodeSpec {
    pub fn new(tag_name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            tag_name: tag_name.into(),
            bounds,
            ..Default::default()
        }
    }

    pub fn brick(mut self, brick_type: impl Into<String>) -> Self {
        self.brick_type = Some(brick_type.into());
        self
    }

    pub fn with_id(mut self, brick_id: impl Into<String>) -> Self {
        self.brick_id = Some(brick_id.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }
}
