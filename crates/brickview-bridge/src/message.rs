//! The cross-window message contract.
//!
//! Messages are flat JSON objects discriminated by a `type` field, the
//! shape `window.postMessage` carries between the course view and the
//! editor that hosts it:
//!
//! ```json
//! {"type": "updateDragPosition", "position": {"x": 12, "y": 40}}
//! ```
//!
//! There is no schema versioning. Anything the child does not recognise is
//! parsed as [`InboundMessage::Unknown`] and ignored by consumers.

use brickview_common::{DomRect, Point};
use serde::{Deserialize, Serialize};

/// Which window a message is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// `window.parent`, the hosting editor.
    Parent,
    /// The child's own `window`; selection requests are broadcast here.
    #[serde(rename = "self")]
    SelfWindow,
}

/// Description of the element an affordance was clicked on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub rect: DomRect,
    pub element_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brick_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brick_id: Option<String>,
    /// Literal text (or markup when there is no text) of an edited element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_y: Option<f64>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Messages the course view posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    SlideNavigation { slide_index: u32 },
    UpdateContentSelectionPosition { position: Point },
    UpdateDragPosition { position: Point },
    #[serde(rename_all = "camelCase")]
    ExpandContentLibrary { element_data: ElementData },
    #[serde(rename_all = "camelCase")]
    EditBrickContent { element_data: ElementData },
    AddToContentSelection { content: serde_json::Value },
    #[serde(rename_all = "camelCase")]
    RemoveFromContentSelection { content_id: String },
}

impl OutboundMessage {
    /// Wire name of the message type.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::SlideNavigation { .. } => "slideNavigation",
            OutboundMessage::UpdateContentSelectionPosition { .. } => {
                "updateContentSelectionPosition"
            }
            OutboundMessage::UpdateDragPosition { .. } => "updateDragPosition",
            OutboundMessage::ExpandContentLibrary { .. } => "expandContentLibrary",
            OutboundMessage::EditBrickContent { .. } => "editBrickContent",
            OutboundMessage::AddToContentSelection { .. } => "addToContentSelection",
            OutboundMessage::RemoveFromContentSelection { .. } => "removeFromContentSelection",
        }
    }

    /// Selection mutations go to the child's own window, everything else to the parent.
    pub fn target(&self) -> Target {
        match self {
            OutboundMessage::AddToContentSelection { .. }
            | OutboundMessage::RemoveFromContentSelection { .. } => Target::SelfWindow,
            _ => Target::Parent,
        }
    }
}

/// Messages the course view listens for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InboundMessage {
    #[serde(rename_all = "camelCase")]
    DragStateChange { is_dragging: bool },
    #[serde(rename_all = "camelCase")]
    ContentSelectionUpdated {
        #[serde(default)]
        selected_items: Vec<serde_json::Value>,
    },
    ClearedSelection,
    AddToContentSelection { content: serde_json::Value },
    #[serde(rename_all = "camelCase")]
    RemoveFromContentSelection { content_id: String },
    #[serde(other)]
    Unknown,
}

impl InboundMessage {
    /// Parse a message from a structured value.
    ///
    /// Returns `None` for anything that is not an object with a string
    /// `type`, or whose payload does not match the known shape for that type.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        if !value.get("type").is_some_and(|t| t.is_string()) {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Parse a message from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        Self::from_value(value)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InboundMessage::DragStateChange { .. } => "dragStateChange",
            InboundMessage::ContentSelectionUpdated { .. } => "contentSelectionUpdated",
            InboundMessage::ClearedSelection => "clearedSelection",
            InboundMessage::AddToContentSelection { .. } => "addToContentSelection",
            InboundMessage::RemoveFromContentSelection { .. } => "removeFromContentSelection",
            InboundMessage::Unknown => "unknown",
        }
    }

    /// `_id` values of every selected item that carries one.
    pub fn selected_ids(&self) -> Vec<&str> {
        match self {
            InboundMessage::ContentSelectionUpdated { selected_items } => selected_items
                .iter()
                .filter_map(|item| item.get("_id").and_then(|id| id.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// An outbound message as handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub target: Target,
    pub origin: String,
    pub message: OutboundMessage,
}
