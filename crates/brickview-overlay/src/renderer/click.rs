//! Affordance activation: turning a click on the control into a request
//! for the parent editor.

use brickview_bridge::{ElementData, OutboundMessage};
use brickview_common::placeholder_brick_id;
use tracing::debug;

use crate::document::Document;
use crate::kind::BrickKind;
use crate::tracker::TrackedElement;

use super::{AffordanceKind, HighlightRenderer};

/// Result of a click routed through the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    /// The click hit overlay furniture; the element underneath must not see
    /// it (default action and propagation suppressed).
    pub handled: bool,
    /// Request to post to the parent, if the click produced one.
    pub message: Option<OutboundMessage>,
}

impl ClickOutcome {
    /// The click missed the overlay and belongs to the page.
    pub fn passthrough() -> Self {
        Self {
            handled: false,
            message: None,
        }
    }

    fn swallowed() -> Self {
        Self {
            handled: true,
            message: None,
        }
    }
}

impl HighlightRenderer {
    /// Activate a control against the currently tracked element.
    ///
    /// The click is always swallowed once it lands on a control, but a
    /// request is only produced when the tracked kind matches the control.
    pub fn activate(
        &self,
        affordance: AffordanceKind,
        document: &Document,
        tracked: Option<&TrackedElement>,
        timestamp_ms: i64,
    ) -> ClickOutcome {
        let Some(tracked) = tracked else {
            debug!(?affordance, "control clicked with nothing tracked");
            return ClickOutcome::swallowed();
        };

        let message = match (affordance, tracked.kind) {
            (AffordanceKind::Add, BrickKind::Empty) => {
                let brick_id = tracked
                    .brick_id
                    .clone()
                    .unwrap_or_else(|| placeholder_brick_id(timestamp_ms));
                let mut data = element_data(document, tracked);
                data.brick_id = Some(brick_id);
                data.timestamp = Some(timestamp_ms);
                OutboundMessage::ExpandContentLibrary { element_data: data }
            }
            (AffordanceKind::Edit, BrickKind::Text | BrickKind::Html) => {
                let mut data = element_data(document, tracked);
                data.content = Some(document.edit_content(tracked.node));
                OutboundMessage::EditBrickContent { element_data: data }
            }
            _ => {
                debug!(?affordance, kind = %tracked.kind, "control does not match tracked kind");
                return ClickOutcome::swallowed();
            }
        };

        ClickOutcome {
            handled: true,
            message: Some(message),
        }
    }
}

fn element_data(document: &Document, tracked: &TrackedElement) -> ElementData {
    let node = document.get(tracked.node);
    ElementData {
        tag_name: node.map(|n| n.tag_name.clone()),
        class_name: node.map(|n| n.class_name.clone()),
        rect: tracked.bounds.into(),
        element_type: tracked.kind.as_str().to_string(),
        brick_type: Some(tracked.kind.as_str().to_string()),
        brick_id: None,
        content: None,
        click_x: None,
        click_y: None,
        timestamp: None,
    }
}
