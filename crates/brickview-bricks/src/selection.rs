//! Selection membership for one library record.

use brickview_bridge::InboundMessage;

/// Whether a record is in the parent's current content selection.
///
/// The parent owns the selection and broadcasts it in full; this only
/// mirrors membership of one `_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMembership {
    content_id: String,
    selected: bool,
}

impl SelectionMembership {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            selected: false,
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Track a different record. Membership carries over until the next broadcast.
    pub fn retarget(&mut self, content_id: impl Into<String>) {
        self.content_id = content_id.into();
    }

    /// Apply a selection broadcast. Returns `true` if membership changed.
    pub fn apply(&mut self, message: &InboundMessage) -> bool {
        let next = match message {
            InboundMessage::ContentSelectionUpdated { .. } => message
                .selected_ids()
                .into_iter()
                .any(|id| id == self.content_id),
            InboundMessage::ClearedSelection => false,
            _ => return false,
        };
        std::mem::replace(&mut self.selected, next) != next
    }
}
