//! External drag state reported by the parent editor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use brickview_bridge::InboundMessage;

/// `true` while the parent reports an active drag.
///
/// Cloned handles share one flag. Only [`DragState::apply`], fed from the
/// inbound message handler, writes it; there is no timeout, so a drag stays
/// active until the parent sends the terminating `dragStateChange`.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    active: Arc<AtomicBool>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Apply an inbound message. Returns `true` if the flag changed.
    pub(crate) fn apply(&self, message: &InboundMessage) -> bool {
        match message {
            InboundMessage::DragStateChange { is_dragging } => {
                self.active.swap(*is_dragging, Ordering::Relaxed) != *is_dragging
            }
            _ => false,
        }
    }
}
