//! Inbound message fan-out.
//!
//! The host hands every `message` event body to [`InboundBus::publish_raw`];
//! the tracker driver and each brick component subscribe and filter by type.

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::message::InboundMessage;

/// Inbound message kinds the child acts on. Anything else is dropped.
const ALLOWED_INBOUND_KINDS: &[&str] = &[
    "dragStateChange",
    "contentSelectionUpdated",
    "clearedSelection",
    "addToContentSelection",
    "removeFromContentSelection",
];

/// Check whether an inbound message kind is in the allowlist.
pub fn is_inbound_kind_allowed(kind: &str) -> bool {
    ALLOWED_INBOUND_KINDS.contains(&kind)
}

pub struct InboundBus {
    sender: broadcast::Sender<InboundMessage>,
}

impl InboundBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InboundMessage> {
        self.sender.subscribe()
    }

    /// Publish an already-typed message. Returns the number of subscribers reached.
    pub fn publish(&self, message: InboundMessage) -> usize {
        if !is_inbound_kind_allowed(message.kind()) {
            debug!(kind = message.kind(), "inbound message ignored");
            return 0;
        }
        self.sender.send(message).unwrap_or(0)
    }

    /// Parse and publish a raw `message` event body.
    pub fn publish_raw(&self, body: &str) -> usize {
        match InboundMessage::from_json(body) {
            Some(message) => self.publish(message),
            None => {
                warn!(body_len = body.len(), "inbound message rejected: failed to parse");
                0
            }
        }
    }

    /// Parse and publish a structured `message` event payload.
    pub fn publish_value(&self, value: serde_json::Value) -> usize {
        match InboundMessage::from_value(value) {
            Some(message) => self.publish(message),
            None => {
                warn!("inbound message rejected: not a typed object");
                0
            }
        }
    }
}

impl Default for InboundBus {
    fn default() -> Self {
        Self::new(64)
    }
}
