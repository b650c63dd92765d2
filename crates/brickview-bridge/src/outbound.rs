//! Best-effort publishing of outbound messages.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::message::{Envelope, OutboundMessage, Target};
use crate::sink::MessageSink;

/// Publishing handle injected into the tracker, renderer, and bricks.
///
/// Posts are fire-and-forget: there is no acknowledgement, no retry, and a
/// failed post is logged and dropped. When no parent window is attached,
/// parent-bound messages are skipped silently.
#[derive(Clone)]
pub struct Outbound {
    sink: Arc<dyn MessageSink>,
    origin: String,
    parent_attached: bool,
}

impl Outbound {
    pub fn new(sink: Arc<dyn MessageSink>, origin: impl Into<String>) -> Self {
        Self {
            sink,
            origin: origin.into(),
            parent_attached: true,
        }
    }

    /// An outbound handle for a view that is not embedded in a parent.
    pub fn detached(sink: Arc<dyn MessageSink>, origin: impl Into<String>) -> Self {
        Self {
            parent_attached: false,
            ..Self::new(sink, origin)
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn has_parent(&self) -> bool {
        self.parent_attached
    }

    /// Post a message to the window its type addresses.
    ///
    /// Returns `true` if the sink accepted it.
    pub fn post(&self, message: OutboundMessage) -> bool {
        let envelope = Envelope::new(message, self.origin.clone());
        if envelope.target == Target::Parent && !self.parent_attached {
            debug!(kind = envelope.message.kind(), "no parent window, post skipped");
            return false;
        }
        match self.sink.post(&envelope) {
            Ok(()) => true,
            Err(e) => {
                warn!(kind = envelope.message.kind(), error = %e, "outbound post dropped");
                false
            }
        }
    }
}

impl std::fmt::Debug for Outbound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outbound")
            .field("origin", &self.origin)
            .field("parent_attached", &self.parent_attached)
            .finish_non_exhaustive()
    }
}
