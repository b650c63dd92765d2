//! Outbound message sinks.
//!
//! A sink is where posted messages end up: a real browsing context, a
//! JSON-lines stream, or an in-memory log for tests. Posting is
//! fire-and-forget; a sink error means the message was dropped.

use std::io::Write;
use std::sync::{Arc, Mutex};

use brickview_common::BridgeError;

use crate::message::{Envelope, OutboundMessage, Target};
use crate::script::js_post_message;

pub trait MessageSink: Send + Sync {
    fn post(&self, envelope: &Envelope) -> Result<(), BridgeError>;
}

/// Keeps every envelope in memory so callers can assert exact sequences.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    posted: Arc<Mutex<Vec<Envelope>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything posted so far.
    pub fn envelopes(&self) -> Vec<Envelope> {
        self.posted.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.envelopes().into_iter().map(|e| e.message).collect()
    }

    /// Wire names of the posted messages, in order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.envelopes().iter().map(|e| e.message.kind()).collect()
    }

    /// Drain all recorded envelopes.
    pub fn take(&self) -> Vec<Envelope> {
        match self.posted.lock() {
            Ok(mut posted) => std::mem::take(&mut *posted),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.posted.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageSink for RecordingSink {
    fn post(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        let mut posted = self
            .posted
            .lock()
            .map_err(|_| BridgeError::Sink("recording sink poisoned".into()))?;
        posted.push(envelope.clone());
        Ok(())
    }
}

/// Writes one JSON envelope per line.
pub struct JsonLinesSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> MessageSink for JsonLinesSink<W> {
    fn post(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        let line = serde_json::to_string(envelope)?;
        let mut out = self.out.lock().map_err(|_| BridgeError::Closed)?;
        writeln!(out, "{line}")
            .and_then(|_| out.flush())
            .map_err(|e| BridgeError::Sink(e.to_string()))
    }
}

/// Writes the JavaScript a host webview would evaluate to deliver each message.
pub struct ScriptSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ScriptSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> MessageSink for ScriptSink<W> {
    fn post(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        let script = js_post_message(envelope.target, &envelope.message, &envelope.origin)?;
        let mut out = self.out.lock().map_err(|_| BridgeError::Closed)?;
        writeln!(out, "{script}")
            .and_then(|_| out.flush())
            .map_err(|e| BridgeError::Sink(e.to_string()))
    }
}

/// Discards parent-bound messages; stands in for a view with no parent window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn post(&self, _envelope: &Envelope) -> Result<(), BridgeError> {
        Ok(())
    }
}

/// Fan a post out to several sinks; the first error wins but every sink is tried.
impl MessageSink for Vec<Arc<dyn MessageSink>> {
    fn post(&self, envelope: &Envelope) -> Result<(), BridgeError> {
        let mut first_err = None;
        for sink in self {
            if let Err(e) = sink.post(envelope) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl Envelope {
    pub fn new(message: OutboundMessage, origin: impl Into<String>) -> Self {
        Self {
            target: message.target(),
            origin: origin.into(),
            message,
        }
    }

    pub fn is_for_parent(&self) -> bool {
        self.target == Target::Parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickview_common::Point;

    fn position(x: f64, y: f64) -> Envelope {
        Envelope::new(
            OutboundMessage::UpdateContentSelectionPosition {
                position: Point::new(x, y),
            },
            "*",
        )
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.post(&position(1.0, 1.0)).unwrap();
        sink.post(&Envelope::new(
            OutboundMessage::SlideNavigation { slide_index: 0 },
            "*",
        ))
        .unwrap();
        assert_eq!(
            sink.kinds(),
            vec!["updateContentSelectionPosition", "slideNavigation"]
        );
    }

    #[test]
    fn recording_sink_clones_share_storage() {
        let sink = RecordingSink::new();
        let observer = sink.clone();
        sink.post(&position(0.0, 0.0)).unwrap();
        assert_eq!(observer.len(), 1);
        assert_eq!(observer.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn json_lines_sink_writes_one_line_per_message() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.post(&position(1.0, 2.0)).unwrap();
        sink.post(&position(3.0, 4.0)).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Envelope = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, position(1.0, 2.0));
    }

    #[test]
    fn script_sink_emits_post_message() {
        let sink = ScriptSink::new(Vec::new());
        sink.post(&position(5.0, 6.0)).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("window.parent.postMessage("));
        assert!(out.contains("updateContentSelectionPosition"));
    }

    #[test]
    fn fan_out_reaches_every_sink() {
        let a = RecordingSink::new();
        let b = RecordingSink::new();
        let sinks: Vec<Arc<dyn MessageSink>> = vec![Arc::new(a.clone()), Arc::new(b.clone())];
        sinks.post(&position(0.0, 0.0)).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn envelope_targets_follow_message() {
        let env = Envelope::new(
            OutboundMessage::RemoveFromContentSelection {
                content_id: "x".into(),
            },
            "*",
        );
        assert!(!env.is_for_parent());
        assert!(position(0.0, 0.0).is_for_parent());
    }
}
