//! Cross-window message bridge between the course view and its parent editor.
//!
//! Provides:
//! - The typed message contract in both directions ([`OutboundMessage`], [`InboundMessage`])
//! - Injectable outbound sinks (recording, JSON lines, `postMessage` scripts)
//! - An inbound bus that parses, filters, and fans out parent messages
//! - JavaScript glue for hosting the contract in a real browsing context

pub mod bus;
pub mod message;
pub mod outbound;
pub mod script;
pub mod sink;

pub use bus::InboundBus;
pub use message::{ElementData, Envelope, InboundMessage, OutboundMessage, Target};
pub use outbound::Outbound;
pub use sink::{JsonLinesSink, MessageSink, NullSink, RecordingSink, ScriptSink};
