//! Async driver for one mounted overlay.
//!
//! [`OverlaySession::run`] serializes every event source onto a single
//! task: pointer input, inbound parent messages, and the hide deadline.
//! Handlers run to completion between awaits, so the tracker never sees two
//! events at once. Closing the input channel tears the session down.
//!
//! Events on the input channel are applied in the order they were sent.
//! Parent messages that must stay in line with pointer input (a drag start
//! followed by a move) go through that channel as [`SessionEvent::Inbound`];
//! the optional broadcast receiver is for publishers with no such ordering.

use brickview_bridge::InboundMessage;
use brickview_common::Point;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::document::Document;
use crate::tracker::PointerTracker;

/// Pointer and layout input, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerInput {
    Move { client: Point },
    Click { client: Point },
    /// The document scrolled or its frame moved.
    Scroll { origin: Point },
}

/// One event on the session's ordered input channel.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Pointer(PointerInput),
    Inbound(InboundMessage),
}

impl From<PointerInput> for SessionEvent {
    fn from(input: PointerInput) -> Self {
        SessionEvent::Pointer(input)
    }
}

impl From<InboundMessage> for SessionEvent {
    fn from(message: InboundMessage) -> Self {
        SessionEvent::Inbound(message)
    }
}

/// Counters collected over a session's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub moves: u64,
    pub clicks: u64,
    pub handled_clicks: u64,
    pub inbound: u64,
    pub hides: u64,
}

pub struct OverlaySession {
    document: Document,
    tracker: PointerTracker,
}

impl OverlaySession {
    pub fn new(document: Document, tracker: PointerTracker) -> Self {
        Self { document, tracker }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Mount the tracker and process events until `input` closes.
    ///
    /// A closed inbound bus only stops inbound processing; the input
    /// channel keeps the session alive.
    pub async fn run(
        &mut self,
        mut input: mpsc::Receiver<SessionEvent>,
        mut inbound: Option<broadcast::Receiver<InboundMessage>>,
    ) -> SessionReport {
        let mut report = SessionReport::default();

        self.tracker.mount(Instant::now().into_std());
        info!(nodes = self.document.len(), "overlay session started");

        loop {
            let deadline = self.tracker.next_deadline().map(Instant::from_std);

            tokio::select! {
                _ = wait_for(deadline) => {
                    if self.tracker.poll(Instant::now().into_std()) {
                        report.hides += 1;
                    }
                }
                event = input.recv() => match event {
                    Some(SessionEvent::Pointer(event)) => self.handle_input(event, &mut report),
                    Some(SessionEvent::Inbound(message)) => self.handle_inbound(&message, &mut report),
                    None => break,
                },
                message = recv_inbound(&mut inbound), if inbound.is_some() => match message {
                    Ok(message) => self.handle_inbound(&message, &mut report),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "inbound messages dropped, session lagging");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("inbound bus closed");
                        inbound = None;
                    }
                },
            }
        }

        self.tracker.unmount();
        info!(
            moves = report.moves,
            clicks = report.clicks,
            hides = report.hides,
            "overlay session ended"
        );
        report
    }

    fn handle_inbound(&mut self, message: &InboundMessage, report: &mut SessionReport) {
        report.inbound += 1;
        debug!(kind = message.kind(), "inbound message");
        self.tracker.handle_inbound(message);
    }

    fn handle_input(&mut self, event: PointerInput, report: &mut SessionReport) {
        match event {
            PointerInput::Move { client } => {
                report.moves += 1;
                self.tracker
                    .pointer_move(&self.document, client, Instant::now().into_std());
            }
            PointerInput::Click { client } => {
                report.clicks += 1;
                let now_ms = chrono::Utc::now().timestamp_millis();
                let outcome = self.tracker.click(&self.document, client, now_ms);
                if outcome.handled {
                    report.handled_clicks += 1;
                }
            }
            PointerInput::Scroll { origin } => {
                self.document.set_origin(origin);
            }
        }
    }
}

async fn recv_inbound(
    inbound: &mut Option<broadcast::Receiver<InboundMessage>>,
) -> Result<InboundMessage, broadcast::error::RecvError> {
    match inbound {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
