//! Live session driven by JSON lines on an async reader.
//!
//! Each line is either a pointer event (`move`, `click`, `scroll`) or a
//! parent message body. Both go to the session on one channel in line
//! order, so a drag start is applied before the move that follows it.
//! Parent messages outside the inbound allowlist are dropped. End of input
//! ends the session.

use std::sync::Arc;

use brickview_bridge::bus::is_inbound_kind_allowed;
use brickview_bridge::{InboundMessage, MessageSink, Outbound};
use brickview_common::BrickviewError;
use brickview_config::BrickviewConfig;
use brickview_overlay::{
    DragState, OverlaySession, PointerInput, PointerTracker, SessionEvent, SessionReport,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::scenario::Scenario;

const INPUT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    pub pointer: u64,
    pub inbound: u64,
    pub dropped: u64,
}

/// Read lines until EOF, forwarding pointer input and parent messages in line order.
pub async fn pump_input<R>(reader: R, tx: mpsc::Sender<SessionEvent>) -> PumpStats
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = PumpStats::default();
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "input stream failed");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = match serde_json::from_str::<PointerInput>(line) {
            Ok(input) => SessionEvent::Pointer(input),
            Err(_) => match InboundMessage::from_json(line) {
                Some(message) if is_inbound_kind_allowed(message.kind()) => {
                    SessionEvent::Inbound(message)
                }
                Some(message) => {
                    debug!(kind = message.kind(), "inbound message ignored");
                    stats.dropped += 1;
                    continue;
                }
                None => {
                    warn!(line_len = line.len(), "input line rejected: failed to parse");
                    stats.dropped += 1;
                    continue;
                }
            },
        };
        let pointer = matches!(event, SessionEvent::Pointer(_));
        if tx.send(event).await.is_err() {
            debug!("session gone, input pump stopping");
            break;
        }
        if pointer {
            stats.pointer += 1;
        } else {
            stats.inbound += 1;
        }
    }
    stats
}

pub async fn run_serve<R>(
    config: &BrickviewConfig,
    scenario: &Scenario,
    sink: Arc<dyn MessageSink>,
    reader: R,
) -> Result<SessionReport, BrickviewError>
where
    R: AsyncBufRead + Unpin,
{
    let (mut view, _) = scenario.build_view(config.bridge.initial_slide_index)?;
    let outbound = Outbound::new(sink, config.bridge.target_origin.clone());
    view.mount(&outbound);

    let tracker = PointerTracker::new(config, outbound, DragState::new());
    let mut session = OverlaySession::new(view.into_document(), tracker);

    let (tx, rx) = mpsc::channel(INPUT_CAPACITY);

    let (stats, report) = tokio::join!(pump_input(reader, tx), session.run(rx, None));
    info!(
        pointer = stats.pointer,
        inbound = stats.inbound,
        dropped = stats.dropped,
        "input closed"
    );
    Ok(report)
}
