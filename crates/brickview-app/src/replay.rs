//! Deterministic replay of a scenario script.
//!
//! Time is virtual: `wait` steps advance the clock and fire any hide that
//! falls due inside the window, so replays never sleep and always produce
//! the same message stream.

use std::sync::Arc;
use std::time::{Duration, Instant};

use brickview_bridge::{InboundBus, MessageSink, Outbound};
use brickview_common::{BrickviewError, Point};
use brickview_config::BrickviewConfig;
use brickview_overlay::{DragState, PointerTracker};
use serde::Serialize;
use tracing::{debug, info};

use crate::scenario::{Scenario, Step};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub steps: usize,
    pub moves: u64,
    pub clicks: u64,
    pub hides: u64,
    pub inbound: u64,
    /// Brick id (or kind) still tracked when the script ended.
    pub tracked_at_end: Option<String>,
    pub elapsed_ms: u64,
}

pub fn run_replay(
    config: &BrickviewConfig,
    scenario: &Scenario,
    sink: Arc<dyn MessageSink>,
) -> Result<ReplayReport, BrickviewError> {
    let (mut view, _) = scenario.build_view(config.bridge.initial_slide_index)?;
    let outbound = Outbound::new(sink, config.bridge.target_origin.clone());
    let mut tracker = PointerTracker::new(config, outbound.clone(), DragState::new());

    let bus = InboundBus::default();
    let mut inbound = bus.subscribe();

    let start = Instant::now();
    let start_ms = scenario
        .start_ms
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let mut now = start;
    let mut report = ReplayReport::default();

    view.mount(&outbound);
    tracker.mount(now);

    for step in &scenario.script {
        report.steps += 1;
        match step {
            Step::Move { x, y } => {
                report.moves += 1;
                tracker.pointer_move(view.document(), Point::new(*x, *y), now);
            }
            Step::Click { x, y } => {
                report.clicks += 1;
                let client = Point::new(*x, *y);
                let timestamp = start_ms + elapsed_ms(start, now) as i64;
                let outcome = tracker.click(view.document(), client, timestamp);
                if !outcome.handled {
                    view.click_through(&outbound, client, timestamp);
                }
            }
            Step::Scroll { x, y } => {
                view.document_mut().set_origin(Point::new(*x, *y));
            }
            Step::Inbound { message } => {
                bus.publish_value(message.clone());
                while let Ok(message) = inbound.try_recv() {
                    report.inbound += 1;
                    tracker.handle_inbound(&message);
                }
            }
            Step::Wait { ms } => {
                let until = now + Duration::from_millis(*ms);
                while let Some(deadline) = tracker.next_deadline().filter(|d| *d <= until) {
                    if tracker.poll(deadline) {
                        report.hides += 1;
                    }
                }
                now = until;
            }
        }
    }

    report.tracked_at_end = tracker.tracked().map(|t| {
        t.brick_id
            .clone()
            .unwrap_or_else(|| t.kind.to_string())
    });
    report.elapsed_ms = elapsed_ms(start, now);
    tracker.unmount();

    debug!(?report, "replay finished");
    info!(
        steps = report.steps,
        hides = report.hides,
        elapsed_ms = report.elapsed_ms,
        "replay complete"
    );
    Ok(report)
}

fn elapsed_ms(start: Instant, now: Instant) -> u64 {
    now.saturating_duration_since(start).as_millis() as u64
}

#[cfg(test)]
mod tests {
    use brickview_bridge::{JsonLinesSink, OutboundMessage, RecordingSink};

    use super::*;

    const SLIDE: &str = r#"
        "nodes": [
            {"id": "title", "tag": "h1", "bounds": {"x": 20, "y": 20, "width": 400, "height": 40},
             "brickType": "text", "text": "Teaching Kids Music"},
            {"id": "slot", "bounds": {"x": 20, "y": 100, "width": 400, "height": 32},
             "brickType": "empty", "brickId": "slide-1-section-3"}
        ]"#;

    fn scenario(script: &str) -> Scenario {
        Scenario::from_json(&format!(
            r#"{{"viewport": {{"x": 0, "y": 0, "width": 800, "height": 600}}, "startMs": 1000, {SLIDE}, "script": {script}}}"#
        ))
        .unwrap()
    }

    fn replay(script: &str) -> (ReplayReport, RecordingSink) {
        let sink = RecordingSink::new();
        let report = run_replay(
            &BrickviewConfig::default(),
            &scenario(script),
            Arc::new(sink.clone()),
        )
        .unwrap();
        (report, sink)
    }

    #[test]
    fn mount_announces_slide_then_position() {
        let (_, sink) = replay("[]");
        assert_eq!(
            sink.kinds(),
            vec!["slideNavigation", "updateContentSelectionPosition"]
        );
    }

    #[test]
    fn add_flow_posts_one_library_request() {
        let (report, sink) = replay(
            r#"[
                {"type": "move", "x": 40, "y": 110},
                {"type": "wait", "ms": 30},
                {"type": "click", "x": 220, "y": 116}
            ]"#,
        );
        assert_eq!(report.clicks, 1);
        let requests: Vec<_> = sink
            .messages()
            .into_iter()
            .filter_map(|m| match m {
                OutboundMessage::ExpandContentLibrary { element_data } => Some(element_data),
                _ => None,
            })
            .collect();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].brick_id.as_deref(), Some("slide-1-section-3"));
        assert_eq!(requests[0].timestamp, Some(1030));
        assert!(requests[0].click_x.is_none());
    }

    #[test]
    fn direct_slot_click_reaches_empty_brick() {
        let (_, sink) = replay(
            r#"[
                {"type": "move", "x": 40, "y": 110},
                {"type": "click", "x": 40, "y": 110}
            ]"#,
        );
        match sink.messages().last() {
            Some(OutboundMessage::ExpandContentLibrary { element_data }) => {
                assert_eq!(element_data.click_x, Some(40.0));
                assert_eq!(element_data.brick_id.as_deref(), Some("slide-1-section-3"));
            }
            other => panic!("unexpected last message: {other:?}"),
        }
    }

    #[test]
    fn leaving_text_hides_after_quiet_period() {
        let (report, _) = replay(
            r#"[
                {"type": "move", "x": 30, "y": 30},
                {"type": "move", "x": 600, "y": 500},
                {"type": "wait", "ms": 250}
            ]"#,
        );
        assert_eq!(report.hides, 1);
        assert_eq!(report.tracked_at_end, None);
        assert_eq!(report.elapsed_ms, 250);
    }

    #[test]
    fn quick_return_keeps_tracking() {
        let (report, _) = replay(
            r#"[
                {"type": "move", "x": 30, "y": 30},
                {"type": "move", "x": 600, "y": 500},
                {"type": "wait", "ms": 150},
                {"type": "move", "x": 35, "y": 30},
                {"type": "wait", "ms": 500}
            ]"#,
        );
        assert_eq!(report.hides, 0);
        assert_eq!(report.tracked_at_end.as_deref(), Some("text"));
    }

    #[test]
    fn inbound_drag_gates_drag_positions() {
        let (report, sink) = replay(
            r#"[
                {"type": "inbound", "message": {"type": "dragStateChange", "isDragging": true}},
                {"type": "inbound", "message": {"type": "noSuchThing"}},
                {"type": "move", "x": 600, "y": 500},
                {"type": "inbound", "message": {"type": "dragStateChange", "isDragging": false}},
                {"type": "move", "x": 600, "y": 510}
            ]"#,
        );
        assert_eq!(report.inbound, 2);
        let drags = sink.kinds().iter().filter(|k| **k == "updateDragPosition").count();
        assert_eq!(drags, 1);
    }

    #[test]
    fn scroll_offsets_positions() {
        let (_, sink) = replay(
            r#"[
                {"type": "scroll", "x": 0, "y": -100},
                {"type": "move", "x": 10, "y": 10}
            ]"#,
        );
        assert_eq!(
            sink.messages().last(),
            Some(&OutboundMessage::UpdateContentSelectionPosition {
                position: Point::new(10.0, -90.0)
            })
        );
    }

    #[test]
    fn json_lines_output() {
        let sink = Arc::new(JsonLinesSink::new(Vec::new()));
        run_replay(&BrickviewConfig::default(), &scenario("[]"), sink.clone()).unwrap();
        let sink = Arc::try_unwrap(sink).ok().unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first["target"], "parent");
        assert_eq!(first["message"]["type"], "slideNavigation");
    }
}
