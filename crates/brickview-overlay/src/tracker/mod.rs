//! Pointer tracker.
//!
//! Follows pointer moves over a [`Document`], keeps at most one
//! [`TrackedElement`] live, and forwards cursor positions to the parent.
//!
//! Entry is immediate: hovering a brick cancels any pending hide and adopts
//! the new element in the same call. Leaving is debounced by the hide delay
//! so the pointer can cross the gap between an element and its control
//! (which may sit outside the element's bounds) without flicker.

mod types;


pub use types::{OverlayRect, TrackedElement};

use std::time::{Duration, Instant};

use brickview_bridge::{InboundMessage, OutboundMessage, Outbound};
use brickview_common::Point;
use brickview_config::BrickviewConfig;
use tracing::debug;

use crate::document::Document;
use crate::drag::DragState;
use crate::renderer::{ClickOutcome, HighlightRenderer, OverlayFrame, OVERLAY_CLASS};
use crate::timer::HideTimer;

#[derive(Debug)]
pub struct PointerTracker {
    outbound: Outbound,
    drag: DragState,
    renderer: HighlightRenderer,
    timer: HideTimer,
    hide_delay: Duration,
    selection_interval: Option<Duration>,
    tracked: Option<TrackedElement>,
    last_position: Point,
    last_selection_post: Option<Instant>,
    mounted: bool,
}

impl PointerTracker {
    pub fn new(config: &BrickviewConfig, outbound: Outbound, drag: DragState) -> Self {
        Self {
            outbound,
            drag,
            renderer: HighlightRenderer::new(&config.overlay),
            timer: HideTimer::new(),
            hide_delay: config.overlay.hide_delay(),
            selection_interval: config.bridge.selection_position_interval(),
            tracked: None,
            last_position: Point::default(),
            last_selection_post: None,
            mounted: false,
        }
    }

    /// Start listening. Posts the last known position once so the parent
    /// has a starting point before the first move.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        debug!("pointer tracker mounted");
        self.post_selection_position(self.last_position, now);
    }

    /// Stop listening and release the hide timer.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(handle) = self.timer.cancel() {
            debug!(timer = handle.id, "pending hide released on unmount");
        }
        self.tracked = None;
        self.mounted = false;
        debug!("pointer tracker unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Handle one pointer move at viewport coordinates `client`.
    pub fn pointer_move(&mut self, document: &Document, client: Point, now: Instant) {
        if !self.mounted {
            return;
        }

        let position = client.offset_by(document.origin());
        self.last_position = position;
        self.post_selection_position(position, now);
        if self.drag.is_dragging() {
            self.outbound
                .post(OutboundMessage::UpdateDragPosition { position });
        }

        // The control paints above the page, so it wins the hit test.
        if self.over_furniture(document, client) {
            if let Some(handle) = self.timer.cancel() {
                debug!(timer = handle.id, "pointer on overlay, hide cancelled");
            }
            return;
        }

        let hit = document.hit_test(client);
        if let Some(brick) = hit.and_then(|id| document.closest_brick(id)) {
            if let Some(handle) = self.timer.cancel() {
                debug!(timer = handle.id, "pending hide cancelled by hover");
            }
            let Some(node) = document.get(brick) else {
                return;
            };
            let Some(marker) = node.marker.as_ref() else {
                return;
            };
            let next = TrackedElement {
                node: brick,
                kind: marker.kind,
                brick_id: marker.brick_id.clone(),
                bounds: node.bounds,
            };
            if self.tracked.as_ref().map(|t| t.node) != Some(brick) {
                debug!(
                    node = brick.0,
                    kind = %next.kind,
                    brick_id = next.brick_id.as_deref().unwrap_or(""),
                    "hover"
                );
            }
            self.tracked = Some(next);
            return;
        }

        if self.tracked.is_some() && !self.timer.is_pending() {
            let handle = self.timer.schedule(now, self.hide_delay);
            debug!(timer = handle.id, delay_ms = self.hide_delay.as_millis() as u64, "hide scheduled");
        }
    }

    /// Fire the hide timer if it is due. Returns `true` if the tracked
    /// element was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(handle) = self.timer.take_due(now) else {
            return false;
        };
        if !self.mounted {
            return false;
        }
        debug!(timer = handle.id, "hide fired");
        self.tracked.take().is_some()
    }

    /// When [`poll`](Self::poll) next needs to run, if a hide is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn is_hide_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Apply a message from the parent. Returns `true` if the drag flag changed.
    pub fn handle_inbound(&mut self, message: &InboundMessage) -> bool {
        let changed = self.drag.apply(message);
        if changed {
            debug!(dragging = self.drag.is_dragging(), "drag state changed");
        }
        changed
    }

    /// Route a click at viewport coordinates `client` through the overlay.
    ///
    /// Clicks that miss the control pass through to the page untouched.
    pub fn click(&mut self, document: &Document, client: Point, timestamp_ms: i64) -> ClickOutcome {
        if !self.mounted {
            return ClickOutcome::passthrough();
        }
        let Some(affordance) = self.frame().and_then(|f| f.affordance_at(client)) else {
            return ClickOutcome::passthrough();
        };
        let outcome =
            self.renderer
                .activate(affordance, document, self.tracked.as_ref(), timestamp_ms);
        if let Some(message) = &outcome.message {
            self.outbound.post(message.clone());
        }
        outcome
    }

    pub fn tracked(&self) -> Option<&TrackedElement> {
        self.tracked.as_ref()
    }

    pub fn overlay_rect(&self) -> Option<OverlayRect> {
        self.tracked.as_ref().map(|t| t.bounds.into())
    }

    /// What the renderer draws for the current state.
    pub fn frame(&self) -> Option<OverlayFrame> {
        self.renderer.render(self.tracked.as_ref())
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn last_position(&self) -> Point {
        self.last_position
    }

    /// The pointer is on the rendered control, or on a document node that
    /// belongs to the overlay.
    fn over_furniture(&self, document: &Document, client: Point) -> bool {
        if self.frame().is_some_and(|f| f.furniture_contains(client)) {
            return true;
        }
        document
            .hit_test(client)
            .and_then(|id| document.get(id))
            .is_some_and(|node| node.class_name.split_whitespace().any(|c| c == OVERLAY_CLASS))
    }

    fn post_selection_position(&mut self, position: Point, now: Instant) {
        if let (Some(interval), Some(last)) = (self.selection_interval, self.last_selection_post) {
            if now.saturating_duration_since(last) < interval {
                return;
            }
        }
        self.last_selection_post = Some(now);
        self.outbound
            .post(OutboundMessage::UpdateContentSelectionPosition { position });
    }
}
