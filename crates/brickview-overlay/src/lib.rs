//! Hover-tracking overlay for editable course content.
//!
//! The [`PointerTracker`] follows the pointer over a [`Document`] of
//! regions, resolves the nearest brick-marked ancestor under the cursor,
//! and keeps at most one [`TrackedElement`] live. The [`HighlightRenderer`]
//! turns that state into a highlight box and one add/edit control, and
//! turns clicks on the control into requests for the parent editor.
//! [`OverlaySession`] drives both from async input streams.

pub mod document;
pub mod drag;
pub mod kind;
pub mod renderer;
pub mod session;
pub mod timer;
pub mod tracker;

pub use document::{BrickMarker, Document, Node, NodeId, NodeSpec};
pub use drag::DragState;
pub use kind::BrickKind;
pub use renderer::{
    Affordance, AffordanceKind, ClickOutcome, HighlightBox, HighlightRenderer, HighlightTone,
    OverlayFrame, OVERLAY_CLASS,
};
pub use session::{OverlaySession, PointerInput, SessionEvent, SessionReport};
pub use timer::{HideTimer, TimerHandle};
pub use tracker::{OverlayRect, PointerTracker, TrackedElement};
