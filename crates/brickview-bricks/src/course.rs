//! A slide as the editor sees it: a document of bricks plus navigation.

use std::collections::HashMap;

use brickview_bridge::{Outbound, OutboundMessage};
use brickview_common::{section_brick_id, Point, Rect};
use brickview_overlay::{Document, NodeId, NodeSpec};
use tracing::{debug, info};

use crate::content::{EmptyBrick, HtmlBrick, TextBrick, TextVariant};

#[derive(Debug)]
pub struct CourseView {
    slide_index: u32,
    document: Document,
    empties: HashMap<NodeId, EmptyBrick>,
    mounted: bool,
}

impl CourseView {
    pub fn new(slide_index: u32, viewport: Rect) -> Self {
        Self {
            slide_index,
            document: Document::new(viewport),
            empties: HashMap::new(),
            mounted: false,
        }
    }

    /// The course overview slide: title, subtitle, and one open section.
    pub fn overview(viewport: Rect) -> Self {
        let mut view = Self::new(0, viewport);
        let root = view.document.root();
        let width = (viewport.width - 64.0).clamp(0.0, 896.0);
        let left = viewport.x + (viewport.width - width) / 2.0;

        view.add_text(
            root,
            &TextBrick::new("Teaching Kids Music: A Fun Approach")
                .variant(TextVariant::H1)
                .class("mb-4")
                .id(section_brick_id(0, "text", 1)),
            Rect::new(left, 32.0, width, 40.0),
        );
        view.add_text(
            root,
            &TextBrick::new("Interactive Course")
                .variant(TextVariant::P)
                .class("text-xl mb-2")
                .id(section_brick_id(0, "text", 2)),
            Rect::new(left, 88.0, width, 28.0),
        );
        view.add_empty(
            root,
            EmptyBrick::new().id(section_brick_id(0, "section", 1)),
            Rect::new(left, 160.0, width, 32.0),
        );
        view
    }

    pub fn slide_index(&self) -> u32 {
        self.slide_index
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Register a raw node. Nodes marked `empty` also take direct clicks.
    pub fn add_node(&mut self, parent: NodeId, spec: NodeSpec) -> Option<NodeId> {
        let slot = (spec.brick_type.as_deref() == Some("empty")).then(|| {
            let slot = EmptyBrick::new().class(spec.class_name.clone());
            match &spec.brick_id {
                Some(id) => slot.id(id.clone()),
                None => slot,
            }
        });
        let id = self.document.append(parent, spec)?;
        if let Some(slot) = slot {
            self.empties.insert(id, slot);
        }
        Some(id)
    }

    pub fn add_text(&mut self, parent: NodeId, brick: &TextBrick, bounds: Rect) -> Option<NodeId> {
        brick.register(&mut self.document, parent, bounds)
    }

    pub fn add_html(&mut self, parent: NodeId, brick: &HtmlBrick, bounds: Rect) -> Option<NodeId> {
        brick.register(&mut self.document, parent, bounds)
    }

    /// Register an empty slot and keep it for direct clicks.
    pub fn add_empty(&mut self, parent: NodeId, brick: EmptyBrick, bounds: Rect) -> Option<NodeId> {
        let id = brick.register(&mut self.document, parent, bounds)?;
        self.empties.insert(id, brick);
        Some(id)
    }

    /// Announce the slide to the parent. Only the first call posts.
    pub fn mount(&mut self, outbound: &Outbound) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        info!(slide = self.slide_index, "course view mounted");
        outbound.post(OutboundMessage::SlideNavigation {
            slide_index: self.slide_index,
        })
    }

    /// Deliver a page click the overlay did not consume. Returns `true`
    /// if an empty slot under the pointer handled it.
    pub fn click_through(&self, outbound: &Outbound, client: Point, now_ms: i64) -> bool {
        let Some(node) = self
            .document
            .hit_test(client)
            .and_then(|id| self.document.closest_brick(id))
        else {
            return false;
        };
        let (Some(brick), Some(target)) = (self.empties.get(&node), self.document.get(node)) else {
            return false;
        };
        debug!(node = node.0, "click delivered to empty slot");
        brick.click(outbound, target.bounds, client, now_ms);
        true
    }
}
