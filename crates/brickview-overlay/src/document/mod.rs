//! Region document: the part of the page the tracker can see.
//!
//! Nodes form a tree rooted at the body. Each node carries its viewport
//! bounds and, when it opted into tracking, a [`BrickMarker`] resolved once
//! at registration time.

mod traversal;
mod types;

pub use types::{BrickMarker, Node, NodeId, NodeSpec};

use brickview_common::{Point, Rect};
use tracing::debug;

use crate::kind::BrickKind;

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    origin: Point,
}

impl Document {
    /// Create a document whose root body covers `viewport`.
    pub fn new(viewport: Rect) -> Self {
        let body = Node {
            id: NodeId(0),
            parent: None,
            children: Vec::new(),
            tag_name: "BODY".to_string(),
            class_name: String::new(),
            bounds: viewport,
            marker: None,
            text: String::new(),
            markup: String::new(),
        };
        Self {
            nodes: vec![body],
            origin: Point::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Top-left of the body in the host's coordinate space. Non-zero when the
    /// document is scrolled or nested inside an offset frame.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Append a node as the last child of `parent`.
    ///
    /// Returns `None` when `parent` does not exist. A `brick_type` that is not
    /// a known marker value registers the node as untracked.
    pub fn append(&mut self, parent: NodeId, spec: NodeSpec) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        let id = NodeId(self.nodes.len());
        let marker = match spec.brick_type.as_deref() {
            Some(value) => match BrickKind::from_marker(value) {
                Some(kind) => Some(BrickMarker {
                    kind,
                    brick_id: spec.brick_id.clone(),
                }),
                None => {
                    debug!(node = id.0, marker = value, "unrecognised brick marker, untracked");
                    None
                }
            },
            None => None,
        };
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            children: Vec::new(),
            tag_name: spec.tag_name.to_ascii_uppercase(),
            class_name: spec.class_name,
            bounds: spec.bounds,
            marker,
            text: spec.text,
            markup: spec.markup,
        });
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    /// Move a node to new bounds (layout change, scroll, resize).
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Replace a node's own text and markup.
    pub fn set_content(&mut self, id: NodeId, text: impl Into<String>, markup: impl Into<String>) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.text = text.into();
                node.markup = markup.into();
                true
            }
            None => false,
        }
    }

    /// Every node carrying a brick marker, in document order.
    pub fn bricks(&self) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|id| self.nodes[id.0].marker.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests;
