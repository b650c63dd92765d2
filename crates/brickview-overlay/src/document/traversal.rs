//! Document traversal: paint order, hit testing, ancestor lookup.

use brickview_common::Point;

use super::{Document, NodeId};

impl Document {
    /// All node IDs in document (pre-)order, root first.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            for child in self.nodes[id.0].children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// The topmost node under `point` (viewport coordinates).
    ///
    /// Later nodes in document order paint above earlier ones, and children
    /// are hit even where they overflow their parent's bounds.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        self.preorder()
            .into_iter()
            .rev()
            .find(|id| self.nodes[id.0].bounds.contains(point))
    }

    /// Nearest ancestor of `id`, inclusive, carrying a brick marker.
    pub fn closest_brick(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            let node = self.nodes.get(cur.0)?;
            if node.marker.is_some() {
                return Some(cur);
            }
            current = node.parent;
        }
        None
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        out.push_str(&node.text);
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    /// What an edit request reports as the element's content: its literal
    /// text, falling back to its markup when it has no text.
    pub fn edit_content(&self, id: NodeId) -> String {
        let text = self.text_content(id);
        if !text.is_empty() {
            return text;
        }
        self.nodes
            .get(id.0)
            .map(|n| n.markup.clone())
            .unwrap_or_default()
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.nodes.get(cur.0).and_then(|n| n.parent);
        }
        false
    }
}
