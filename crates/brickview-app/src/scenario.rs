//! Scenario files: a slide document plus a timed input script.
//!
//! ```json
//! {
//!   "viewport": {"x": 0, "y": 0, "width": 800, "height": 600},
//!   "nodes": [
//!     {"id": "title", "tag": "h1", "bounds": {"x": 20, "y": 20, "width": 400, "height": 40},
//!      "brickType": "text", "text": "Teaching Kids Music"}
//!   ],
//!   "script": [
//!     {"type": "move", "x": 30, "y": 30},
//!     {"type": "wait", "ms": 250}
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use brickview_bricks::CourseView;
use brickview_common::{BrickviewError, Point, Rect, ScenarioError};
use brickview_overlay::{NodeId, NodeSpec};
use serde::Deserialize;
use tracing::debug;

fn default_viewport() -> Rect {
    Rect::new(0.0, 0.0, 1280.0, 800.0)
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default = "default_viewport")]
    pub viewport: Rect,
    /// Document origin offset (scroll or frame nesting).
    #[serde(default)]
    pub origin: Point,
    /// Overrides `bridge.initial_slide_index`.
    #[serde(default)]
    pub slide_index: Option<u32>,
    /// Unix ms at virtual time zero; defaults to the wall clock.
    #[serde(default)]
    pub start_ms: Option<i64>,
    #[serde(default)]
    pub nodes: Vec<ScenarioNode>,
    #[serde(default)]
    pub script: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioNode {
    pub id: String,
    /// Parent node id; the body when absent.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub class: String,
    pub bounds: Rect,
    #[serde(default)]
    pub brick_type: Option<String>,
    #[serde(default)]
    pub brick_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub markup: String,
}

impl ScenarioNode {
    fn spec(&self) -> NodeSpec {
        NodeSpec {
            tag_name: self.tag.clone(),
            class_name: self.class.clone(),
            bounds: self.bounds,
            brick_type: self.brick_type.clone(),
            brick_id: self.brick_id.clone(),
            text: self.text.clone(),
            markup: self.markup.clone(),
        }
    }
}

/// One scripted input event. Coordinates are viewport coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    Scroll { x: f64, y: f64 },
    /// A message from the parent, as it would arrive in a `message` event.
    Inbound { message: serde_json::Value },
    Wait { ms: u64 },
}

impl Scenario {
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(raw).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, BrickviewError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&raw)?)
    }

    /// Build the slide. Nodes may list their parent after themselves, and
    /// siblings keep their declared order, which is also their paint order.
    /// The returned map resolves scenario ids to document nodes.
    pub fn build_view(
        &self,
        default_slide: u32,
    ) -> Result<(CourseView, HashMap<String, NodeId>), ScenarioError> {
        let mut view = CourseView::new(self.slide_index.unwrap_or(default_slide), self.viewport);
        view.document_mut().set_origin(self.origin);

        let mut declared = HashSet::new();
        for node in &self.nodes {
            if !declared.insert(node.id.as_str()) {
                return Err(ScenarioError::Parse(format!("duplicate node id: {}", node.id)));
            }
        }
        for node in &self.nodes {
            if let Some(parent) = &node.parent {
                if !declared.contains(parent.as_str()) {
                    return Err(ScenarioError::UnknownNode(parent.clone()));
                }
            }
        }

        let mut children: HashMap<Option<&str>, Vec<&ScenarioNode>> = HashMap::new();
        for node in &self.nodes {
            children.entry(node.parent.as_deref()).or_default().push(node);
        }

        let mut ids: HashMap<String, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([(None, view.document().root())]);
        while let Some((key, parent)) = queue.pop_front() {
            for node in children.remove(&key).unwrap_or_default() {
                let id = view
                    .add_node(parent, node.spec())
                    .ok_or_else(|| ScenarioError::UnknownNode(node.id.clone()))?;
                ids.insert(node.id.clone(), id);
                queue.push_back((Some(node.id.as_str()), id));
            }
        }
        // Anything never reached hangs off a parent chain that loops.
        if let Some(stuck) = self.nodes.iter().find(|n| !ids.contains_key(&n.id)) {
            return Err(ScenarioError::Cycle(stuck.id.clone()));
        }

        debug!(nodes = ids.len(), bricks = view.document().bricks().len(), "scenario document built");
        Ok((view, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickview_overlay::BrickKind;

    const DEMO: &str = r#"{
        "viewport": {"x": 0, "y": 0, "width": 800, "height": 600},
        "slideIndex": 2,
        "nodes": [
            {"id": "title", "parent": "hero", "tag": "h1", "class": "text-4xl",
             "bounds": {"x": 20, "y": 20, "width": 400, "height": 40},
             "brickType": "text", "text": "Teaching Kids Music"},
            {"id": "hero", "tag": "section", "bounds": {"x": 0, "y": 0, "width": 800, "height": 300}},
            {"id": "slot", "parent": "hero",
             "bounds": {"x": 20, "y": 100, "width": 400, "height": 32},
             "brickType": "empty", "brickId": "slide-1-section-3"}
        ],
        "script": [
            {"type": "move", "x": 30, "y": 30},
            {"type": "inbound", "message": {"type": "dragStateChange", "isDragging": true}},
            {"type": "wait", "ms": 250}
        ]
    }"#;

    #[test]
    fn parses_nodes_and_script() {
        let scenario = Scenario::from_json(DEMO).unwrap();
        assert_eq!(scenario.nodes.len(), 3);
        assert_eq!(scenario.nodes[1].tag, "section");
        assert_eq!(scenario.nodes[2].tag, "div");
        assert_eq!(scenario.script[0], Step::Move { x: 30.0, y: 30.0 });
        assert_eq!(scenario.script[2], Step::Wait { ms: 250 });
        assert_eq!(scenario.origin, Point::default());
    }

    #[test]
    fn builds_out_of_order_parents() {
        let scenario = Scenario::from_json(DEMO).unwrap();
        let (view, ids) = scenario.build_view(0).unwrap();
        assert_eq!(view.slide_index(), 2);
        let doc = view.document();
        let title = doc.get(ids["title"]).unwrap();
        assert_eq!(title.parent, Some(ids["hero"]));
        assert_eq!(title.tag_name, "H1");
        assert_eq!(title.marker.as_ref().unwrap().kind, BrickKind::Text);
        assert_eq!(doc.bricks().len(), 2);
    }

    #[test]
    fn siblings_keep_declared_paint_order() {
        // "low" waits for "panel", which is declared between the two slots.
        let scenario = Scenario::from_json(
            r#"{"nodes": [
                {"id": "low", "parent": "panel", "bounds": {"x":0,"y":0,"width":100,"height":100},
                 "brickType": "text", "text": "under"},
                {"id": "panel", "bounds": {"x":0,"y":0,"width":400,"height":400}},
                {"id": "high", "parent": "panel", "bounds": {"x":0,"y":0,"width":100,"height":100},
                 "brickType": "html", "markup": "<b>over</b>"}
            ]}"#,
        )
        .unwrap();
        let (view, ids) = scenario.build_view(0).unwrap();
        let doc = view.document();
        assert_eq!(
            doc.get(ids["panel"]).unwrap().children,
            vec![ids["low"], ids["high"]]
        );
        let hit = doc.hit_test(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(doc.closest_brick(hit), Some(ids["high"]));
    }

    #[test]
    fn default_slide_applies_without_override() {
        let scenario = Scenario::from_json(r#"{"nodes": []}"#).unwrap();
        let (view, ids) = scenario.build_view(7).unwrap();
        assert_eq!(view.slide_index(), 7);
        assert!(ids.is_empty());
        assert_eq!(view.document().get(view.document().root()).unwrap().bounds.width, 1280.0);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let scenario = Scenario::from_json(
            r#"{"nodes": [{"id": "a", "parent": "ghost", "bounds": {"x":0,"y":0,"width":1,"height":1}}]}"#,
        )
        .unwrap();
        match scenario.build_view(0) {
            Err(ScenarioError::UnknownNode(id)) => assert_eq!(id, "ghost"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parent_cycle_is_rejected() {
        let scenario = Scenario::from_json(
            r#"{"nodes": [
                {"id": "a", "parent": "b", "bounds": {"x":0,"y":0,"width":1,"height":1}},
                {"id": "b", "parent": "a", "bounds": {"x":0,"y":0,"width":1,"height":1}}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(scenario.build_view(0), Err(ScenarioError::Cycle(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let scenario = Scenario::from_json(
            r#"{"nodes": [
                {"id": "a", "bounds": {"x":0,"y":0,"width":1,"height":1}},
                {"id": "a", "bounds": {"x":0,"y":0,"width":1,"height":1}}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(scenario.build_view(0), Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Scenario::from_json("{"), Err(ScenarioError::Parse(_))));
        assert!(matches!(
            Scenario::from_json(r#"{"script": [{"type": "teleport"}]}"#),
            Err(ScenarioError::Parse(_))
        ));
    }
}
