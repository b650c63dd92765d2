//! Tests for document registration and traversal.

use super::*;

fn slide() -> (Document, NodeId, NodeId, NodeId) {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let section = doc
        .append(doc.root(), NodeSpec::new("section", Rect::new(0.0, 0.0, 800.0, 300.0)))
        .unwrap();
    let heading = doc
        .append(
            section,
            NodeSpec::new("h1", Rect::new(20.0, 20.0, 400.0, 40.0))
                .brick("text")
                .with_id("slide-1-text-1")
                .with_text("Teaching Kids Music"),
        )
        .unwrap();
    let slot = doc
        .append(
            section,
            NodeSpec::new("div", Rect::new(20.0, 100.0, 400.0, 32.0))
                .brick("empty")
                .with_id("slide-1-section-3"),
        )
        .unwrap();
    (doc, section, heading, slot)
}

#[test]
fn new_document_has_body_root() {
    let doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get(doc.root()).unwrap().tag_name, "BODY");
}

#[test]
fn append_uppercases_tag_and_parses_marker() {
    let (doc, _, heading, slot) = slide();
    let h = doc.get(heading).unwrap();
    assert_eq!(h.tag_name, "H1");
    assert_eq!(h.marker.as_ref().unwrap().kind, BrickKind::Text);
    let s = doc.get(slot).unwrap();
    assert_eq!(s.marker.as_ref().unwrap().brick_id.as_deref(), Some("slide-1-section-3"));
}

#[test]
fn append_to_missing_parent_fails() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(doc.append(NodeId(7), NodeSpec::default()).is_none());
}

#[test]
fn unknown_marker_is_untracked() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    let id = doc
        .append(doc.root(), NodeSpec::new("img", Rect::new(0.0, 0.0, 5.0, 5.0)).brick("image"))
        .unwrap();
    assert!(doc.get(id).unwrap().marker.is_none());
    assert!(doc.bricks().is_empty());
}

#[test]
fn hit_test_returns_deepest_node() {
    let (doc, section, heading, _) = slide();
    assert_eq!(doc.hit_test(Point::new(30.0, 30.0)), Some(heading));
    assert_eq!(doc.hit_test(Point::new(600.0, 200.0)), Some(section));
    assert_eq!(doc.hit_test(Point::new(600.0, 500.0)), Some(doc.root()));
    assert_eq!(doc.hit_test(Point::new(900.0, 900.0)), None);
}

#[test]
fn later_siblings_paint_on_top() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let _under = doc
        .append(doc.root(), NodeSpec::new("div", Rect::new(0.0, 0.0, 50.0, 50.0)))
        .unwrap();
    let over = doc
        .append(doc.root(), NodeSpec::new("div", Rect::new(25.0, 25.0, 50.0, 50.0)))
        .unwrap();
    assert_eq!(doc.hit_test(Point::new(30.0, 30.0)), Some(over));
}

#[test]
fn overflowing_child_is_hit_outside_parent() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let parent = doc
        .append(doc.root(), NodeSpec::new("div", Rect::new(0.0, 0.0, 20.0, 20.0)))
        .unwrap();
    let child = doc
        .append(parent, NodeSpec::new("span", Rect::new(10.0, 10.0, 60.0, 10.0)))
        .unwrap();
    assert_eq!(doc.hit_test(Point::new(50.0, 15.0)), Some(child));
}

#[test]
fn closest_brick_is_inclusive_and_walks_up() {
    let (mut doc, section, heading, _) = slide();
    let em = doc
        .append(
            heading,
            NodeSpec::new("em", Rect::new(30.0, 25.0, 40.0, 20.0)).with_text(" fun"),
        )
        .unwrap();
    assert_eq!(doc.closest_brick(heading), Some(heading));
    assert_eq!(doc.closest_brick(em), Some(heading));
    assert_eq!(doc.closest_brick(section), None);
    assert_eq!(doc.closest_brick(NodeId(99)), None);
}

#[test]
fn nested_bricks_resolve_to_nearest() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let outer = doc
        .append(doc.root(), NodeSpec::new("div", Rect::new(0.0, 0.0, 100.0, 100.0)).brick("html"))
        .unwrap();
    let inner = doc
        .append(outer, NodeSpec::new("p", Rect::new(10.0, 10.0, 50.0, 20.0)).brick("text"))
        .unwrap();
    assert_eq!(doc.closest_brick(inner), Some(inner));
    let hit = doc.hit_test(Point::new(80.0, 80.0)).unwrap();
    assert_eq!(doc.closest_brick(hit), Some(outer));
}

#[test]
fn text_content_includes_descendants() {
    let (mut doc, _, heading, _) = slide();
    doc.append(heading, NodeSpec::new("em", Rect::default()).with_text(": A Fun Approach"))
        .unwrap();
    assert_eq!(doc.text_content(heading), "Teaching Kids Music: A Fun Approach");
}

#[test]
fn edit_content_falls_back_to_markup() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let html = doc
        .append(
            doc.root(),
            NodeSpec::new("div", Rect::default())
                .brick("html")
                .with_markup("<img src=\"a.png\">"),
        )
        .unwrap();
    assert_eq!(doc.edit_content(html), "<img src=\"a.png\">");
    doc.set_content(html, "caption", "<p>caption</p>");
    assert_eq!(doc.edit_content(html), "caption");
}

#[test]
fn set_bounds_moves_hit_region() {
    let (mut doc, section, heading, _) = slide();
    assert!(doc.set_bounds(heading, Rect::new(500.0, 200.0, 100.0, 20.0)));
    assert_eq!(doc.hit_test(Point::new(30.0, 30.0)), Some(section));
    assert!(!doc.set_bounds(NodeId(42), Rect::default()));
}

#[test]
fn bricks_in_document_order() {
    let (doc, _, heading, slot) = slide();
    assert_eq!(doc.bricks(), vec![heading, slot]);
}

#[test]
fn ancestor_check() {
    let (doc, section, heading, slot) = slide();
    assert!(doc.is_ancestor_or_self(section, heading));
    assert!(doc.is_ancestor_or_self(slot, slot));
    assert!(!doc.is_ancestor_or_self(heading, slot));
}
