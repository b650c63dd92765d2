//! Content bricks: the editable regions of a slide.
//!
//! Each builder registers one node into a [`Document`] carrying the brick
//! marker the overlay tracks. Markers are parsed once, at registration.

use std::sync::Arc;

use brickview_bridge::{ElementData, Outbound, OutboundMessage};
use brickview_common::{fallback_section_id, Point, Rect};
use brickview_overlay::{Document, NodeId, NodeSpec};
use serde::{Deserialize, Serialize};

/// Typographic role of a text brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    #[default]
    P,
    Span,
    Li,
}

impl TextVariant {
    pub fn tag_name(&self) -> &'static str {
        match self {
            TextVariant::H1 => "h1",
            TextVariant::H2 => "h2",
            TextVariant::H3 => "h3",
            TextVariant::H4 => "h4",
            TextVariant::P => "p",
            TextVariant::Span => "span",
            TextVariant::Li => "li",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            TextVariant::H1 => "text-4xl font-bold text-gray-900",
            TextVariant::H2 => "text-3xl font-bold text-gray-900",
            TextVariant::H3 => "text-2xl font-semibold text-gray-900",
            TextVariant::H4 => "text-xl font-semibold text-gray-900",
            TextVariant::P | TextVariant::Li => "text-base text-gray-700",
            TextVariant::Span => "text-sm text-gray-600",
        }
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    match (base.is_empty(), extra.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => extra.to_string(),
        (false, false) => format!("{base} {extra}"),
    }
}

#[derive(Debug, Clone)]
pub struct TextBrick {
    pub content: String,
    pub variant: TextVariant,
    pub class_name: String,
    pub editable: bool,
    pub placeholder: String,
    pub id: Option<String>,
}

impl TextBrick {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            class_name: String::new(),
            editable: true,
            placeholder: "Click to edit text...".to_string(),
            id: None,
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Node description for this brick. Empty editable text shows its
    /// placeholder, which is what an edit request will then report.
    pub fn spec(&self, bounds: Rect) -> NodeSpec {
        let mut spec = NodeSpec::new(self.variant.tag_name(), bounds)
            .brick("text")
            .with_class(join_classes(self.variant.classes(), &self.class_name));
        if let Some(id) = &self.id {
            spec = spec.with_id(id.clone());
        }
        if !self.content.is_empty() {
            spec.with_text(self.content.clone())
                .with_markup(self.content.clone())
        } else if self.editable {
            spec.with_text(self.placeholder.clone()).with_markup(format!(
                "<span class=\"text-gray-400 italic\">{}</span>",
                self.placeholder
            ))
        } else {
            spec
        }
    }

    pub fn register(&self, document: &mut Document, parent: NodeId, bounds: Rect) -> Option<NodeId> {
        document.append(parent, self.spec(bounds))
    }
}

#[derive(Debug, Clone)]
pub struct HtmlBrick {
    pub html: String,
    pub class_name: String,
    pub editable: bool,
    pub placeholder: String,
    pub id: Option<String>,
}

impl HtmlBrick {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            class_name: String::new(),
            editable: true,
            placeholder: "Click to edit content...".to_string(),
            id: None,
        }
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn spec(&self, bounds: Rect) -> NodeSpec {
        let mut spec = NodeSpec::new("div", bounds).brick("html");
        if let Some(id) = &self.id {
            spec = spec.with_id(id.clone());
        }
        if self.html.is_empty() && self.editable {
            return spec
                .with_class(join_classes(
                    &self.class_name,
                    "text-gray-400 italic min-h-[2rem] flex items-center",
                ))
                .with_text(self.placeholder.clone())
                .with_markup(self.placeholder.clone());
        }
        spec.with_class(self.class_name.clone())
            .with_text(markup_text(&self.html))
            .with_markup(self.html.clone())
    }

    pub fn register(&self, document: &mut Document, parent: NodeId, bounds: Rect) -> Option<NodeId> {
        document.append(parent, self.spec(bounds))
    }
}

/// Text a browser would report for `html`: tags dropped, common entities decoded.
pub fn markup_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub type AddCallback = Arc<dyn Fn() + Send + Sync>;

/// A placeholder slot that asks the editor for content when clicked.
#[derive(Clone)]
pub struct EmptyBrick {
    pub height_class: String,
    pub class_name: String,
    pub id: Option<String>,
    on_add: Option<AddCallback>,
}

impl Default for EmptyBrick {
    fn default() -> Self {
        Self {
            height_class: "h-8".to_string(),
            class_name: String::new(),
            id: None,
            on_add: None,
        }
    }
}

impl EmptyBrick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn height(mut self, height_class: impl Into<String>) -> Self {
        self.height_class = height_class.into();
        self
    }

    /// Handle clicks locally instead of asking the parent for the library.
    pub fn on_add(mut self, callback: AddCallback) -> Self {
        self.on_add = Some(callback);
        self
    }

    pub fn spec(&self, bounds: Rect) -> NodeSpec {
        let base = format!(
            "w-full {} rounded transition-colors cursor-pointer relative",
            self.height_class
        );
        let mut spec = NodeSpec::new("div", bounds)
            .brick("empty")
            .with_class(join_classes(&base, &self.class_name));
        if let Some(id) = &self.id {
            spec = spec.with_id(id.clone());
        }
        spec
    }

    pub fn register(&self, document: &mut Document, parent: NodeId, bounds: Rect) -> Option<NodeId> {
        document.append(parent, self.spec(bounds))
    }

    /// A direct click on the slot (not on the overlay control).
    ///
    /// The click never reaches anything beneath the slot. Without an
    /// `on_add` handler this posts `expandContentLibrary` with the click
    /// position; a slot rendered without an id reports a generated one.
    pub fn click(&self, outbound: &Outbound, bounds: Rect, client: Point, now_ms: i64) {
        if let Some(callback) = &self.on_add {
            callback();
            return;
        }
        let brick_id = self
            .id
            .clone()
            .unwrap_or_else(|| fallback_section_id(now_ms));
        outbound.post(OutboundMessage::ExpandContentLibrary {
            element_data: ElementData {
                tag_name: None,
                class_name: None,
                rect: bounds.into(),
                element_type: "empty".to_string(),
                brick_type: None,
                brick_id: Some(brick_id),
                content: None,
                click_x: Some(client.x),
                click_y: Some(client.y),
                timestamp: Some(now_ms),
            },
        });
    }
}

impl std::fmt::Debug for EmptyBrick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmptyBrick")
            .field("height_class", &self.height_class)
            .field("class_name", &self.class_name)
            .field("id", &self.id)
            .field("on_add", &self.on_add.is_some())
            .finish()
    }
}
