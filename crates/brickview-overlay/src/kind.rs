use serde::{Deserialize, Serialize};
use std::fmt;

/// What a trackable region holds, parsed once from its brick-type marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    Text,
    Html,
    Empty,
}

impl BrickKind {
    /// Parse a marker attribute value. Anything but `text`, `html`, or
    /// `empty` leaves the region untracked.
    pub fn from_marker(value: &str) -> Option<Self> {
        match value {
            "text" => Some(BrickKind::Text),
            "html" => Some(BrickKind::Html),
            "empty" => Some(BrickKind::Empty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::Text => "text",
            BrickKind::Html => "html",
            BrickKind::Empty => "empty",
        }
    }

    /// Populated regions get an edit control; empty slots get an add control.
    pub fn is_editable(&self) -> bool {
        matches!(self, BrickKind::Text | BrickKind::Html)
    }
}

impl fmt::Display for BrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
