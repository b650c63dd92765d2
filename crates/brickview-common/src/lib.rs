pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BridgeError, BrickviewError, ConfigError, ScenarioError};
pub use id::{fallback_section_id, placeholder_brick_id, section_brick_id};
pub use types::{DomRect, Point, Rect};

pub type Result<T> = std::result::Result<T, BrickviewError>;
