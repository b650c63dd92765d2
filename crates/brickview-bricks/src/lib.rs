//! Course content bricks.
//!
//! Two families live here:
//!
//! - **Content bricks** ([`TextBrick`], [`HtmlBrick`], [`EmptyBrick`]) register
//!   trackable regions into an overlay [`Document`](brickview_overlay::Document).
//! - **Media bricks** ([`MediaBrick`]) wrap one [`UploadedFile`] from the
//!   content library with local UI state and selection requests.
//!
//! [`CourseView`] ties a slide's document to the parent editor.

pub mod content;
pub mod course;
pub mod file;
pub mod format;
pub mod media;
pub mod selection;

pub use content::{EmptyBrick, HtmlBrick, TextBrick, TextVariant};
pub use course::CourseView;
pub use file::{FileMetadata, FileType, GridCell, UploadedFile};
pub use format::{dimensions_label, format_count, format_duration, format_file_size};
pub use media::{DownloadLink, MediaBrick, Playback, TagSummary};
pub use selection::SelectionMembership;
