//! Media bricks: one content-library record plus local UI state.
//!
//! Each brick mirrors its selection membership from parent broadcasts and
//! turns user actions into requests. Selection requests go to the brick's
//! own window, where the editor's selection store picks them up.

mod playback;


pub use playback::{Playback, VolumeLevel};

use std::fmt;
use std::sync::Arc;

use brickview_bridge::{InboundMessage, Outbound, OutboundMessage};
use tracing::debug;

use crate::file::{FileType, UploadedFile};
use crate::format::{dimensions_label, format_count, format_duration, format_file_size};
use crate::selection::SelectionMembership;

/// Caller-supplied handler for a brick action.
pub type FileCallback = Arc<dyn Fn(&UploadedFile) + Send + Sync>;

/// Extensions the 3D preview can render.
const MODEL_EXTENSIONS: &[&str] = &["glb", "gltf"];

/// What a host needs to trigger a browser download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// The first two tags plus a count of the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSummary {
    pub shown: Vec<String>,
    pub overflow: usize,
}

impl TagSummary {
    const SHOWN: usize = 2;

    pub fn from_tags(tags: &[String]) -> Self {
        Self {
            shown: tags.iter().take(Self::SHOWN).cloned().collect(),
            overflow: tags.len().saturating_sub(Self::SHOWN),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

impl fmt::Display for TagSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shown.join(", "))?;
        if self.overflow > 0 {
            write!(f, " +{}", self.overflow)?;
        }
        Ok(())
    }
}

pub struct MediaBrick {
    file: UploadedFile,
    outbound: Outbound,
    selection: SelectionMembership,
    loading: bool,
    error: bool,
    preview: bool,
    fullscreen: bool,
    playback: Option<Playback>,
    on_select: Option<FileCallback>,
    on_delete: Option<FileCallback>,
    on_add_to_selection: Option<FileCallback>,
}

impl MediaBrick {
    pub fn new(file: UploadedFile, outbound: Outbound) -> Self {
        let playback = (file.file_type == FileType::Audio).then(Playback::default);
        Self {
            loading: shows_loading(file.file_type),
            selection: SelectionMembership::new(file.id.clone()),
            file,
            outbound,
            error: false,
            preview: false,
            fullscreen: false,
            playback,
            on_select: None,
            on_delete: None,
            on_add_to_selection: None,
        }
    }

    pub fn on_select(mut self, callback: FileCallback) -> Self {
        self.on_select = Some(callback);
        self
    }

    pub fn on_delete(mut self, callback: FileCallback) -> Self {
        self.on_delete = Some(callback);
        self
    }

    /// Replace the default `addToContentSelection` post with a handler.
    pub fn on_add_to_selection(mut self, callback: FileCallback) -> Self {
        self.on_add_to_selection = Some(callback);
        self
    }

    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    pub fn file_type(&self) -> FileType {
        self.file.file_type
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn is_selected(&self) -> bool {
        self.selection.is_selected()
    }

    pub fn is_previewing(&self) -> bool {
        self.preview
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn playback_mut(&mut self) -> Option<&mut Playback> {
        self.playback.as_mut()
    }

    /// Apply a message from the bus. Returns `true` if selection changed.
    pub fn handle_inbound(&mut self, message: &InboundMessage) -> bool {
        let changed = self.selection.apply(message);
        if changed {
            debug!(
                content_id = %self.file.id,
                selected = self.selection.is_selected(),
                "selection membership changed"
            );
        }
        changed
    }

    /// Body click. Returns `true` if a handler ran.
    pub fn select(&self) -> bool {
        match &self.on_select {
            Some(callback) => {
                callback(&self.file);
                true
            }
            None => false,
        }
    }

    pub fn delete(&self) -> bool {
        match &self.on_delete {
            Some(callback) => {
                callback(&self.file);
                true
            }
            None => false,
        }
    }

    /// Ask for this record to join the selection. The parent confirms by
    /// broadcasting the new selection; local state is not touched here.
    pub fn add_to_selection(&self) {
        match &self.on_add_to_selection {
            Some(callback) => callback(&self.file),
            None => {
                self.outbound.post(OutboundMessage::AddToContentSelection {
                    content: self.file.to_value(),
                });
            }
        }
    }

    pub fn remove_from_selection(&self) {
        self.outbound.post(OutboundMessage::RemoveFromContentSelection {
            content_id: self.file.id.clone(),
        });
    }

    /// The selection button: removes when selected, adds otherwise.
    pub fn toggle_selection(&self) {
        if self.is_selected() {
            self.remove_from_selection();
        } else {
            self.add_to_selection();
        }
    }

    pub fn selection_title(&self) -> &'static str {
        if self.is_selected() {
            "Remove from Selection"
        } else {
            "Add to Selection"
        }
    }

    pub fn download(&self) -> DownloadLink {
        DownloadLink {
            href: self.file.public_url.clone(),
            filename: self.file.original_name.clone(),
        }
    }

    /// Only images and models have a fullscreen view. Returns `true` if opened.
    pub fn open_fullscreen(&mut self) -> bool {
        if matches!(self.file.file_type, FileType::Image | FileType::Model3d) {
            self.fullscreen = true;
        }
        self.fullscreen
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Models render a live preview while hovered.
    pub fn pointer_enter(&mut self) {
        if self.file.file_type == FileType::Model3d {
            self.preview = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.preview = false;
    }

    pub fn loaded(&mut self) {
        self.loading = false;
        self.error = false;
    }

    pub fn failed(&mut self) {
        debug!(content_id = %self.file.id, url = %self.file.public_url, "media failed to load");
        self.loading = false;
        self.error = true;
    }

    /// Swap in an updated record. A new source URL restarts loading and
    /// playback; a new `_id` retargets selection membership.
    pub fn set_file(&mut self, file: UploadedFile) {
        if file.public_url != self.file.public_url {
            self.loading = shows_loading(file.file_type);
            self.error = false;
            if let Some(playback) = self.playback.as_mut() {
                playback.reset();
            }
        }
        if file.id != self.file.id {
            self.selection.retarget(file.id.clone());
        }
        self.file = file;
    }

    pub fn caption(&self) -> &str {
        self.file.title()
    }

    /// The secondary line under the caption, falling back to file size.
    pub fn detail_label(&self) -> String {
        let meta = &self.file.metadata;
        let detail = match self.file.file_type {
            FileType::Image | FileType::Video => dimensions_label(meta.width, meta.height),
            FileType::Audio => Some(format_duration(meta.duration)).filter(|d| !d.is_empty()),
            FileType::Document => meta
                .page_count
                .filter(|n| *n > 0)
                .map(|n| format!("{n} pages")),
            FileType::Model3d => meta
                .vertices
                .filter(|n| *n > 0)
                .map(|n| format!("{} vertices", format_count(n))),
        };
        detail.unwrap_or_else(|| format_file_size(self.file.size))
    }

    pub fn tag_summary(&self) -> TagSummary {
        TagSummary::from_tags(&self.file.tags)
    }

    pub fn usage_label(&self) -> Option<String> {
        (self.file.usage_count > 0).then(|| format!("Used {}×", self.file.usage_count))
    }

    /// Lower-case model extension without the dot, from metadata or the
    /// original file name.
    pub fn model_extension(&self) -> String {
        let from_meta = self.file.metadata.extension.to_lowercase().replacen('.', "", 1);
        if !from_meta.is_empty() {
            return from_meta;
        }
        let name = self.file.original_name.to_lowercase();
        name.rsplit('.').next().unwrap_or_default().to_string()
    }

    pub fn is_model_supported(&self) -> bool {
        let ext = self.model_extension();
        let name = self.file.original_name.to_lowercase();
        MODEL_EXTENSIONS.contains(&ext.as_str())
            || MODEL_EXTENSIONS
                .iter()
                .any(|supported| name.ends_with(&format!(".{supported}")))
    }
}

impl fmt::Debug for MediaBrick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBrick")
            .field("id", &self.file.id)
            .field("file_type", &self.file.file_type)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("selected", &self.selection.is_selected())
            .finish_non_exhaustive()
    }
}

fn shows_loading(file_type: FileType) -> bool {
    matches!(file_type, FileType::Image | FileType::Video | FileType::Model3d)
}
