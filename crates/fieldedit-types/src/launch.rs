use crate::field::{Field, NoteContext};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inbound construction contract for the editor screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRequest {
    /// Index of the edited field inside the host note.
    pub field_index: usize,
    pub field: Field,
    pub note: NoteContext,
    /// When present, the screen opens directly into image-edit mode on this
    /// file instead of the inbound field's variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_edit_uri: Option<PathBuf>,
}

impl LaunchRequest {
    pub fn new(field_index: usize, field: Field, note: NoteContext) -> Self {
        Self {
            field_index,
            field,
            note,
            image_edit_uri: None,
        }
    }

    pub fn with_image_edit_uri(mut self, uri: impl Into<PathBuf>) -> Self {
        self.image_edit_uri = Some(uri.into());
        self
    }
}

/// Outbound result contract of the editor screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScreenResult {
    /// The edit was committed. `field` is absent when the payload was
    /// discarded at finalize (missing media degrades silently).
    Saved {
        field: Option<Field>,
        field_index: usize,
    },
    /// The screen was cancelled or aborted; nothing to commit.
    Cancelled,
}
