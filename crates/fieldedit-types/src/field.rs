use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Largest image accepted at finalize without a crop/resize confirmation
/// (1 MiB).
pub const IMAGE_SIZE_LIMIT: u64 = 1024 * 1024;

/// Discriminant for the four editable representations of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Image,
    AudioRecording,
    AudioClip,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Text,
        FieldKind::Image,
        FieldKind::AudioRecording,
        FieldKind::AudioClip,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Image => "image",
            FieldKind::AudioRecording => "audio recording",
            FieldKind::AudioClip => "audio clip",
        }
    }
}

/// Editable field content.
///
/// Exactly one payload is meaningful at a time; switching the screen to a
/// different variant replaces the payload wholesale, and payloads of
/// non-active variants are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Field {
    Text { text: String },
    Image { path: Option<PathBuf> },
    AudioRecording { path: Option<PathBuf> },
    AudioClip { path: Option<PathBuf> },
}

impl Field {
    /// An empty payload for the given variant.
    pub fn empty(kind: FieldKind) -> Field {
        match kind {
            FieldKind::Text => Field::Text {
                text: String::new(),
            },
            FieldKind::Image => Field::Image { path: None },
            FieldKind::AudioRecording => Field::AudioRecording { path: None },
            FieldKind::AudioClip => Field::AudioClip { path: None },
        }
    }

    pub fn text(text: impl Into<String>) -> Field {
        Field::Text { text: text.into() }
    }

    pub fn image(path: impl Into<PathBuf>) -> Field {
        Field::Image {
            path: Some(path.into()),
        }
    }

    pub fn audio_recording(path: impl Into<PathBuf>) -> Field {
        Field::AudioRecording {
            path: Some(path.into()),
        }
    }

    pub fn audio_clip(path: impl Into<PathBuf>) -> Field {
        Field::AudioClip {
            path: Some(path.into()),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Text { .. } => FieldKind::Text,
            Field::Image { .. } => FieldKind::Image,
            Field::AudioRecording { .. } => FieldKind::AudioRecording,
            Field::AudioClip { .. } => FieldKind::AudioClip,
        }
    }

    /// Media path carried by the active payload, if the variant has one.
    pub fn media_path(&self) -> Option<&Path> {
        match self {
            Field::Text { .. } => None,
            Field::Image { path }
            | Field::AudioRecording { path }
            | Field::AudioClip { path } => path.as_deref(),
        }
    }
}

/// Identity of the host note the edited field belongs to.
///
/// The note itself stays external; only enough shape travels with the screen
/// to validate the inbound field index and rebind controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteContext {
    pub note_id: Uuid,
    pub field_count: usize,
}

impl NoteContext {
    pub fn new(note_id: Uuid, field_count: usize) -> Self {
        Self {
            note_id,
            field_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_match_their_kind() {
        for kind in FieldKind::ALL {
            assert_eq!(Field::empty(kind).kind(), kind);
        }
    }

    #[test]
    fn media_path_only_for_media_variants() {
        assert!(Field::text("hello").media_path().is_none());
        assert!(Field::empty(FieldKind::Image).media_path().is_none());
        assert_eq!(
            Field::image("/tmp/a.png").media_path(),
            Some(Path::new("/tmp/a.png"))
        );
        assert_eq!(
            Field::audio_recording("/tmp/a.wav").media_path(),
            Some(Path::new("/tmp/a.wav"))
        );
    }

    #[test]
    fn field_serialization_round_trip() {
        let field = Field::image("/tmp/pic.jpg");
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
