//! On-disk scenario format for `fieldedit replay`.
//!
//! A scenario is a TOML file describing the launch payload plus the ordered
//! host events to feed the screen. The format keeps its own enums instead of
//! exposing the engine's so scenario files stay stable against internal
//! renames.

use fieldedit_engine::{Capability, PermissionOutcome, RequestTag};
use fieldedit_runtime::MenuAction;
use fieldedit_types::{Field, FieldKind, LaunchRequest, NoteContext};
use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub field: FieldSpec,

    #[serde(default)]
    pub note: NoteSpec,

    /// Open directly in image-edit mode on this file.
    #[serde(default)]
    pub image_edit_uri: Option<PathBuf>,

    /// Capabilities the simulated platform reports as already granted.
    #[serde(default)]
    pub granted: Vec<CapabilitySpec>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn launch_request(&self) -> LaunchRequest {
        let note = NoteContext::new(Uuid::new_v4(), self.note.field_count);
        let request = LaunchRequest::new(self.note.field_index, self.field.to_field(), note);
        match &self.image_edit_uri {
            Some(uri) => request.with_image_edit_uri(uri),
            None => request,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteSpec {
    #[serde(default)]
    pub field_index: usize,
    #[serde(default = "default_field_count")]
    pub field_count: usize,
}

fn default_field_count() -> usize {
    1
}

impl Default for NoteSpec {
    fn default() -> Self {
        NoteSpec {
            field_index: 0,
            field_count: default_field_count(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub kind: KindSpec,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl FieldSpec {
    pub fn to_field(&self) -> Field {
        match (self.kind, &self.path) {
            (KindSpec::Text, _) => Field::text(self.text.clone()),
            (KindSpec::Image, Some(path)) => Field::image(path),
            (KindSpec::AudioRecording, Some(path)) => Field::audio_recording(path),
            (KindSpec::AudioClip, Some(path)) => Field::audio_clip(path),
            (kind, None) => Field::empty(kind.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindSpec {
    Text,
    Image,
    AudioRecording,
    AudioClip,
}

impl From<KindSpec> for FieldKind {
    fn from(kind: KindSpec) -> FieldKind {
        match kind {
            KindSpec::Text => FieldKind::Text,
            KindSpec::Image => FieldKind::Image,
            KindSpec::AudioRecording => FieldKind::AudioRecording,
            KindSpec::AudioClip => FieldKind::AudioClip,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilitySpec {
    Microphone,
    Camera,
}

impl From<CapabilitySpec> for Capability {
    fn from(capability: CapabilitySpec) -> Capability {
        match capability {
            CapabilitySpec::Microphone => Capability::Microphone,
            CapabilitySpec::Camera => Capability::Camera,
        }
    }
}

/// One host event fed to the screen, in file order.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// A menu selection.
    Menu { select: MenuSpec },

    /// A field change pushed from outside the screen.
    ExternalChange { field: FieldSpec },

    /// The platform delivers a permission outcome.
    PermissionOutcome { tag: TagSpec, granted: bool },

    /// Back navigation.
    Back,

    /// The user asked to commit and leave.
    Done,

    /// Answer to a pending oversize-image confirmation.
    CropDecision { proceed: bool },

    /// The host pauses the screen.
    Pause,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSpec {
    SwitchToText,
    SwitchToImage,
    SwitchToAudioRecording,
    SwitchToAudioClip,
    Commit,
}

impl From<MenuSpec> for MenuAction {
    fn from(menu: MenuSpec) -> MenuAction {
        match menu {
            MenuSpec::SwitchToText => MenuAction::SwitchToText,
            MenuSpec::SwitchToImage => MenuAction::SwitchToImage,
            MenuSpec::SwitchToAudioRecording => MenuAction::SwitchToAudioRecording,
            MenuSpec::SwitchToAudioClip => MenuAction::SwitchToAudioClip,
            MenuSpec::Commit => MenuAction::Commit,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSpec {
    RecordAudio,
    Camera,
}

impl TagSpec {
    pub fn to_outcome(self, granted: bool) -> PermissionOutcome {
        let tag = match self {
            TagSpec::RecordAudio => RequestTag::RecordAudio,
            TagSpec::Camera => RequestTag::Camera,
        };
        PermissionOutcome { tag, granted }
    }
}
