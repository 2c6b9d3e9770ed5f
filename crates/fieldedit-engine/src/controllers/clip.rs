use crate::container::{RenderedView, ViewContainer, ViewMode};
use crate::controller::{ControllerBinding, FieldController};
use fieldedit_types::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClipState {
    path: Option<PathBuf>,
}

/// Audio clip controller: picks an existing media file rather than
/// recording one.
#[derive(Debug, Default)]
pub struct MediaClipController {
    path: Option<PathBuf>,
    binding: Option<ControllerBinding>,
}

impl MediaClipController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget input: a clip was picked.
    pub fn set_clip_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn clip_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl FieldController for MediaClipController {
    fn kind(&self) -> FieldKind {
        FieldKind::AudioClip
    }

    fn bind(&mut self, binding: ControllerBinding) {
        if let Field::AudioClip { path } = &binding.field {
            self.path = path.clone();
        }
        self.binding = Some(binding);
    }

    fn restore_state(&mut self, saved: Option<&[u8]>) {
        let Some(bytes) = saved else { return };
        if let Ok(state) = serde_json::from_slice::<ClipState>(bytes) {
            self.path = state.path;
        }
    }

    fn build_view(&mut self, container: &mut ViewContainer) {
        let content = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        container.replace(RenderedView {
            kind: FieldKind::AudioClip,
            mode: ViewMode::Edit,
            content,
        });
    }

    fn on_focus_lost(&mut self) {}

    fn on_done(&mut self, field: &mut Field) {
        *field = Field::AudioClip {
            path: self.path.clone(),
        };
    }

    fn on_destroy(&mut self) {}

    fn save_state(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&ClipState {
            path: self.path.clone(),
        })
        .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldedit_types::NoteContext;
    use uuid::Uuid;

    #[test]
    fn picked_clip_is_committed_on_done() {
        let mut controller = MediaClipController::new();
        controller.bind(ControllerBinding {
            field: Field::empty(FieldKind::AudioClip),
            field_index: 0,
            note: NoteContext::new(Uuid::nil(), 1),
        });
        controller.set_clip_path("/music/loop.mp3");

        let mut field = Field::empty(FieldKind::AudioClip);
        controller.on_done(&mut field);
        assert_eq!(field, Field::audio_clip("/music/loop.mp3"));
    }
}
