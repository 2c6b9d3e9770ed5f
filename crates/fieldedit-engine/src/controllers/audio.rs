use crate::capture::CaptureHandle;
use crate::container::{RenderedView, ViewContainer, ViewMode};
use crate::controller::{ControllerBinding, FieldController};
use fieldedit_types::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct AudioState {
    path: Option<PathBuf>,
}

/// Audio recording controller.
///
/// Wraps the process-wide capture singleton rather than owning a recorder:
/// capture state survives variant switches, so the controller only tracks
/// the recording path it will commit. Creating the controller marks the
/// capture subsystem as editor-owned.
pub struct AudioRecordingController {
    capture: CaptureHandle,
    path: Option<PathBuf>,
    binding: Option<ControllerBinding>,
}

impl AudioRecordingController {
    pub fn new(capture: CaptureHandle) -> Self {
        capture.borrow_mut().set_editor_active(true);
        Self {
            capture,
            path: None,
            binding: None,
        }
    }

    pub fn recording_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl FieldController for AudioRecordingController {
    fn kind(&self) -> FieldKind {
        FieldKind::AudioRecording
    }

    fn bind(&mut self, binding: ControllerBinding) {
        if let Field::AudioRecording { path } = &binding.field {
            self.path = path.clone();
        }
        self.binding = Some(binding);
    }

    fn restore_state(&mut self, saved: Option<&[u8]>) {
        let Some(bytes) = saved else { return };
        if let Ok(state) = serde_json::from_slice::<AudioState>(bytes) {
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
            kind: FieldKind::AudioRecording,
            mode: ViewMode::Edit,
            content,
        });
    }

    fn on_focus_lost(&mut self) {
        // Capture-level focus handling happens on the shared handle; the
        // orchestrator signals it on every transition.
    }

    fn on_done(&mut self, field: &mut Field) {
        let mut capture = self.capture.borrow_mut();
        if capture.is_recording() {
            if let Some(path) = capture.stop_and_save() {
                self.path = Some(path);
            }
        } else if self.path.is_none() {
            self.path = capture.saved_recording();
        }
        drop(capture);

        *field = Field::AudioRecording {
            path: self.path.clone(),
        };
    }

    fn on_destroy(&mut self) {
        self.capture.borrow_mut().set_editor_active(false);
    }

    fn save_state(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&AudioState {
            path: self.path.clone(),
        })
        .ok()
    }
}
