use crate::container::{RenderedView, ViewContainer, ViewMode};
use crate::controller::{ControllerBinding, FieldController};
use fieldedit_types::{Field, FieldKind};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ImageState {
    path: Option<PathBuf>,
    direct_edit: bool,
}

/// Image editing controller.
///
/// Opens in capture mode by default; an external "edit this image" launch
/// marks it to open directly in edit/crop mode instead.
#[derive(Debug, Default)]
pub struct ImageController {
    path: Option<PathBuf>,
    direct_edit: bool,
    binding: Option<ControllerBinding>,
}

impl ImageController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip capture mode and open on the bound image for cropping.
    pub fn mark_direct_edit(&mut self) {
        self.direct_edit = true;
    }

    /// Widget input: a captured or picked image landed on disk.
    pub fn set_image_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn image_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl FieldController for ImageController {
    fn kind(&self) -> FieldKind {
        FieldKind::Image
    }

    fn bind(&mut self, binding: ControllerBinding) {
        if let Field::Image { path } = &binding.field {
            self.path = path.clone();
        }
        self.binding = Some(binding);
    }

    fn restore_state(&mut self, saved: Option<&[u8]>) {
        let Some(bytes) = saved else { return };
        if let Ok(state) = serde_json::from_slice::<ImageState>(bytes) {
            self.path = state.path;
            self.direct_edit = state.direct_edit;
        }
    }

    fn build_view(&mut self, container: &mut ViewContainer) {
        let mode = if self.direct_edit {
            ViewMode::Edit
        } else {
            ViewMode::Capture
        };
        let content = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        container.replace(RenderedView {
            kind: FieldKind::Image,
            mode,
            content,
        });
    }

    fn on_focus_lost(&mut self) {}

    fn on_done(&mut self, field: &mut Field) {
        *field = Field::Image {
            path: self.path.clone(),
        };
    }

    fn on_destroy(&mut self) {}

    fn save_state(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&ImageState {
            path: self.path.clone(),
            direct_edit: self.direct_edit,
        })
        .ok()
    }
}
