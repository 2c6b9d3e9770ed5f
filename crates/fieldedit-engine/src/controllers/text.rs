use crate::container::{RenderedView, ViewContainer, ViewMode};
use crate::controller::{ControllerBinding, FieldController};
use fieldedit_types::{Field, FieldKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct TextState {
    buffer: String,
}

/// Plain-text editing controller.
///
/// The buffer is the transient state: it may diverge from the bound payload
/// while the user types and is only committed back on `on_done`.
#[derive(Debug, Default)]
pub struct TextController {
    buffer: String,
    binding: Option<ControllerBinding>,
}

impl TextController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget input: replace the buffer contents.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl FieldController for TextController {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn bind(&mut self, binding: ControllerBinding) {
        if let Field::Text { text } = &binding.field {
            self.buffer = text.clone();
        }
        self.binding = Some(binding);
    }

    fn restore_state(&mut self, saved: Option<&[u8]>) {
        let Some(bytes) = saved else { return };
        if let Ok(state) = serde_json::from_slice::<TextState>(bytes) {
            self.buffer = state.buffer;
        }
    }

    fn build_view(&mut self, container: &mut ViewContainer) {
        container.replace(RenderedView {
            kind: FieldKind::Text,
            mode: ViewMode::Edit,
            content: self.buffer.clone(),
        });
    }

    fn on_focus_lost(&mut self) {}

    fn on_done(&mut self, field: &mut Field) {
        *field = Field::Text {
            text: self.buffer.clone(),
        };
    }

    fn on_destroy(&mut self) {}

    fn save_state(&self) -> Option<Vec<u8>> {
        serde_json::to_vec(&TextState {
            buffer: self.buffer.clone(),
        })
        .ok()
    }
}
