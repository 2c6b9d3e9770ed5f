use crate::capture::CaptureHandle;
use crate::container::ViewContainer;
use crate::controllers::{
    AudioRecordingController, ImageController, MediaClipController, TextController,
};
use fieldedit_types::{Field, FieldKind, NoteContext};

/// Everything a controller needs at bind time.
#[derive(Debug, Clone)]
pub struct ControllerBinding {
    pub field: Field,
    pub field_index: usize,
    pub note: NoteContext,
}

/// Per-variant editing component.
///
/// One implementation exists per [`FieldKind`]; at most one instance is
/// alive at any time. The outgoing instance receives `on_focus_lost`
/// strictly before its replacement is installed. `on_destroy` is delivered
/// only when the screen itself goes away.
pub trait FieldController {
    fn kind(&self) -> FieldKind;

    /// Attach payload and context. Called once, before any other signal.
    fn bind(&mut self, binding: ControllerBinding);

    /// Restore transient widget state captured by `save_state`.
    fn restore_state(&mut self, saved: Option<&[u8]>);

    /// Mount the editing surface, fully replacing the container's contents.
    /// This is the only operation permitted to mutate the container.
    fn build_view(&mut self, container: &mut ViewContainer);

    /// The surface is about to lose focus. Idempotent; fired on every
    /// transition, including no-op ones.
    fn on_focus_lost(&mut self);

    /// Commit pending in-widget edits back into the bound payload.
    fn on_done(&mut self, field: &mut Field);

    fn on_destroy(&mut self);

    /// Snapshot transient widget state for restoration across teardown.
    fn save_state(&self) -> Option<Vec<u8>>;
}

/// Per-transition construction flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Image variant: open directly in edit/crop mode instead of capture
    /// mode (external "edit this image" trigger).
    pub direct_image_edit: bool,
}

/// Pure mapping from variant to controller.
///
/// The audio variant receives the shared capture handle; every other
/// variant is self-contained.
pub fn controller_for_kind(
    kind: FieldKind,
    capture: &CaptureHandle,
    options: BuildOptions,
) -> Box<dyn FieldController> {
    match kind {
        FieldKind::Text => Box::new(TextController::new()),
        FieldKind::Image => {
            let mut controller = ImageController::new();
            if options.direct_image_edit {
                controller.mark_direct_edit();
            }
            Box::new(controller)
        }
        FieldKind::AudioRecording => {
            Box::new(AudioRecordingController::new(capture.clone()))
        }
        FieldKind::AudioClip => Box::new(MediaClipController::new()),
    }
}
