use fieldedit_engine::{AudioCapture, CaptureHandle};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Scriptable stand-in for the process-wide audio capture singleton.
///
/// Tests keep the typed `Rc` to script recording state and count focus
/// signals, and hand a coerced clone to the screen via [`FakeCapture::handle`].
#[derive(Debug, Default)]
pub struct FakeCapture {
    pub editor_active: bool,
    pub focus_changes: usize,
    recording: bool,
    save_target: Option<PathBuf>,
    saved: Option<PathBuf>,
}

impl FakeCapture {
    pub fn new() -> Rc<RefCell<FakeCapture>> {
        Rc::new(RefCell::new(FakeCapture::default()))
    }

    pub fn handle(capture: &Rc<RefCell<FakeCapture>>) -> CaptureHandle {
        capture.clone()
    }

    /// Script a live recording that will land at `target` when stopped.
    /// The file is written on stop so finalize's existence check passes.
    pub fn start_recording(&mut self, target: impl Into<PathBuf>) {
        self.recording = true;
        self.save_target = Some(target.into());
    }

    /// Script an already-finished take at `path`. The file itself is the
    /// test's business: leave it missing to exercise the degrade path.
    pub fn script_saved(&mut self, path: impl Into<PathBuf>) {
        self.saved = Some(path.into());
    }
}

impl AudioCapture for FakeCapture {
    fn set_editor_active(&mut self, active: bool) {
        self.editor_active = active;
    }

    fn on_view_focus_changed(&mut self) {
        self.focus_changes += 1;
    }

    fn is_recording(&self) -> bool {
        self.recording
    }

    fn is_recording_saved(&self) -> bool {
        self.saved.is_some()
    }

    fn stop_and_save(&mut self) -> Option<PathBuf> {
        if !self.recording {
            return None;
        }
        self.recording = false;
        let target = self.save_target.take()?;
        let _ = std::fs::write(&target, b"fake-take");
        self.saved = Some(target.clone());
        Some(target)
    }

    fn saved_recording(&self) -> Option<PathBuf> {
        self.saved.clone()
    }
}
