use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// The process-wide audio capture subsystem.
///
/// Capture state outlives any single controller: a recording started under
/// the audio variant keeps running while the screen transitions elsewhere,
/// so the orchestrator signals focus changes on this handle on every
/// transition, not only when the outgoing variant was audio.
pub trait AudioCapture {
    /// The editing screen took (or released) ownership of the capture UI.
    fn set_editor_active(&mut self, active: bool);

    /// The visible surface is losing focus.
    fn on_view_focus_changed(&mut self);

    fn is_recording(&self) -> bool;

    /// A finished recording exists on disk.
    fn is_recording_saved(&self) -> bool;

    /// Stop an in-progress recording and persist it, returning the file
    /// path of the saved recording.
    fn stop_and_save(&mut self) -> Option<PathBuf>;

    /// Path of the most recently saved recording, if any.
    fn saved_recording(&self) -> Option<PathBuf>;
}

/// Shared handle to the capture singleton. The screen runs on a single
/// logical thread, so interior mutability is enough.
pub type CaptureHandle = Rc<RefCell<dyn AudioCapture>>;

pub fn share_capture<C: AudioCapture + 'static>(capture: C) -> CaptureHandle {
    Rc::new(RefCell::new(capture))
}

/// Capture subsystem that never records. Used where no audio hardware is
/// wired up (headless replay, hosts without a recorder).
#[derive(Debug, Default)]
pub struct NullCapture;

impl AudioCapture for NullCapture {
    fn set_editor_active(&mut self, _active: bool) {}

    fn on_view_focus_changed(&mut self) {}

    fn is_recording(&self) -> bool {
        false
    }

    fn is_recording_saved(&self) -> bool {
        false
    }

    fn stop_and_save(&mut self) -> Option<PathBuf> {
        None
    }

    fn saved_recording(&self) -> Option<PathBuf> {
        None
    }
}
