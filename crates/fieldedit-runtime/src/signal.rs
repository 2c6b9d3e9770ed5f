use fieldedit_types::ScreenResult;
use std::fmt;

/// User-visible transient notices. Presentation mechanics stay with the
/// host; the screen only decides that a notice is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AudioPermissionRefused,
    CameraPermissionRefused,
    /// Generic notice for internal-consistency failures.
    EditorFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AudioPermissionRefused => {
                write!(f, "Recording permission was refused")
            }
            Notice::CameraPermissionRefused => {
                write!(f, "Camera permission was refused")
            }
            Notice::EditorFailed => write!(f, "The editor failed unexpectedly"),
        }
    }
}

/// Host-facing effects emitted by the screen, drained in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenSignal {
    Notice(Notice),
    /// Transition-availability affordances (menu item visibility) went
    /// stale and need a refresh.
    MenuRefreshRequested,
    /// Finalize is suspended on an oversize image; the host must present a
    /// crop/resize-or-proceed confirmation and report the choice back via
    /// `resolve_crop_confirmation`.
    CropConfirmationRequested { size_ratio: f64 },
    /// The screen is done; no further events are accepted.
    Closed(ScreenResult),
}
