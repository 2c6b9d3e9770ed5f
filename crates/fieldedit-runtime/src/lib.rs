//! fieldedit-runtime - the screen controller.
//!
//! [`ScreenController`] owns the current field, the recreation orchestrator
//! and the cached transition requests, and routes every host event (menu
//! action, permission outcome, back navigation, external field change)
//! through the single transition path. Host-facing effects leave the screen
//! as typed [`ScreenSignal`]s rather than direct platform calls.

pub mod error;
pub mod menu;
pub mod screen;
pub mod signal;

pub use error::{Error, Result};
pub use menu::MenuAction;
pub use screen::ScreenController;
pub use signal::{Notice, ScreenSignal};
