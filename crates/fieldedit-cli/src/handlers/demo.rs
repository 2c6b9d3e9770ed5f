use super::replay::{StaticPermissions, report};
use anyhow::{Context, Result};
use fieldedit_engine::{Capability, NullCapture, share_capture};
use fieldedit_runtime::{MenuAction, ScreenController};
use fieldedit_types::{Field, LaunchRequest, NoteContext};
use uuid::Uuid;

/// A short canned session: open a text field, flip through the variants,
/// commit. Useful to eyeball the signal stream without writing a scenario.
pub fn handle() -> Result<()> {
    let launch = LaunchRequest::new(
        0,
        Field::text("The capital of France"),
        NoteContext::new(Uuid::new_v4(), 2),
    );
    let permissions = StaticPermissions::new([Capability::Microphone, Capability::Camera]);
    let capture = share_capture(NullCapture);

    let mut screen = ScreenController::launch(launch, None, Box::new(permissions), capture)
        .context("launch rejected")?;
    report(&mut screen, true);

    for action in [
        MenuAction::SwitchToImage,
        MenuAction::SwitchToAudioClip,
        MenuAction::SwitchToText,
        MenuAction::Commit,
    ] {
        screen.handle_menu(action);
        report(&mut screen, true);
    }

    Ok(())
}
