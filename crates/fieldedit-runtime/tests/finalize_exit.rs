use fieldedit_engine::{AudioCapture, Capability};
use fieldedit_runtime::{MenuAction, ScreenController, ScreenSignal};
use fieldedit_testing::fields::launch_for;
use fieldedit_testing::{FakeCapture, MediaDir, ScriptedPermissions};
use fieldedit_types::{Field, FieldKind, ScreenResult};
use std::cell::RefCell;
use std::rc::Rc;

fn launch_screen(
    field: Field,
    permissions: &ScriptedPermissions,
    capture: &Rc<RefCell<FakeCapture>>,
) -> ScreenController {
    ScreenController::launch(
        launch_for(field),
        None,
        Box::new(permissions.clone()),
        FakeCapture::handle(capture),
    )
    .unwrap()
}

fn closed_result(signals: &[ScreenSignal]) -> Option<&ScreenResult> {
    signals.iter().find_map(|signal| match signal {
        ScreenSignal::Closed(result) => Some(result),
        _ => None,
    })
}

#[test]
fn text_finalize_commits_the_field() {
    let permissions = ScriptedPermissions::new();
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::text("final text"), &permissions, &capture);

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::text("final text")),
            field_index: 0,
        })
    );
}

#[test]
fn image_with_no_path_degrades_to_a_discarded_payload() {
    let permissions = ScriptedPermissions::with_granted(&[Capability::Camera]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::empty(FieldKind::Image), &permissions, &capture);

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: None,
            field_index: 0,
        })
    );
}

#[test]
fn image_with_a_missing_file_degrades_to_a_discarded_payload() {
    let media = MediaDir::new().unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Camera]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(
        Field::image(media.missing("gone.png")),
        &permissions,
        &capture,
    );

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: None,
            field_index: 0,
        })
    );
}

#[test]
fn image_at_the_size_limit_finalizes_directly() {
    let media = MediaDir::new().unwrap();
    let path = media.image_at_limit("at.png").unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Camera]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::image(&path), &permissions, &capture);

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::image(&path)),
            field_index: 0,
        })
    );
}

#[test]
fn oversize_image_suspends_for_confirmation_then_proceeds() {
    let media = MediaDir::new().unwrap();
    let path = media.oversize_image("big.png").unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Camera]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::image(&path), &permissions, &capture);

    screen.finalize();
    assert!(!screen.is_closed());

    let signals = screen.drain_signals();
    let ratio = signals
        .iter()
        .find_map(|signal| match signal {
            ScreenSignal::CropConfirmationRequested { size_ratio } => Some(*size_ratio),
            _ => None,
        })
        .expect("finalize should suspend on an oversize image");
    assert!(ratio > 1.0);

    screen.resolve_crop_confirmation(true);
    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::image(&path)),
            field_index: 0,
        })
    );
}

#[test]
fn declining_the_confirmation_stays_in_the_editor() {
    let media = MediaDir::new().unwrap();
    let path = media.oversize_image("big.png").unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Camera]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::image(&path), &permissions, &capture);

    screen.finalize();
    screen.resolve_crop_confirmation(false);

    assert!(!screen.is_closed());
    assert_eq!(screen.field_kind(), FieldKind::Image);
    assert!(closed_result(&screen.drain_signals()).is_none());
}

#[test]
fn saved_recording_with_a_missing_file_degrades_to_a_discarded_payload() {
    let media = MediaDir::new().unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Microphone]);
    let capture = FakeCapture::new();
    capture
        .borrow_mut()
        .script_saved(media.missing("vanished.wav"));
    let mut screen = launch_screen(
        Field::empty(FieldKind::AudioRecording),
        &permissions,
        &capture,
    );

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: None,
            field_index: 0,
        })
    );
}

#[test]
fn saved_recording_with_an_existing_file_is_committed() {
    let media = MediaDir::new().unwrap();
    let take = media.file("take.wav", 64).unwrap();
    let permissions = ScriptedPermissions::with_granted(&[Capability::Microphone]);
    let capture = FakeCapture::new();
    capture.borrow_mut().script_saved(&take);
    let mut screen = launch_screen(
        Field::empty(FieldKind::AudioRecording),
        &permissions,
        &capture,
    );

    screen.finalize();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::audio_recording(&take)),
            field_index: 0,
        })
    );
}

#[test]
fn commit_stops_a_live_recording_before_finalizing() {
    let media = MediaDir::new().unwrap();
    let target = media.missing("live.wav");
    let permissions = ScriptedPermissions::with_granted(&[Capability::Microphone]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(
        Field::empty(FieldKind::AudioRecording),
        &permissions,
        &capture,
    );
    capture.borrow_mut().start_recording(&target);

    screen.handle_menu(MenuAction::Commit);

    assert!(!capture.borrow().is_recording());
    assert!(target.exists());
    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::audio_recording(&target)),
            field_index: 0,
        })
    );
}

#[test]
fn back_finalizes_immediately_when_no_capture_ui_is_active() {
    let permissions = ScriptedPermissions::new();
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::text("going back"), &permissions, &capture);

    screen.back();

    let signals = screen.drain_signals();
    assert_eq!(
        closed_result(&signals),
        Some(&ScreenResult::Saved {
            field: Some(Field::text("going back")),
            field_index: 0,
        })
    );
}

#[test]
fn back_routes_through_done_while_the_capture_ui_is_active() {
    let media = MediaDir::new().unwrap();
    let target = media.missing("backed.wav");
    let permissions = ScriptedPermissions::with_granted(&[Capability::Microphone]);
    let capture = FakeCapture::new();
    let mut screen = launch_screen(
        Field::empty(FieldKind::AudioRecording),
        &permissions,
        &capture,
    );
    capture.borrow_mut().start_recording(&target);

    screen.back();

    assert!(!capture.borrow().is_recording());
    assert!(screen.is_closed());
}

#[test]
fn events_after_close_are_ignored() {
    let permissions = ScriptedPermissions::new();
    let capture = FakeCapture::new();
    let mut screen = launch_screen(Field::text("done"), &permissions, &capture);

    screen.finalize();
    screen.drain_signals();

    screen.handle_menu(MenuAction::SwitchToImage);
    screen.finalize();
    assert!(screen.drain_signals().is_empty());
}
