use crate::error::{Error, Result};
use crate::menu::MenuAction;
use crate::signal::{Notice, ScreenSignal};
use fieldedit_engine::{
    CapabilityGate, CaptureHandle, PermissionHost, PermissionOutcome, RecreationOrchestrator,
    RenderedView, RequestTag, TransitionOutcome, TransitionState,
};
use fieldedit_types::{
    Field, FieldKind, IMAGE_SIZE_LIMIT, LaunchRequest, NoteContext, SavedScreenState,
    ScreenResult, TransitionReason, TransitionRequest,
};
use std::collections::VecDeque;

enum FinalizeCheck {
    Proceed,
    Discard,
    Oversize { size_ratio: f64 },
}

/// The editor screen.
///
/// Owns the current field, the recreation orchestrator and the cached
/// transition requests, and routes every host event through the single
/// transition path. The cached "last request" slot is what an asynchronous
/// permission outcome resumes; a second slot keeps the request that
/// preceded it so a denied external change can revert.
pub struct ScreenController {
    field: Field,
    field_index: usize,
    note: NoteContext,
    orchestrator: RecreationOrchestrator,
    capture: CaptureHandle,
    last_request: Option<TransitionRequest>,
    previous_request: Option<TransitionRequest>,
    pending_restore: Option<Vec<u8>>,
    pending_oversize: bool,
    state: TransitionState,
    signals: VecDeque<ScreenSignal>,
    closed: bool,
}

impl ScreenController {
    /// Construct the screen and run its initial transition.
    ///
    /// Fails on a malformed launch payload, and on a restore that carries
    /// the shut-off marker without controller state (resuming would land in
    /// an inconsistent mid-transition state, so the screen aborts instead).
    /// The caller maps either failure to a cancellation result.
    pub fn launch(
        launch: LaunchRequest,
        saved: Option<SavedScreenState>,
        permissions: Box<dyn PermissionHost>,
        capture: CaptureHandle,
    ) -> Result<ScreenController> {
        if launch.field_index >= launch.note.field_count {
            return Err(Error::Launch(format!(
                "field index {} out of range for note with {} fields",
                launch.field_index, launch.note.field_count
            )));
        }

        let pending_restore = match saved {
            Some(state) if state.shut_off && state.controller_state.is_none() => {
                tracing::info!("restore carries shut-off marker without controller state, aborting");
                return Err(Error::StaleRestore);
            }
            Some(state) => state.controller_state,
            None => None,
        };

        let mut screen = ScreenController {
            field: launch.field.clone(),
            field_index: launch.field_index,
            note: launch.note,
            orchestrator: RecreationOrchestrator::new(
                CapabilityGate::new(permissions),
                capture.clone(),
            ),
            capture,
            last_request: None,
            previous_request: None,
            pending_restore,
            pending_oversize: false,
            state: TransitionState::Pending,
            signals: VecDeque::new(),
            closed: false,
        };

        screen.submit(TransitionRequest::initial_load(launch.field));
        if let Some(uri) = launch.image_edit_uri {
            screen.orchestrator.mark_direct_image_edit();
            screen.submit(TransitionRequest::external_change(Field::image(uri)));
        }
        Ok(screen)
    }

    /// Route a menu selection.
    pub fn handle_menu(&mut self, action: MenuAction) {
        if self.closed {
            return;
        }
        match action {
            MenuAction::Commit => self.commit(),
            switch => {
                let Some(kind) = switch.target_kind() else { return };
                if kind != self.field.kind() {
                    self.submit(TransitionRequest::menu_change(Field::empty(kind)));
                }
            }
        }
    }

    /// A field change pushed from outside the screen.
    pub fn handle_external_field_change(&mut self, field: Field) {
        if self.closed {
            return;
        }
        self.submit(TransitionRequest::external_change(field));
    }

    /// Asynchronous permission outcome delivered by the host.
    pub fn handle_permission_outcome(&mut self, outcome: PermissionOutcome) {
        if self.closed {
            return;
        }
        let Some(last) = self.last_request.clone() else {
            self.internal_consistency_failure(
                "permission outcome arrived with no cached transition request",
            );
            return;
        };

        match outcome.tag {
            RequestTag::RecordAudio => {
                if outcome.granted {
                    // The cached request's check flag is already cleared, so
                    // re-running it proceeds straight to commit.
                    self.run(last);
                    return;
                }
                match last.reason() {
                    TransitionReason::InitialLoad => {
                        self.push(ScreenSignal::Notice(Notice::AudioPermissionRefused));
                        self.abort();
                    }
                    // Stay on the current variant, silently.
                    TransitionReason::MenuChange => {
                        self.state = TransitionState::Committed;
                    }
                    TransitionReason::ExternalChange => {
                        self.push(ScreenSignal::Notice(Notice::AudioPermissionRefused));
                        let Some(previous) = self.previous_request.take() else {
                            self.internal_consistency_failure(
                                "denied external change has no prior request to revert to",
                            );
                            return;
                        };
                        self.run(previous);
                    }
                }
            }
            RequestTag::Camera => {
                if !outcome.granted {
                    self.push(ScreenSignal::Notice(Notice::CameraPermissionRefused));
                }
                // Cosmetic: only the image capture view's affordance is
                // affected. A suspended gated transition keeps waiting for
                // its own outcome, and a request parked by a denial is
                // never revived.
                if self.state == TransitionState::Committed
                    && last.field().kind() == FieldKind::Image
                {
                    self.run(last);
                }
            }
        }
    }

    /// Toolbar back navigation.
    ///
    /// With the audio capture UI active this routes through the explicit
    /// done path (a live recording may need stopping first); otherwise it
    /// finalizes immediately.
    pub fn back(&mut self) {
        if self.closed {
            return;
        }
        if self.orchestrator.audio_ui_active() {
            self.commit();
        } else {
            self.finalize();
        }
    }

    /// Flush pending edits and produce the screen's result.
    ///
    /// Missing media degrades silently to a discarded payload; an oversize
    /// image suspends for a crop confirmation instead of completing.
    pub fn finalize(&mut self) {
        if self.closed {
            return;
        }
        let mut field = self.field.clone();
        self.orchestrator.flush_edits(&mut field);
        self.field = field;

        match self.finalize_check() {
            FinalizeCheck::Proceed => self.exit_saved(false),
            FinalizeCheck::Discard => self.exit_saved(true),
            FinalizeCheck::Oversize { size_ratio } => {
                tracing::debug!(size_ratio, "image over limit, suspending finalize");
                self.pending_oversize = true;
                self.push(ScreenSignal::CropConfirmationRequested { size_ratio });
            }
        }
    }

    /// Media checks ahead of the commit. Missing media is never an error:
    /// the payload is discarded and finalize continues as if the variant
    /// were text.
    fn finalize_check(&self) -> FinalizeCheck {
        match &self.field {
            Field::Image { path } => match path {
                None => FinalizeCheck::Discard,
                Some(path) => match std::fs::metadata(path) {
                    Err(_) => FinalizeCheck::Discard,
                    Ok(metadata) if metadata.len() > IMAGE_SIZE_LIMIT => {
                        FinalizeCheck::Oversize {
                            size_ratio: metadata.len() as f64 / IMAGE_SIZE_LIMIT as f64,
                        }
                    }
                    Ok(_) => FinalizeCheck::Proceed,
                },
            },
            Field::AudioRecording { path } if self.capture.borrow().is_recording_saved() => {
                match path {
                    Some(path) if path.exists() => FinalizeCheck::Proceed,
                    _ => FinalizeCheck::Discard,
                }
            }
            _ => FinalizeCheck::Proceed,
        }
    }

    /// Host reports the user's choice for a suspended oversize finalize.
    /// Proceeding completes the commit; declining stays in the editor.
    pub fn resolve_crop_confirmation(&mut self, proceed: bool) {
        if self.closed || !self.pending_oversize {
            return;
        }
        self.pending_oversize = false;
        if proceed {
            self.exit_saved(false);
        }
    }

    /// The host is pausing the screen (focus moved elsewhere).
    pub fn on_pause(&mut self) {
        if self.closed {
            return;
        }
        self.orchestrator.on_pause();
    }

    /// The host is tearing the screen down for good.
    pub fn on_destroy(&mut self) {
        self.orchestrator.shutdown();
    }

    /// Snapshot for a forced teardown. The shut-off marker is always
    /// written; the controller blob rides along when one exists.
    pub fn save_instance_state(&self) -> SavedScreenState {
        SavedScreenState::new(self.orchestrator.save_controller_state())
    }

    /// Drain pending host-facing effects, in delivery order.
    pub fn drain_signals(&mut self) -> Vec<ScreenSignal> {
        self.signals.drain(..).collect()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_kind(&self) -> FieldKind {
        self.field.kind()
    }

    pub fn visible_menu_actions(&self) -> Vec<MenuAction> {
        MenuAction::visible_for(self.field.kind())
    }

    pub fn rendered_view(&self) -> Option<&RenderedView> {
        self.orchestrator.rendered_view()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Cache rotation for a fresh trigger, then run it. While a gated
    /// request is awaiting its outcome, a repeat trigger for the same
    /// variant is dropped: re-running the cached request would skip the
    /// gate, and a fresh one would prompt twice.
    fn submit(&mut self, request: TransitionRequest) {
        if self.state == TransitionState::AwaitingPermission
            && self
                .last_request
                .as_ref()
                .is_some_and(|r| r.field().kind() == request.field().kind())
        {
            tracing::debug!("transition already awaiting permission for this variant, ignoring");
            return;
        }
        self.previous_request = self.last_request.take();
        self.run(request);
    }

    fn run(&mut self, mut request: TransitionRequest) {
        let outcome = self.orchestrator.transition(
            &mut request,
            self.field_index,
            &self.note,
            &mut self.pending_restore,
        );
        match outcome {
            TransitionOutcome::AwaitingPermission => {
                self.state = TransitionState::AwaitingPermission;
                self.last_request = Some(request);
            }
            TransitionOutcome::Committed { refresh_menu } => {
                self.state = TransitionState::Committed;
                self.field = request.field().clone();
                self.last_request = Some(request);
                if refresh_menu {
                    self.push(ScreenSignal::MenuRefreshRequested);
                }
            }
        }
    }

    /// Stop a live recording, then finalize.
    fn commit(&mut self) {
        if self.orchestrator.audio_ui_active() && self.capture.borrow().is_recording() {
            self.capture.borrow_mut().stop_and_save();
        }
        self.finalize();
    }

    fn exit_saved(&mut self, discard: bool) {
        let field = if discard {
            None
        } else {
            Some(self.field.clone())
        };
        self.close(ScreenResult::Saved {
            field,
            field_index: self.field_index,
        });
    }

    fn abort(&mut self) {
        self.state = TransitionState::Aborted;
        self.close(ScreenResult::Cancelled);
    }

    fn close(&mut self, result: ScreenResult) {
        if self.closed {
            return;
        }
        self.orchestrator.shutdown();
        self.closed = true;
        self.push(ScreenSignal::Closed(result));
    }

    /// Programming-contract violation: logged, generic notice, abort. Never
    /// recovered in place.
    fn internal_consistency_failure(&mut self, message: &str) {
        tracing::error!("{}", message);
        self.push(ScreenSignal::Notice(Notice::EditorFailed));
        self.abort();
    }

    fn push(&mut self, signal: ScreenSignal) {
        self.signals.push_back(signal);
    }
}
