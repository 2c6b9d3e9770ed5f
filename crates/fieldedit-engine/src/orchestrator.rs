use crate::capture::CaptureHandle;
use crate::container::{RenderedView, ViewContainer};
use crate::controller::{BuildOptions, ControllerBinding, FieldController, controller_for_kind};
use crate::gate::{CapabilityGate, GateDecision};
use fieldedit_types::{Field, FieldKind, NoteContext, TransitionReason, TransitionRequest};

/// Lifecycle of a transition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Pending,
    AwaitingPermission,
    Committed,
    Aborted,
}

/// Immediate result of running the transition protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The new controller is bound and rendered. `refresh_menu` is raised
    /// for menu-driven and external changes, never for the initial load.
    Committed { refresh_menu: bool },
    /// A permission request was issued; the transition resumes when its
    /// outcome is delivered.
    AwaitingPermission,
}

/// The state machine executing variant switches.
///
/// Owns the single visible container and the single live controller. Every
/// transition trigger funnels through [`transition`](Self::transition):
/// teardown of the outgoing controller, the capability gate, and
/// construction of the incoming controller all happen on this one path, so
/// re-entrant triggers cannot race or build two controllers.
pub struct RecreationOrchestrator {
    gate: CapabilityGate,
    capture: CaptureHandle,
    container: ViewContainer,
    controller: Option<Box<dyn FieldController>>,
    audio_ui_active: bool,
    direct_image_edit: bool,
    camera_requested: bool,
}

impl RecreationOrchestrator {
    pub fn new(gate: CapabilityGate, capture: CaptureHandle) -> Self {
        Self {
            gate,
            capture,
            container: ViewContainer::new(),
            controller: None,
            audio_ui_active: false,
            direct_image_edit: false,
            camera_requested: false,
        }
    }

    /// The next image commit opens directly in edit/crop mode. One-shot,
    /// consumed by the commit it applies to.
    pub fn mark_direct_image_edit(&mut self) {
        self.direct_image_edit = true;
    }

    /// Run the transition protocol for `request`.
    ///
    /// `saved_state` is the controller blob recovered from a forced
    /// teardown; it is consumed by the first commit. The request's
    /// permission flag is flipped here when a request is issued, which is
    /// what makes re-entry with the same request idempotent.
    pub fn transition(
        &mut self,
        request: &mut TransitionRequest,
        field_index: usize,
        note: &NoteContext,
        saved_state: &mut Option<Vec<u8>>,
    ) -> TransitionOutcome {
        let kind = request.field().kind();
        tracing::debug!(?kind, reason = ?request.reason(), "transition");

        // Teardown precursor. Runs on every transition, including no-op
        // ones: capture state is process-wide, so the singleton is signaled
        // regardless of which variant is going away.
        if self.audio_ui_active {
            self.capture.borrow_mut().on_view_focus_changed();
        }
        if let Some(controller) = &mut self.controller {
            controller.on_focus_lost();
        }

        // Capability gate. Skipped on re-entry: the flag was cleared when
        // the request was issued, so the same request cannot prompt twice.
        if request.permission_check_pending()
            && self.gate.requires_check(kind)
            && self.gate.request_if_needed(kind) == GateDecision::Requested
        {
            request.mark_permission_requested();
            return TransitionOutcome::AwaitingPermission;
        }

        // Commit.
        let options = BuildOptions {
            direct_image_edit: kind == FieldKind::Image
                && std::mem::take(&mut self.direct_image_edit),
        };
        let mut controller = controller_for_kind(kind, &self.capture, options);
        if kind == FieldKind::AudioRecording {
            self.audio_ui_active = true;
        }
        if kind == FieldKind::Image && !options.direct_image_edit && !self.camera_requested {
            // Capture mode shows a camera affordance whose visibility
            // depends on the (ungating) camera capability. One request per
            // screen: a rebuild after denial must not prompt again.
            self.camera_requested = self.gate.request_camera_if_needed();
        }

        controller.bind(ControllerBinding {
            field: request.field().clone(),
            field_index,
            note: note.clone(),
        });
        if let Some(blob) = saved_state.take() {
            controller.restore_state(Some(&blob));
        }
        controller.build_view(&mut self.container);
        self.controller = Some(controller);

        let refresh_menu = matches!(
            request.reason(),
            TransitionReason::MenuChange | TransitionReason::ExternalChange
        );
        TransitionOutcome::Committed { refresh_menu }
    }

    /// Forward a host pause to the capture singleton.
    pub fn on_pause(&mut self) {
        if self.audio_ui_active {
            self.capture.borrow_mut().on_view_focus_changed();
        }
    }

    /// Flush pending in-widget edits into `field` via the live controller.
    pub fn flush_edits(&mut self, field: &mut Field) {
        if let Some(controller) = &mut self.controller {
            controller.on_done(field);
        }
    }

    /// Snapshot the live controller's transient state.
    pub fn save_controller_state(&self) -> Option<Vec<u8>> {
        self.controller.as_ref().and_then(|c| c.save_state())
    }

    /// Tear the screen down: destroy the controller and empty the container.
    pub fn shutdown(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.on_destroy();
        }
        self.container.clear();
    }

    pub fn audio_ui_active(&self) -> bool {
        self.audio_ui_active
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    pub fn rendered_view(&self) -> Option<&RenderedView> {
        self.container.view()
    }
}
