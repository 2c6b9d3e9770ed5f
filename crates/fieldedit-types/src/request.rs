use crate::field::Field;

/// Why a transition was triggered.
///
/// The reason decides whether the menu surface is refreshed after commit and
/// how a permission denial is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// First transition when the screen is created.
    InitialLoad,
    /// A change selected from the menu. Cancellable.
    MenuChange,
    /// A change pushed from outside the screen. Reverts on denial.
    ExternalChange,
}

/// A single attempt to switch the screen to a new field variant.
///
/// Cached by the screen as its "last request" so an asynchronous permission
/// outcome can resume the exact attempt that triggered it. The
/// permission-check flag is the one deliberate piece of mutable state per
/// request: it starts true and is cleared exactly once, when a permission
/// request has been issued on behalf of this attempt. Re-entry with the same
/// request therefore skips the check branch and cannot prompt twice.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    field: Field,
    reason: TransitionReason,
    permission_check_pending: bool,
}

impl TransitionRequest {
    fn new(field: Field, reason: TransitionReason) -> Self {
        Self {
            field,
            reason,
            permission_check_pending: true,
        }
    }

    /// Initial request when the screen is created.
    pub fn initial_load(field: Field) -> Self {
        Self::new(field, TransitionReason::InitialLoad)
    }

    /// A change in variant via the menu options.
    pub fn menu_change(field: Field) -> Self {
        Self::new(field, TransitionReason::MenuChange)
    }

    /// A change in variant pushed from outside the screen.
    pub fn external_change(field: Field) -> Self {
        Self::new(field, TransitionReason::ExternalChange)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn reason(&self) -> TransitionReason {
        self.reason
    }

    pub fn permission_check_pending(&self) -> bool {
        self.permission_check_pending
    }

    /// Record that a permission request has been issued for this attempt.
    pub fn mark_permission_requested(&mut self) {
        self.permission_check_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn fresh_requests_have_the_check_pending() {
        let request = TransitionRequest::menu_change(Field::empty(FieldKind::AudioRecording));
        assert!(request.permission_check_pending());
        assert_eq!(request.reason(), TransitionReason::MenuChange);
    }

    #[test]
    fn marking_clears_the_pending_flag() {
        let mut request = TransitionRequest::initial_load(Field::empty(FieldKind::AudioRecording));
        request.mark_permission_requested();
        assert!(!request.permission_check_pending());
    }
}
