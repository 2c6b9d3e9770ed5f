use fieldedit_types::{Field, LaunchRequest, NoteContext};
use uuid::Uuid;

/// A two-field note context with a fixed id.
pub fn test_note() -> NoteContext {
    NoteContext::new(Uuid::nil(), 2)
}

/// A launch request for `field` at index 0 of the test note.
pub fn launch_for(field: Field) -> LaunchRequest {
    LaunchRequest::new(0, field, test_note())
}
