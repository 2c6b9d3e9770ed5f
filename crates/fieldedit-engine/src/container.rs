use fieldedit_types::FieldKind;

/// Presentation mode of a mounted editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Regular editing surface for the variant.
    Edit,
    /// Image variant only: capture-first surface (camera affordance).
    Capture,
}

/// Description of the currently mounted editing surface.
///
/// The concrete widgets are external collaborators; what the engine tracks
/// is which variant is mounted, in which mode, and a summary of the content
/// it is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub kind: FieldKind,
    pub mode: ViewMode,
    pub content: String,
}

/// The single visible container the active controller renders into.
///
/// `replace` is the only mutation path and discards prior contents
/// wholesale; two controllers can never be rendered side by side.
#[derive(Debug, Default)]
pub struct ViewContainer {
    view: Option<RenderedView>,
}

impl ViewContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, view: RenderedView) {
        self.view = Some(view);
    }

    pub fn clear(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<&RenderedView> {
        self.view.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_none()
    }
}
