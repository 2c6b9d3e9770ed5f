use fieldedit_types::FieldKind;

/// Actions on the screen's menu surface: one switch per variant plus the
/// commit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SwitchToText,
    SwitchToImage,
    SwitchToAudioRecording,
    SwitchToAudioClip,
    Commit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::SwitchToText,
        MenuAction::SwitchToImage,
        MenuAction::SwitchToAudioRecording,
        MenuAction::SwitchToAudioClip,
        MenuAction::Commit,
    ];

    /// The variant a switch action targets; `None` for commit.
    pub fn target_kind(&self) -> Option<FieldKind> {
        match self {
            MenuAction::SwitchToText => Some(FieldKind::Text),
            MenuAction::SwitchToImage => Some(FieldKind::Image),
            MenuAction::SwitchToAudioRecording => Some(FieldKind::AudioRecording),
            MenuAction::SwitchToAudioClip => Some(FieldKind::AudioClip),
            MenuAction::Commit => None,
        }
    }

    /// Switch actions are hidden for the currently active variant.
    pub fn visible_for(current: FieldKind) -> Vec<MenuAction> {
        Self::ALL
            .into_iter()
            .filter(|action| action.target_kind() != Some(current))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_variant_switch_is_hidden() {
        let visible = MenuAction::visible_for(FieldKind::Image);
        assert!(!visible.contains(&MenuAction::SwitchToImage));
        assert!(visible.contains(&MenuAction::SwitchToText));
        assert!(visible.contains(&MenuAction::SwitchToAudioRecording));
        assert!(visible.contains(&MenuAction::SwitchToAudioClip));
        assert!(visible.contains(&MenuAction::Commit));
    }

    #[test]
    fn commit_is_always_visible() {
        for kind in FieldKind::ALL {
            assert!(MenuAction::visible_for(kind).contains(&MenuAction::Commit));
        }
    }
}
