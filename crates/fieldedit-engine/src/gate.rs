use fieldedit_types::FieldKind;

/// Runtime capabilities owned by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Microphone,
    Camera,
}

/// Tag distinguishing asynchronous permission requests when their outcomes
/// arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTag {
    /// Gates the audio-recording variant.
    RecordAudio,
    /// Cosmetic: only adjusts capture-affordance visibility, never gates a
    /// transition.
    Camera,
}

/// Asynchronous outcome of a permission request, delivered as an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionOutcome {
    pub tag: RequestTag,
    pub granted: bool,
}

/// Platform permission surface.
///
/// Grant state is owned by the platform and read per check, never cached.
/// `request` is asynchronous: the matching [`PermissionOutcome`] arrives as
/// a later event, strictly after the request that caused it.
pub trait PermissionHost {
    fn is_granted(&self, capability: Capability) -> bool;
    fn request(&mut self, tag: RequestTag, capability: Capability);
}

/// What the gate did about a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Capability already granted or not required; proceed.
    NotNeeded,
    /// A request was issued; suspend until its outcome arrives.
    Requested,
}

/// Decides whether a transition needs a runtime permission and issues the
/// request when it does.
pub struct CapabilityGate {
    host: Box<dyn PermissionHost>,
}

impl CapabilityGate {
    pub fn new(host: Box<dyn PermissionHost>) -> Self {
        Self { host }
    }

    /// True only for the audio-recording variant while the microphone
    /// capability is not currently granted.
    pub fn requires_check(&self, kind: FieldKind) -> bool {
        kind == FieldKind::AudioRecording && !self.host.is_granted(Capability::Microphone)
    }

    pub fn request_if_needed(&mut self, kind: FieldKind) -> GateDecision {
        if !self.requires_check(kind) {
            return GateDecision::NotNeeded;
        }
        tracing::debug!("requesting microphone capability");
        self.host.request(RequestTag::RecordAudio, Capability::Microphone);
        GateDecision::Requested
    }

    /// Issue the cosmetic camera request when the capability is missing.
    /// Its outcome only refreshes affordance visibility. Returns whether a
    /// request was issued.
    pub fn request_camera_if_needed(&mut self) -> bool {
        if self.host.is_granted(Capability::Camera) {
            return false;
        }
        tracing::debug!("requesting camera capability for affordance visibility");
        self.host.request(RequestTag::Camera, Capability::Camera);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MockHost {
        granted: HashSet<Capability>,
        requests: Vec<RequestTag>,
    }

    impl PermissionHost for MockHost {
        fn is_granted(&self, capability: Capability) -> bool {
            self.granted.contains(&capability)
        }

        fn request(&mut self, tag: RequestTag, _capability: Capability) {
            self.requests.push(tag);
        }
    }

    #[test]
    fn only_audio_recording_requires_a_check() {
        let gate = CapabilityGate::new(Box::new(MockHost::default()));
        assert!(gate.requires_check(FieldKind::AudioRecording));
        assert!(!gate.requires_check(FieldKind::Text));
        assert!(!gate.requires_check(FieldKind::Image));
        assert!(!gate.requires_check(FieldKind::AudioClip));
    }

    #[test]
    fn granted_microphone_needs_no_check() {
        let mut host = MockHost::default();
        host.granted.insert(Capability::Microphone);
        let mut gate = CapabilityGate::new(Box::new(host));
        assert!(!gate.requires_check(FieldKind::AudioRecording));
        assert_eq!(
            gate.request_if_needed(FieldKind::AudioRecording),
            GateDecision::NotNeeded
        );
    }

    #[test]
    fn ungranted_microphone_issues_a_tagged_request() {
        let mut gate = CapabilityGate::new(Box::new(MockHost::default()));
        assert_eq!(
            gate.request_if_needed(FieldKind::AudioRecording),
            GateDecision::Requested
        );
    }

    #[test]
    fn camera_request_reports_whether_it_was_issued() {
        let mut ungranted = CapabilityGate::new(Box::new(MockHost::default()));
        assert!(ungranted.request_camera_if_needed());

        let mut host = MockHost::default();
        host.granted.insert(Capability::Camera);
        let mut granted = CapabilityGate::new(Box::new(host));
        assert!(!granted.request_camera_if_needed());
    }
}
