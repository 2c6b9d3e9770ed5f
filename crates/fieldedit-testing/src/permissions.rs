use fieldedit_engine::{Capability, PermissionHost, RequestTag};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Permission host with scriptable grants and an observable request log.
///
/// Clones share state, so a test can keep one clone while boxing another
/// into the capability gate, then flip grants or inspect issued requests
/// mid-scenario.
#[derive(Clone, Default)]
pub struct ScriptedPermissions {
    granted: Rc<RefCell<HashSet<Capability>>>,
    requests: Rc<RefCell<Vec<RequestTag>>>,
}

impl ScriptedPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_granted(capabilities: &[Capability]) -> Self {
        let host = Self::new();
        for capability in capabilities {
            host.grant(*capability);
        }
        host
    }

    pub fn grant(&self, capability: Capability) {
        self.granted.borrow_mut().insert(capability);
    }

    pub fn revoke(&self, capability: Capability) {
        self.granted.borrow_mut().remove(&capability);
    }

    /// Requests issued so far, in order.
    pub fn issued_requests(&self) -> Vec<RequestTag> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl PermissionHost for ScriptedPermissions {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted.borrow().contains(&capability)
    }

    fn request(&mut self, tag: RequestTag, _capability: Capability) {
        self.requests.borrow_mut().push(tag);
    }
}
