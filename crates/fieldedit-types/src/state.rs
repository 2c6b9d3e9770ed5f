use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Screen state persisted across a forced teardown.
///
/// `shut_off` is written unconditionally on save; on restore it means the
/// screen went through a teardown it did not initiate. A restore that finds
/// `shut_off` set but no controller state aborts instead of attempting a
/// partial resume into an inconsistent mid-transition state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedScreenState {
    pub shut_off: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_state: Option<Vec<u8>>,
}

impl SavedScreenState {
    pub fn new(controller_state: Option<Vec<u8>>) -> Self {
        Self {
            shut_off: true,
            controller_state,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
