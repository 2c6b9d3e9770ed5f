//! Testing infrastructure for fieldedit integration tests.
//!
//! This crate provides utilities for writing robust screen-level tests:
//! - `ScriptedPermissions`: a permission host with scriptable grants and an
//!   observable request log
//! - `FakeCapture`: a scriptable stand-in for the audio capture singleton
//! - `media`: real on-disk media fixtures over `tempfile`
//! - `fields`: launch-request and note fixtures

pub mod capture;
pub mod fields;
pub mod media;
pub mod permissions;

pub use capture::FakeCapture;
pub use media::MediaDir;
pub use permissions::ScriptedPermissions;
