//! fieldedit-engine - controllers and the UI-recreation state machine
//!
//! The engine is purely event-driven: it owns the single visible container
//! and the single live controller, and every variant switch funnels through
//! [`RecreationOrchestrator::transition`]. Platform concerns (permission
//! grants, audio capture hardware) enter through the [`PermissionHost`] and
//! [`AudioCapture`] traits so transitions stay testable without a platform.

pub mod capture;
pub mod container;
pub mod controller;
pub mod controllers;
pub mod gate;
pub mod orchestrator;

pub use capture::{AudioCapture, CaptureHandle, NullCapture, share_capture};
pub use container::{RenderedView, ViewContainer, ViewMode};
pub use controller::{BuildOptions, ControllerBinding, FieldController, controller_for_kind};
pub use gate::{Capability, CapabilityGate, GateDecision, PermissionHost, PermissionOutcome, RequestTag};
pub use orchestrator::{RecreationOrchestrator, TransitionOutcome, TransitionState};
