use crate::scenario::{Scenario, Step};
use anyhow::{Context, Result};
use fieldedit_engine::{Capability, NullCapture, PermissionHost, RequestTag, share_capture};
use fieldedit_runtime::{ScreenController, ScreenSignal};
use fieldedit_types::ScreenResult;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Permission surface with a fixed grant set.
///
/// Requests are printed rather than answered; the scenario delivers
/// outcomes explicitly as `permission_outcome` steps, which is exactly how
/// the platform delivers them: asynchronously, after the request.
pub(crate) struct StaticPermissions {
    granted: HashSet<Capability>,
}

impl StaticPermissions {
    pub(crate) fn new(granted: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            granted: granted.into_iter().collect(),
        }
    }
}

impl PermissionHost for StaticPermissions {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    fn request(&mut self, tag: RequestTag, _capability: Capability) {
        println!("request: {}", describe_tag(tag));
    }
}

pub fn handle(path: &Path, show_views: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let scenario: Scenario =
        toml::from_str(&raw).with_context(|| format!("malformed scenario {}", path.display()))?;

    let permissions =
        StaticPermissions::new(scenario.granted.iter().map(|c| Capability::from(*c)));
    let capture = share_capture(NullCapture);

    let mut screen = ScreenController::launch(
        scenario.launch_request(),
        None,
        Box::new(permissions),
        capture,
    )
    .context("launch rejected")?;
    report(&mut screen, show_views);

    for step in &scenario.steps {
        if screen.is_closed() {
            tracing::warn!("screen closed, remaining steps skipped");
            break;
        }
        println!("step: {}", describe_step(step));
        apply(&mut screen, step);
        report(&mut screen, show_views);
    }

    Ok(())
}

fn apply(screen: &mut ScreenController, step: &Step) {
    match step {
        Step::Menu { select } => screen.handle_menu((*select).into()),
        Step::ExternalChange { field } => screen.handle_external_field_change(field.to_field()),
        Step::PermissionOutcome { tag, granted } => {
            screen.handle_permission_outcome(tag.to_outcome(*granted))
        }
        Step::Back => screen.back(),
        Step::Done => screen.finalize(),
        Step::CropDecision { proceed } => screen.resolve_crop_confirmation(*proceed),
        Step::Pause => screen.on_pause(),
    }
}

pub(crate) fn report(screen: &mut ScreenController, show_views: bool) {
    for signal in screen.drain_signals() {
        println!("{}", describe_signal(&signal));
    }
    if show_views && !screen.is_closed() {
        if let Some(view) = screen.rendered_view() {
            println!(
                "view: {} {} {:?}",
                view.kind.label(),
                describe_mode(view.mode),
                view.content
            );
        }
    }
}

fn describe_signal(signal: &ScreenSignal) -> String {
    match signal {
        ScreenSignal::Notice(notice) => format!("notice: {}", notice),
        ScreenSignal::MenuRefreshRequested => "signal: menu refresh requested".to_string(),
        ScreenSignal::CropConfirmationRequested { size_ratio } => {
            format!("signal: crop confirmation requested (ratio {:.2})", size_ratio)
        }
        ScreenSignal::Closed(result) => describe_result(result),
    }
}

fn describe_result(result: &ScreenResult) -> String {
    match result {
        ScreenResult::Saved { field: None, .. } => "closed: saved (payload discarded)".to_string(),
        ScreenResult::Saved {
            field: Some(field), ..
        } => match serde_json::to_string(field) {
            Ok(json) => format!("closed: saved {}", json),
            Err(_) => format!("closed: saved {:?}", field),
        },
        ScreenResult::Cancelled => "closed: cancelled".to_string(),
    }
}

fn describe_step(step: &Step) -> &'static str {
    match step {
        Step::Menu { .. } => "menu",
        Step::ExternalChange { .. } => "external change",
        Step::PermissionOutcome { .. } => "permission outcome",
        Step::Back => "back",
        Step::Done => "done",
        Step::CropDecision { .. } => "crop decision",
        Step::Pause => "pause",
    }
}

fn describe_tag(tag: RequestTag) -> &'static str {
    match tag {
        RequestTag::RecordAudio => "record_audio",
        RequestTag::Camera => "camera",
    }
}

fn describe_mode(mode: fieldedit_engine::ViewMode) -> &'static str {
    match mode {
        fieldedit_engine::ViewMode::Edit => "edit",
        fieldedit_engine::ViewMode::Capture => "capture",
    }
}
