use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct ScenarioFixture {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl ScenarioFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).expect("Failed to write scenario");
        path
    }
}

fn fieldedit() -> Command {
    Command::cargo_bin("fieldedit").expect("Failed to find fieldedit binary")
}

#[test]
fn replay_commits_a_text_field() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write(
        "text.toml",
        r#"
[field]
kind = "text"
text = "front"

[[steps]]
action = "done"
"#,
    );

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"closed: saved {"type":"text","text":"front"}"#,
        ));
}

#[test]
fn replay_prints_the_gated_request_and_resumes_on_grant() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write(
        "gated.toml",
        r#"
[field]
kind = "text"
text = "front"

[[steps]]
action = "menu"
select = "switch_to_audio_recording"

[[steps]]
action = "permission_outcome"
tag = "record_audio"
granted = true

[[steps]]
action = "done"
"#,
    );

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("request: record_audio")
                .and(predicate::str::contains("signal: menu refresh requested"))
                .and(predicate::str::contains(r#""type":"audio_recording""#)),
        );
}

#[test]
fn replay_reports_a_denied_initial_load_as_cancelled() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write(
        "denied.toml",
        r#"
[field]
kind = "audio_recording"

[[steps]]
action = "permission_outcome"
tag = "record_audio"
granted = false
"#,
    );

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("notice: Recording permission was refused")
                .and(predicate::str::contains("closed: cancelled")),
        );
}

#[test]
fn replay_with_granted_microphone_never_prompts() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write(
        "granted.toml",
        r#"
granted = ["microphone"]

[field]
kind = "text"
text = "front"

[[steps]]
action = "menu"
select = "switch_to_audio_recording"
"#,
    );

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("request: record_audio").not());
}

#[test]
fn show_views_prints_the_rendered_view() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write(
        "views.toml",
        r#"
[field]
kind = "text"
text = "front"
"#,
    );

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .arg("--show-views")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"view: text edit "front""#));
}

#[test]
fn missing_scenario_file_fails_with_an_error() {
    fieldedit()
        .arg("replay")
        .arg("/nonexistent/scenario.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read scenario"));
}

#[test]
fn malformed_scenario_fails_with_an_error() {
    let fixture = ScenarioFixture::new();
    let scenario = fixture.write("bad.toml", "[field]\nkind = \"hologram\"\n");

    fieldedit()
        .arg("replay")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed scenario"));
}

#[test]
fn demo_runs_a_full_session() {
    fieldedit()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("closed: saved"));
}

#[test]
fn help_lists_the_subcommands() {
    fieldedit()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("replay").and(predicate::str::contains("demo")),
        );
}
