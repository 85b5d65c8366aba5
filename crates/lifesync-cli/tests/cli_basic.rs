//! Basic CLI E2E tests.
//!
//! Every test points `LIFESYNC_DATA_DIR` at its own temp dir so runs never
//! touch the user's data or each other.

use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn lifesync(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("lifesync");
    cmd.env("LIFESYNC_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = lifesync(dir).args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_clock_once() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["clock", "--once", "--format", "24h"])
        .assert()
        .success()
        .stdout(
            predicates::str::is_match(r"^\d{2}:\d{2}:\d{2}  \w+, \w+ \d{1,2}, \d{4}\n$")
                .unwrap(),
        );

    lifesync(&dir)
        .args(["clock", "--once", "--format", "12h"])
        .assert()
        .success()
        .stdout(contains("AM").or(contains("PM")));
}

#[test]
fn test_timer_presets() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["timer", "presets"])
        .assert()
        .success()
        .stdout(contains("25 min (default)").and(contains("45 min")));
}

#[test]
fn test_timer_rejects_out_of_range_duration() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["timer", "run", "--minutes", "61"])
        .assert()
        .failure()
        .stderr(contains("error:"));

    lifesync(&dir)
        .args(["timer", "run", "--preset", "10"])
        .assert()
        .failure()
        .stderr(contains("preset"));
}

#[test]
fn test_timer_run_logs_session() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["timer", "run", "--seconds", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("SessionCompleted"));

    let sessions = json_output(&dir, &["session", "list", "--json"]);
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["type"], "timer");
    assert_eq!(sessions[0]["minutes"], 0);
}

#[test]
fn test_stopwatch_run_with_duration() {
    let dir = TempDir::new().unwrap();
    let state = json_output(&dir, &["stopwatch", "run", "--duration", "1", "--json"]);
    assert_eq!(state["running"], false);
    let elapsed = state["elapsedCentiseconds"].as_u64().unwrap();
    assert!(elapsed > 0 && elapsed <= 110, "elapsed {elapsed}");
}

#[test]
fn test_session_add_and_stats() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["session", "add", "--minutes", "30"])
        .assert()
        .success();
    lifesync(&dir)
        .args(["session", "add", "--minutes", "24", "--type", "reading"])
        .assert()
        .success();

    let weekly = json_output(&dir, &["stats", "weekly", "--json"]);
    assert_eq!(weekly["byDay"].as_array().unwrap().len(), 7);
    assert_eq!(weekly["byDay"][6]["minutes"], 54);
    assert_eq!(weekly["totalMinutes"], 54);

    let streak = json_output(&dir, &["stats", "streak", "--json"]);
    assert_eq!(streak["days"], 1);

    let dashboard = json_output(&dir, &["stats", "dashboard", "--json"]);
    assert_eq!(dashboard["sessionsTracked"], 2);
    assert_eq!(dashboard["totalHours"], "0.9");

    lifesync(&dir)
        .args(["stats", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Sessions tracked: 2"));
}

#[test]
fn test_session_remove_unknown_fails() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["session", "remove", "42"])
        .assert()
        .failure()
        .stderr(contains("session not found: 42"));
}

#[test]
fn test_note_lifecycle() {
    let dir = TempDir::new().unwrap();
    let first = json_output(&dir, &["note", "add", "first"]);
    json_output(&dir, &["note", "add", "second"]);

    let notes = json_output(&dir, &["note", "list", "--json"]);
    assert_eq!(notes[0]["text"], "second");
    assert_eq!(notes[1]["text"], "first");

    let id = first["id"].as_i64().unwrap().to_string();
    lifesync(&dir).args(["note", "remove", &id]).assert().success();
    lifesync(&dir)
        .args(["note", "clear"])
        .assert()
        .success()
        .stdout(contains("Removed 1 note(s)"));

    lifesync(&dir)
        .args(["note", "add", "   "])
        .assert()
        .failure();
}

#[test]
fn test_todo_lifecycle() {
    let dir = TempDir::new().unwrap();
    let todo = json_output(&dir, &["todo", "add", "  write report  "]);
    assert_eq!(todo["text"], "write report");
    assert_eq!(todo["completed"], false);

    let id = todo["id"].as_i64().unwrap().to_string();
    let toggled = json_output(&dir, &["todo", "toggle", &id]);
    assert_eq!(toggled["completed"], true);

    lifesync(&dir)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(contains("[x]").and(contains("1 completed")));

    lifesync(&dir)
        .args(["todo", "clear-completed"])
        .assert()
        .success()
        .stdout(contains("Removed 1 completed task(s)"));
}

#[test]
fn test_todo_validation_messages() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["todo", "add", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter a task description"));

    let long = "x".repeat(101);
    lifesync(&dir)
        .args(["todo", "add", &long])
        .assert()
        .failure()
        .stderr(contains("less than 100 characters"));
}

#[test]
fn test_theme_toggle_persists() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir).arg("theme").assert().success().stdout("light\n");
    lifesync(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout("dark\n");
    lifesync(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout("dark\n");
    lifesync(&dir).args(["theme", "set", "blue"]).assert().failure();
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    lifesync(&dir)
        .args(["config", "get", "timer.minutes"])
        .assert()
        .success()
        .stdout("25\n");
    lifesync(&dir)
        .args(["config", "set", "clock.format", "12h"])
        .assert()
        .success();
    lifesync(&dir)
        .args(["config", "get", "clock.format"])
        .assert()
        .success()
        .stdout("12h\n");
    lifesync(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .stderr(contains("error:"));
    lifesync(&dir)
        .args(["config", "reset"])
        .assert()
        .success();
    lifesync(&dir)
        .args(["config", "get", "clock.format"])
        .assert()
        .success()
        .stdout("24h\n");
}
