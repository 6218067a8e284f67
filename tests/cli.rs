//! Smoke tests for the `sketch` REPL binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn sketch() -> Command {
    let mut cmd = Command::cargo_bin("sketch").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("SKETCH_SEED")
        .env_remove("RUST_LOG")
        .args(["--offline", "--latency-ms", "0"]);
    cmd
}

#[test]
fn test_generate_waits_for_completion_at_eof() {
    sketch()
        .args(["--seed", "1"])
        .write_stdin("generate Todo app\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 layouts generated successfully!"))
        .stdout(predicate::str::contains("[1] Todo app — "))
        .stdout(predicate::str::contains("[3] Todo app — "));
}

#[test]
fn test_blank_prompt_warns() {
    sketch()
        .write_stdin("generate   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a prompt first!"))
        .stdout(predicate::str::contains("generated successfully").not());
}

#[test]
fn test_layouts_flag_is_clamped() {
    sketch()
        .args(["--layouts", "9"])
        .write_stdin("generate Shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 layouts generated successfully!"));
}

#[test]
fn test_unknown_command_reported() {
    sketch()
        .write_stdin("dance\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: dance"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_settings_view() {
    sketch()
        .write_stdin("set layouts 4\nset auto-save on\nview settings\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layouts:       4"))
        .stdout(predicate::str::contains("Auto-save:     on"));
}

#[test]
fn test_quit_stops_reading() {
    sketch()
        .write_stdin("quit\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:").not());
}

#[test]
fn test_seed_makes_batches_reproducible() {
    let run = || {
        sketch()
            .args(["--seed", "7"])
            .write_stdin("generate Bakery\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
