//! Black-box tests driving the binary through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn roster(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg(file);
    cmd
}

/// Input lines for one `add`: command plus the eleven prompted fields.
fn add_input(name: &str, students: u32, semester: &str) -> String {
    [
        "add",
        name,
        "1",            // x
        "2.5",          // y
        &students.to_string(),
        "",             // expelled
        "3",            // transferred
        semester,
        "Alice",        // admin name
        "631152000000", // admin birthday
        "GREEN",        // eye color
        "",             // nationality
    ]
    .join("\n")
        + "\n"
}

#[test]
fn missing_file_argument_is_a_usage_error() {
    Command::cargo_bin("roster")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_collection_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir.path().join("groups.xml"))
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn add_save_and_reload_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("groups.xml");

    let input = add_input("persisted", 20, "FIFTH") + "save\nexit\n";
    roster(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("added group 1"))
        .stdout(predicate::str::contains("saved 1 record(s)"));

    roster(&file)
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded 1 record(s)"))
        .stdout(predicate::str::contains("persisted"));
}

#[test]
fn semester_filter_prints_only_later_semesters() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("groups.xml");

    let input = add_input("first-sem", 10, "FIRST")
        + &add_input("third-sem", 20, "THIRD")
        + &add_input("no-sem", 30, "")
        + "filter_greater_than_semester_enum SECOND\nexit\n";
    roster(&file)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("third-sem"))
        .stdout(predicate::str::contains("first-sem").not());
}

#[test]
fn malformed_collection_file_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("groups.xml");
    std::fs::write(&file, "<studyGroups><studyGroup><id>1</id>").unwrap();

    roster(&file)
        .write_stdin("info\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not load"))
        .stdout(predicate::str::contains("size: 0"));
}
