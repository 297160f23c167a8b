//! End-to-end dispatch tests driving the engine through line sources.

use roster_engine::{Context, Engine, MemorySource};
use roster_model::{GroupId, IdAllocator, Semester};
use roster_storage::CollectionFile;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Output sink shared between the engine and the test.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn engine(dir: &TempDir) -> (Engine, SharedBuf) {
    let out = SharedBuf::default();
    let store = CollectionFile::new(dir.path().join("groups.xml"));
    let ctx = Context::with_output(
        Default::default(),
        IdAllocator::new(),
        store,
        Box::new(out.clone()),
    );
    (Engine::new(ctx), out)
}

/// The field lines consumed by `add` for one record.
fn group_fields(name: &str, students: u32, semester: &str) -> Vec<String> {
    vec![
        name.to_string(),
        "1".to_string(),             // x
        "2.5".to_string(),           // y
        students.to_string(),
        String::new(),               // expelled: none
        "3".to_string(),             // transferred
        semester.to_string(),        // empty means none
        "Alice".to_string(),         // admin name
        "631152000000".to_string(),  // admin birthday
        "GREEN".to_string(),         // eye color
        String::new(),               // nationality: none
    ]
}

fn add_lines(name: &str, students: u32, semester: &str) -> Vec<String> {
    let mut lines = vec!["add".to_string()];
    lines.extend(group_fields(name, students, semester));
    lines
}

#[test]
fn blank_and_unknown_lines_keep_the_loop_running() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let mut source = MemorySource::new(["", "bogus", "exit"]);
    engine.run(&mut source).unwrap();

    assert!(out.contents().contains("unknown command: bogus"));
}

#[test]
fn add_builds_a_record_from_source_lines() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let mut lines = add_lines("calculus", 20, "THIRD");
    lines.push("exit".to_string());
    engine.run(&mut MemorySource::new(lines)).unwrap();

    let groups = &engine.context().groups;
    assert_eq!(groups.len(), 1);
    let record = groups.get_by_id(GroupId::new(1).unwrap()).unwrap();
    assert_eq!(record.name(), "calculus");
    assert_eq!(record.students_count(), 20);
    assert_eq!(record.semester(), Some(Semester::Third));
    assert_eq!(record.group_admin().name(), "Alice");
    assert!(out.contents().contains("added group 1"));
}

#[test]
fn invalid_field_aborts_add_without_partial_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    // Students count is not a number; the build stops there.
    let lines = vec!["add", "calculus", "1", "2.5", "twenty", "exit"];
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert!(engine.context().groups.is_empty());
    assert!(out.contents().contains("error:"));
    assert!(out.contents().contains("students count"));
}

#[test]
fn update_keeps_stored_values_on_empty_lines() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _out) = engine(&dir);

    let mut lines = add_lines("calculus", 20, "THIRD");
    // New name, everything else kept by pressing enter.
    lines.extend(["update 1", "topology", "", "", "", "", "exit"].map(String::from));
    engine.run(&mut MemorySource::new(lines)).unwrap();

    let record = engine
        .context()
        .groups
        .get_by_id(GroupId::new(1).unwrap())
        .cloned()
        .unwrap();
    assert_eq!(record.name(), "topology");
    // Counters, semester and administrator survive the update.
    assert_eq!(record.students_count(), 20);
    assert_eq!(record.semester(), Some(Semester::Third));
    assert_eq!(record.coordinates().x(), 1);
    assert_eq!(record.group_admin().name(), "Alice");
    assert_eq!(record.group_admin().eye_color().map(|c| c.as_str()), Some("GREEN"));
}

#[test]
fn update_of_missing_id_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    engine
        .run(&mut MemorySource::new(["update 99", "exit"]))
        .unwrap();

    assert!(out.contents().contains("no group with id 99"));
}

#[test]
fn add_if_min_rejects_non_minimal_records() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let mut lines = add_lines("small", 10, "");
    lines.push("add_if_min".to_string());
    lines.extend(group_fields("large", 50, ""));
    lines.push("exit".to_string());
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert_eq!(engine.context().groups.len(), 1);
    assert!(out.contents().contains("not added"));
}

#[test]
fn remove_by_id_of_missing_record_is_an_error_message() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    engine
        .run(&mut MemorySource::new(["remove_by_id 99", "exit"]))
        .unwrap();

    assert!(out.contents().contains("no group with id 99"));
}

#[test]
fn exit_stops_before_remaining_lines() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _out) = engine(&dir);

    let mut lines = vec!["exit".to_string()];
    lines.extend(add_lines("late", 10, ""));
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert!(engine.context().groups.is_empty());
}

#[test]
fn filter_greater_than_semester_prints_only_later_semesters() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let mut lines = add_lines("first-sem", 10, "FIRST");
    lines.extend(add_lines("third-sem", 20, "THIRD"));
    lines.extend(add_lines("no-sem", 30, ""));
    lines.push("filter_greater_than_semester_enum SECOND".to_string());
    lines.push("exit".to_string());
    engine.run(&mut MemorySource::new(lines)).unwrap();

    let output = out.contents();
    let filtered: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect();
    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].contains("third-sem"));
}

#[test]
fn save_writes_a_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _out) = engine(&dir);

    let mut lines = add_lines("persisted", 20, "FIFTH");
    lines.extend(["save".to_string(), "exit".to_string()]);
    engine.run(&mut MemorySource::new(lines)).unwrap();

    let mut ids = IdAllocator::new();
    let loaded = CollectionFile::new(dir.path().join("groups.xml"))
        .load(&mut ids)
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.snapshot()[0].name(), "persisted");
    assert_eq!(ids.next_id().get(), 2);
}

#[test]
fn script_lines_are_echoed_and_dispatched() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let script = dir.path().join("setup.txt");
    std::fs::write(&script, add_lines("scripted", 15, "").join("\n")).unwrap();

    let lines = [
        format!("execute_script {}", script.display()),
        "exit".to_string(),
    ];
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert_eq!(engine.context().groups.len(), 1);
    assert!(out.contents().contains(">> add"));
    assert!(out.contents().contains("added group 1"));
}

#[test]
fn missing_script_is_a_message_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    engine
        .run(&mut MemorySource::new([
            "execute_script /no/such/script.txt",
            "exit",
        ]))
        .unwrap();

    // Rendered at the dispatch boundary like any other command failure.
    assert!(out.contents().contains("error: script file not found"));
}

#[test]
fn self_recursive_script_runs_its_body_once() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let script = dir.path().join("loop.txt");
    let mut body = vec![format!("execute_script {}", script.display())];
    body.extend(add_lines("once", 10, ""));
    std::fs::write(&script, body.join("\n")).unwrap();

    let lines = [
        format!("execute_script {}", script.display()),
        "exit".to_string(),
    ];
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert!(out.contents().contains("error: recursion detected"));
    assert_eq!(engine.context().groups.len(), 1);
}

#[test]
fn finished_script_can_run_again() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _out) = engine(&dir);

    let script = dir.path().join("twice.txt");
    std::fs::write(&script, add_lines("repeat", 10, "").join("\n")).unwrap();

    let run = format!("execute_script {}", script.display());
    engine
        .run(&mut MemorySource::new([run.clone(), run, "exit".to_string()]))
        .unwrap();

    assert_eq!(engine.context().groups.len(), 2);
}

#[test]
fn transitive_recursion_is_blocked() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    std::fs::write(&first, format!("execute_script {}", second.display())).unwrap();
    let mut body = vec![format!("execute_script {}", first.display())];
    body.extend(add_lines("nested", 10, ""));
    std::fs::write(&second, body.join("\n")).unwrap();

    let lines = [
        format!("execute_script {}", first.display()),
        "exit".to_string(),
    ];
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert!(out.contents().contains("recursion detected"));
    assert_eq!(engine.context().groups.len(), 1);
}

#[test]
fn exit_inside_a_script_stops_the_outer_loop() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _out) = engine(&dir);

    let script = dir.path().join("quit.txt");
    std::fs::write(&script, "exit\n").unwrap();

    let mut lines = vec![format!("execute_script {}", script.display())];
    lines.extend(add_lines("after", 10, ""));
    engine.run(&mut MemorySource::new(lines)).unwrap();

    assert!(engine.context().groups.is_empty());
}

#[test]
fn help_lists_every_command() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, out) = engine(&dir);

    engine
        .run(&mut MemorySource::new(["help", "exit"]))
        .unwrap();

    let output = out.contents();
    for name in [
        "add",
        "add_if_min",
        "clear",
        "execute_script",
        "filter_contains_name",
        "filter_greater_than_semester_enum",
        "info",
        "print_field_descending_group_admin",
        "remove_by_id",
        "remove_first",
        "remove_lower",
        "save",
        "show",
        "update",
    ] {
        assert!(output.contains(name), "help is missing {name}");
    }
}
