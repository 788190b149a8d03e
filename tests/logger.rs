//! Tests for the logger handle: file contents, tags, and failure handling.

use microlog::{Config, Error, Logger};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn quiet(dir: &Path) -> Config {
    Config::new()
        .print_to_console(false)
        .log_directory(dir.to_string_lossy())
}

fn lines(logger: &Logger) -> Vec<String> {
    let path = logger.file_name().expect("log file should be open");
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn first_line_is_creation_marker() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    let path = logger.file_name().unwrap();
    assert_eq!(path.parent(), Some(tmp.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));

    let lines = lines(&logger);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Log file created at "));
}

#[test]
fn file_name_follows_timestamp_pattern() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    let name = logger.file_name().unwrap();
    let name = name.file_name().unwrap().to_str().unwrap();
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}-\d{9}\.txt$").unwrap();
    assert!(pattern.is_match(name), "{name}");
}

#[test]
fn method_call_records_file_and_line_only() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    logger.error(&["disk", "full"]);

    let lines = lines(&logger);
    assert_eq!(lines.len(), 2);
    let pattern =
        Regex::new(r"^\d{2}:\d{2}:\d{2}:\d{6} @@ \[ ERROR \] @@ /tests/logger\.rs:\d+ @@ disk full$")
            .unwrap();
    assert!(pattern.is_match(&lines[1]), "{}", lines[1]);
}

#[test]
fn macro_records_enclosing_function() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    microlog::error!(logger, "disk", String::from("full"));

    let lines = lines(&logger);
    let pattern = Regex::new(
        r"^\d{2}:\d{2}:\d{2}:\d{6} @@ \[ ERROR \] @@ /tests/logger\.rs:\d+ >> macro_records_enclosing_function\(\) @@ disk full$",
    )
    .unwrap();
    assert!(pattern.is_match(&lines[1]), "{}", lines[1]);
}

#[test]
fn every_level_method_writes_its_token() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    logger.error(&["e"]);
    logger.info(&["i"]);
    logger.debug(&["d"]);
    logger.statement(&["s"]);
    logger.details(&["x"]);

    let lines = lines(&logger);
    assert!(lines[1].contains("[ ERROR ]") && lines[1].ends_with(" @@ e"));
    assert!(lines[2].contains("[ INFO ]") && lines[2].ends_with(" @@ i"));
    assert!(lines[3].contains("[ DEBUG ]") && lines[3].ends_with(" @@ d"));
    assert!(lines[4].contains("[ STATEMENT ]") && lines[4].ends_with(" @@ s"));
    assert!(lines[5].contains("[ DETAILS ]") && lines[5].ends_with(" @@ x"));
}

#[test]
fn shared_tags_apply_until_changed() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    logger.set_uid("u1");
    logger.info(&["one"]);
    logger.set_reference(99);
    logger.info(&["two"]);
    logger.remove_reference();
    logger.info(&["three"]);
    logger.clear_uid();
    logger.info(&["four"]);

    let lines = lines(&logger);
    assert!(lines[1].contains("] @@ ( u1 ) @@ /"));
    assert!(lines[2].contains("] @@ ( u1 ) @@ ( 99 ) @@ /"));
    assert!(lines[3].contains("( u1 )") && !lines[3].contains("( 99 )"));
    assert!(!lines[4].contains("( u1 )"));
}

#[test]
fn tagged_children_do_not_leak() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));

    let job = logger.with_uid("job-1").with_reference("batch");
    job.info(&["child"]);
    logger.info(&["parent"]);

    let mut other = logger.tagged();
    other.set_uid("job-2");
    other.debug(&["sibling"]);
    other.remove_reference();

    let lines = lines(&logger);
    assert!(lines[1].contains("( job-1 ) @@ ( batch ) @@"));
    assert!(!lines[2].contains("( "));
    assert!(lines[3].contains("( job-2 ) @@ /") && !lines[3].contains("batch"));
    assert_eq!(logger.tags(), microlog::Tags::new());
}

#[test]
fn concurrent_lines_never_interleave() {
    let tmp = TempDir::new().unwrap();
    let logger = Arc::new(Logger::new(quiet(tmp.path())));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let id = t.to_string();
                for _ in 0..50 {
                    logger.info(&["thread", id.as_str()]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = lines(&logger);
    assert_eq!(lines.len(), 1 + 8 * 50);
    for line in &lines[1..] {
        let parsed = microlog::LogLine::parse(line).unwrap();
        assert!(parsed.message.starts_with("thread "));
    }
}

#[test]
fn unwritable_directory_does_not_panic() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let logger = Logger::new(quiet(&blocker.join("logs")));
    assert_eq!(logger.file_name(), None);

    logger.error(&["still", "running"]);
    logger.set_uid("x");
    logger.info(&["and again"]);
}

#[test]
fn try_build_reports_open_failure() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let err = Logger::builder()
        .config(quiet(&blocker.join("logs")))
        .try_build()
        .unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn directory_is_created_recursively() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b").join("c");

    let logger = Logger::new(quiet(&nested));
    assert!(nested.is_dir());
    assert!(logger.file_name().unwrap().starts_with(&nested));
}

#[test]
fn close_stops_writing() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));
    let path = logger.file_name().unwrap();

    logger.info(&["before"]);
    logger.close();
    logger.info(&["after"]);

    assert_eq!(logger.file_name(), None);
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("before"));
    assert!(!content.contains("after"));
}

#[test]
fn console_echo_does_not_change_file_content() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(
        Config::new()
            .log_directory(tmp.path().to_string_lossy())
            .color_enabled(true),
    );

    logger.set_uid("u");
    logger.info(&["colored"]);

    let lines = lines(&logger);
    assert!(!lines[1].contains('\x1b'));
    assert!(lines[1].ends_with(" @@ colored"));
}

#[test]
fn empty_directory_fails_instead_of_using_cwd() {
    let cwd = std::env::current_dir().unwrap();
    let before = fs::read_dir(&cwd).unwrap().count();

    let logger = Logger::new(Config::new().print_to_console(false).log_directory(""));
    assert_eq!(logger.file_name(), None);
    logger.info(&["dropped"]);

    assert_eq!(fs::read_dir(&cwd).unwrap().count(), before);
}

#[test]
fn child_handles_expose_their_parent_and_tags() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(quiet(tmp.path()));
    assert!(!logger.config().print_to_console);

    let tags = microlog::Tags::new().uid("u").reference("r");
    let mut child = logger.with_tags(tags.clone());
    assert_eq!(child.tags(), &tags);
    assert!(std::ptr::eq(child.logger(), &logger));

    child.clear_uid();
    child.info(&["no uid"]);
    let child = child.without_reference();
    child.info(&["no tags"]);

    let lines = lines(&logger);
    assert!(lines[1].contains("] @@ ( r ) @@ /"));
    assert!(!lines[2].contains("( "));
}
