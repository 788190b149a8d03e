//! Tests for the console colorizer.

use microlog::fmt::{self, CallSite, LogLine, Tags};
use microlog::Level;

fn raw(level: Level, tags: &Tags) -> String {
    let at = chrono::Local::now();
    LogLine::new(&at, level, tags, &CallSite::new("src/job.rs", 9, Some("job::run")), "all done")
        .to_string()
}

#[test]
fn stripping_colors_restores_raw_content() {
    let tag_sets = [
        Tags::new(),
        Tags::new().uid("u-1"),
        Tags::new().uid("u-1").reference("ref"),
    ];
    for level in Level::all() {
        for tags in &tag_sets {
            let raw = raw(level, tags);
            let colored = fmt::colorize(&raw);
            assert_ne!(colored, raw);
            assert_eq!(fmt::strip_ansi(&colored), format!("| {raw}"));
        }
    }
}

#[test]
fn level_picks_the_color() {
    let colored = fmt::colorize(&raw(Level::Error, &Tags::new()));
    assert!(colored.starts_with("\x1b[31m| \x1b[0m"));
    assert!(colored.contains("\x1b[31m[ ERROR ]\x1b[0m"));

    let colored = fmt::colorize(&raw(Level::Statement, &Tags::new()));
    assert!(colored.contains("\x1b[35m[ STATEMENT ]\x1b[0m"));
}

#[test]
fn tags_get_fixed_accents_and_location_is_dimmed() {
    let colored = fmt::colorize(&raw(Level::Info, &Tags::new().uid("u").reference("r")));
    assert!(colored.contains("\x1b[96m( u )\x1b[0m"));
    assert!(colored.contains("\x1b[93m( r )\x1b[0m"));
    assert!(colored.contains("\x1b[90m/src/job.rs:9 >> run()\x1b[0m"));
}

#[test]
fn rendering_the_model_matches_reparsing_the_raw_line() {
    let at = chrono::Local::now();
    let line = LogLine::new(
        &at,
        Level::Debug,
        &Tags::new().uid("a").reference("b"),
        &CallSite::new("src/x.rs", 1, None),
        "msg",
    );
    assert_eq!(fmt::render(&line), fmt::colorize(&line.to_string()));
}

#[test]
fn malformed_lines_come_back_untouched() {
    for text in ["", "no delimiters here", "x @@ y", "t @@ [ INFO  @@ loc @@ m"] {
        assert_eq!(fmt::colorize(text), text);
    }
}

#[test]
fn plain_rendering_prefixes_gutter() {
    assert_eq!(fmt::render_plain("abc"), "| abc");
}
