use std::fmt::Display;

use super::{Counter, Diagnostic, Handler, Reporter, Status, Storage};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Mismatch {
    line: usize,
}

impl Diagnostic for Mismatch {
    fn line(&self) -> usize { self.line }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("mismatched input")
    }
}

#[test]
fn reporter_starts_ok() {
    let reporter = Reporter::new();

    assert_eq!(reporter.status(), Status::Ok);
    assert!(!reporter.has_errors());
    assert!(reporter.messages().is_empty());
}

#[test]
fn reporter_formats_and_keeps_order() {
    let reporter = Reporter::new();

    reporter.report(3, "first");
    reporter.report(1, "second");

    assert_eq!(reporter.status(), Status::Error);
    assert_eq!(reporter.messages(), vec![
        "line 3: first".to_string(),
        "line 1: second".to_string()
    ]);
}

#[test]
fn reporter_stays_in_error_until_reset() {
    let reporter = Reporter::new();

    reporter.report(1, "oops");
    reporter.report(1, "oops");
    assert!(reporter.has_errors());
    assert_eq!(reporter.messages().len(), 2);

    reporter.reset();
    assert_eq!(reporter.status(), Status::Ok);
    assert!(reporter.messages().is_empty());
}

#[test]
fn reporter_receives_line_tagged_diagnostics() {
    let reporter = Reporter::new();
    let handler: &dyn Handler<Mismatch> = &reporter;

    handler.receive(Mismatch { line: 7 });

    assert_eq!(reporter.messages(), vec!["line 7: mismatched input".to_string()]);
}

#[test]
fn storage_keeps_typed_errors() {
    let storage: Storage<Mismatch> = Storage::new();

    storage.receive(Mismatch { line: 1 });
    storage.receive(Mismatch { line: 2 });

    assert_eq!(storage.as_vec().len(), 2);
    assert_eq!(storage.into_vec(), vec![Mismatch { line: 1 }, Mismatch {
        line: 2
    }]);
}

#[test]
fn counter_counts_and_resets() {
    let counter = Counter::default();

    counter.receive(Mismatch { line: 1 });
    counter.receive("anything");
    assert_eq!(counter.count(), 2);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn reporter_writes_error_lines_in_report_order() {
    let reporter = Reporter::new();
    reporter.report(2, "unterminated string");
    reporter.report(1, "unexpected character: `@`");

    let mut out = Vec::new();
    reporter.write_to(&mut out).unwrap();

    let written = String::from_utf8(out).unwrap();
    let lines = written.lines().collect::<Vec<_>>();

    assert_eq!(lines, vec![
        "\x1B[1m\x1B[31m[error]:\x1B[0m\x1B[0m \x1B[1mline 2: unterminated string\x1B[0m",
        "\x1B[1m\x1B[31m[error]:\x1B[0m\x1B[0m \x1B[1mline 1: unexpected character: `@`\x1B[0m",
    ]);
}

#[test]
fn reporter_writes_nothing_when_clean() {
    let reporter = Reporter::new();
    reporter.report(1, "gone");
    reporter.reset();

    let mut out = Vec::new();
    reporter.write_to(&mut out).unwrap();

    assert!(out.is_empty());
}
