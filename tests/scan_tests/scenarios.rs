use glossator::{
    diagnostic::{DiagnosticKind, Severity},
    error::ConfigError,
    scanner::Position,
    CommentKind, Error,
};
use pretty_assertions::assert_eq;

use super::engine;

#[test]
fn test_trailing_line_comment() {
    let report = engine()
        .scan_text("let x = 1; // set x", "javascript")
        .unwrap();

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.kind, CommentKind::Line);
    assert_eq!(record.attached_to, Some(1));
    assert!(record.trailing);
    assert_eq!(record.text, "set x");
    assert_eq!(record.delimiters.open, "// ");
    assert_eq!(record.delimiters.close, "");
    assert_eq!(record.start, Position { line: 1, column: 12 });
}

#[test]
fn test_block_before_function_is_doc() {
    let text = "/* Adds two numbers */\nfunction add(a, b) { return a + b; }\n";
    let report = engine().scan_text(text, "javascript").unwrap();

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.kind, CommentKind::Doc);
    assert_eq!(record.attached_to, Some(2));
    assert!(!record.trailing);
    assert_eq!(record.text, " Adds two numbers ");
    assert_eq!(record.raw_text(), "/* Adds two numbers */");
}

#[test]
fn test_unterminated_block_comment() {
    let text = "/* never closed";
    let report = engine().scan_text(text, "javascript").unwrap();

    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.kind, DiagnosticKind::UnterminatedBlockComment);

    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.kind, CommentKind::Block);
    assert_eq!(record.span.end, text.len());
    assert_eq!(record.text, " never closed");
    assert_eq!(record.delimiters.close, "");
    assert_eq!(record.attached_to, None);
}

#[test]
fn test_comment_marker_inside_string() {
    let report = engine()
        .scan_text("let s = \"// not a comment\";", "javascript")
        .unwrap();
    assert!(report.records.is_empty());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_comment_marker_inside_other_strings() {
    let engine = engine();
    let report = engine
        .scan_text("const u = 'http://x'; const t = `/* no */`;", "typescript")
        .unwrap();
    assert!(report.records.is_empty());

    let report = engine
        .scan_text("url = \"http://x\"  # real\n", "python")
        .unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].text, "real");
}

#[test]
fn test_unknown_language() {
    let err = engine().scan_text("// hi", "brainfork").unwrap_err();
    match err {
        Error::Config(ConfigError::UnknownLanguage { language }) => {
            assert_eq!(language, "brainfork")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_file() {
    let report = engine().scan_text("", "rust").unwrap();
    assert!(report.spans.is_empty());
    assert!(report.records.is_empty());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_shell_and_c_grammars() {
    let engine = engine();
    let report = engine
        .scan_text("echo 'a # b' # note\n", "shell")
        .unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].text, "note");

    let report = engine
        .scan_text("/* Entry point */\nint main(void) { return 0; }\n", "c")
        .unwrap();
    assert_eq!(report.records[0].kind, CommentKind::Doc);
}

#[test]
fn test_records_serialize() {
    let report = engine()
        .scan_text("x(); // go\n", "javascript")
        .unwrap();
    let json = serde_json::to_value(&report.records[0]).unwrap();
    assert_eq!(json["kind"], "line");
    assert_eq!(json["text"], "go");
    assert_eq!(json["span"]["kind"], "line_comment");
    assert!(json.get("doc_body").is_none());
}
