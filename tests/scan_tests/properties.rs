use glossator::{
    grammar::GrammarRegistry,
    scanner::{self, SpanKind},
};
use proptest::prelude::*;

use super::engine;

const LANGUAGES: &[&str] = &["javascript", "typescript", "rust", "go", "python", "shell"];

fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("//".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("#".to_string()),
            Just("\"".to_string()),
            Just("'".to_string()),
            Just("`".to_string()),
            Just("\"\"\"".to_string()),
            Just("\\".to_string()),
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("function f() {}".to_string()),
            "[a-zé ;=(){}]{1,6}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_cover_input(text in source_text(), language in prop::sample::select(LANGUAGES)) {
        let grammar = GrammarRegistry::with_builtins().get(language).unwrap();
        let spans = scanner::scan(&text, &grammar).spans;

        let rebuilt: String = spans.iter().map(|s| s.text(&text)).collect();
        prop_assert_eq!(rebuilt, text.clone());
        prop_assert!(spans.iter().all(|s| !s.is_empty()));
        prop_assert!(spans.windows(2).all(|w| w[0].end == w[1].start));
    }

    #[test]
    fn scanning_twice_is_identical(text in source_text(), language in prop::sample::select(LANGUAGES)) {
        let engine = engine();
        let first = engine.scan_text(&text, language).unwrap();
        let second = engine.scan_text(&text, language).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn records_restore_raw_text(text in source_text(), language in prop::sample::select(LANGUAGES)) {
        let report = engine().scan_text(&text, language).unwrap();

        let comment_spans = report.spans.iter().filter(|s| s.kind.is_comment()).count();
        prop_assert_eq!(report.records.len(), comment_spans);
        for record in &report.records {
            prop_assert_eq!(record.raw_text(), record.span.text(&text));
            prop_assert!(record.start <= record.end);
        }
        prop_assert!(report.records.windows(2).all(|w| w[0].span.start < w[1].span.start));
    }

    #[test]
    fn trailing_records_attach_to_own_line(text in source_text()) {
        let report = engine().scan_text(&text, "javascript").unwrap();
        for record in report.records.iter().filter(|r| r.trailing) {
            prop_assert_eq!(record.attached_to, Some(record.start.line));
        }
    }

    #[test]
    fn stripping_removes_every_comment(text in source_text(), language in prop::sample::select(LANGUAGES)) {
        let engine = engine();
        let file = glossator::SourceFile::new("generated", language, text.clone());
        let stripped = engine.strip(&file).unwrap();

        let comments = engine
            .scan(&file)
            .unwrap()
            .spans
            .iter()
            .filter(|s| matches!(s.kind, SpanKind::LineComment | SpanKind::BlockComment))
            .count();
        prop_assert_eq!(stripped.removed, comments);
        prop_assert!(stripped.text.len() <= text.len() + 1);
    }
}
