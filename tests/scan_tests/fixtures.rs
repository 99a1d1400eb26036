use glossator::{config, CommentEngine, CommentKind, CommentRecord, ScanConfig};
use pretty_assertions::assert_eq;

use super::engine;

const TEST_SAMPLE: &str = include_str!("../fixtures/bed/test_sample.ts");
const FILE2: &str = include_str!("../fixtures/bed/test_dir/file2.ts");
const UTILS: &str = include_str!("../fixtures/bed/test_dir/nested/utils.js");

fn summary(records: &[CommentRecord]) -> Vec<(CommentKind, usize, Option<usize>, bool)> {
    records
        .iter()
        .map(|r| (r.kind, r.start.line, r.attached_to, r.trailing))
        .collect()
}

#[test]
fn test_sample_typescript() {
    let engine = engine();
    let file = engine
        .source_file("tests/bed/test_sample.ts", TEST_SAMPLE)
        .unwrap();
    let report = engine.scan(&file).unwrap();

    assert!(report.is_clean());
    assert_eq!(
        summary(&report.records),
        vec![
            (CommentKind::Line, 1, Some(2), false),
            (CommentKind::Line, 3, Some(3), true),
            (CommentKind::Block, 4, Some(4), true),
            (CommentKind::Doc, 7, Some(11), false),
            (CommentKind::Line, 14, Some(15), false),
            (CommentKind::Doc, 19, Some(20), false),
            (CommentKind::Line, 25, Some(26), false),
        ]
    );

    let texts: Vec<&str> = report.records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts[0], "TypeScript interface");
    assert_eq!(texts[1], "user's name");
    assert_eq!(texts[2], " user's age ");
    assert_eq!(texts[3], " \n * This is a TypeScript class\n * with comments\n ");
    assert_eq!(texts[5], " Get user by name ");

    let class_doc = &report.records[3];
    assert_eq!(class_doc.end.line, 10);
    assert_eq!(class_doc.end.column, 4);
    assert_eq!(class_doc.doc_body, None);
}

#[test]
fn test_nested_fixtures() {
    let engine = engine();

    let file2 = engine.source_file("test_dir/file2.ts", FILE2).unwrap();
    let report = engine.scan(&file2).unwrap();
    assert_eq!(
        summary(&report.records),
        vec![
            (CommentKind::Line, 1, Some(2), false),
            (CommentKind::Line, 3, Some(4), false),
            (CommentKind::Doc, 5, Some(6), false),
            (CommentKind::Line, 9, Some(10), false),
        ]
    );

    let utils = engine.source_file("test_dir/nested/utils.js", UTILS).unwrap();
    assert_eq!(utils.language, "javascript");
    let report = engine.scan(&utils).unwrap();
    assert_eq!(
        summary(&report.records),
        vec![
            (CommentKind::Line, 1, Some(2), false),
            (CommentKind::Line, 3, Some(4), false),
            (CommentKind::Line, 4, Some(4), true),
            (CommentKind::Doc, 5, Some(8), false),
        ]
    );
    assert_eq!(report.records[2].text, "logging function");
}

#[test]
fn test_doc_body_from_config() {
    let config: ScanConfig =
        config::from_str(r#"{ "doc_comment": { "strip_continuation": true } }"#).unwrap();
    let engine = CommentEngine::new(config).unwrap();

    let report = engine.scan_text(TEST_SAMPLE, "typescript").unwrap();
    let bodies: Vec<Option<&str>> = report
        .records_of(CommentKind::Doc)
        .map(|r| r.doc_body.as_deref())
        .collect();
    assert_eq!(
        bodies,
        vec![
            Some("This is a TypeScript class\nwith comments"),
            Some("Get user by name"),
        ]
    );

    let report = engine.scan_text(UTILS, "javascript").unwrap();
    assert_eq!(report.records[3].doc_body.as_deref(), Some("Error handler"));
    assert_eq!(report.records[0].doc_body, None);
}

#[test]
fn test_strip_sample() {
    let engine = engine();
    let file = engine.source_file("test_sample.ts", TEST_SAMPLE).unwrap();
    let stripped = engine.strip(&file).unwrap();

    let expected = [
        "interface User {\n",
        "    name: string;\n",
        "    age: number;\n",
        "}\n",
        "\n",
        "class UserService {\n",
        "    private users: User[] = [];\n",
        "    \n",
        "    addUser(user: User): void {\n",
        "        this.users.push(user);\n",
        "    }\n",
        "    \n",
        "    getUser(name: string): User | undefined {\n",
        "        return this.users.find(u => u.name === name);\n",
        "    }\n",
        "}\n",
        "\n",
        "export { UserService };\n",
    ]
    .concat();
    assert_eq!(stripped.text, expected);
    assert_eq!(stripped.removed, 7);
}

#[test]
fn test_strip_utils() {
    let engine = engine();
    let file = engine.source_file("utils.js", UTILS).unwrap();
    let stripped = engine.strip(&file).unwrap();

    let expected = [
        "export const utils = {\n",
        "    log: (msg) => console.log(msg),\n",
        "    error: (err) => console.error(err)\n",
        "};\n",
    ]
    .concat();
    assert_eq!(stripped.text, expected);
}
