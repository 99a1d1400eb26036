use std::fs;

use glossator::{
    config::BatchConfig, diagnostic::DiagnosticKind, CommentEngine, CommentKind, ScanConfig,
    SourceFile,
};
use pretty_assertions::assert_eq;

use super::engine;

const FILE2: &str = include_str!("../fixtures/bed/test_dir/file2.ts");

#[tokio::test]
async fn test_malformed_file_does_not_affect_others() {
    let engine = engine();
    let broken = engine
        .source_file("test_dir/broken.ts", "let a = 1;\n/* never closed\nlet b = 2;\n")
        .unwrap();
    let good = engine.source_file("test_dir/file2.ts", FILE2).unwrap();

    let alone = engine.scan(&good).unwrap();
    let results = engine.scan_batch(vec![broken, good]).await;
    assert_eq!(results.len(), 2);

    let broken = results[0].as_ref().unwrap();
    assert_eq!(broken.diagnostics.len(), 1);
    assert_eq!(
        broken.diagnostics[0].kind,
        DiagnosticKind::UnterminatedBlockComment
    );
    assert_eq!(broken.records.len(), 1);
    assert_eq!(broken.records[0].kind, CommentKind::Block);

    let good = results[1].as_ref().unwrap();
    assert!(good.is_clean());
    assert_eq!(good, &alone);
}

#[tokio::test]
async fn test_batch_matches_sequential_scan() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("a.rs"), "// one\nfn a() {}\n").unwrap();
    fs::write(dir.path().join("b.go"), "s := `raw // text` // two\n").unwrap();
    fs::write(nested.join("c.py"), "\"\"\"# not\"\"\"\n# three\n").unwrap();
    fs::write(nested.join("d.java"), "/* Entry */\npublic class D {}\n").unwrap();

    let engine = engine();
    let mut files: Vec<SourceFile> = Vec::new();
    for path in ["a.rs", "b.go", "nested/c.py", "nested/d.java"] {
        let text = fs::read_to_string(dir.path().join(path)).unwrap();
        files.push(engine.source_file(path, text).unwrap());
    }

    let sequential = engine.scan_all(&files);
    let concurrent = engine.scan_batch(files).await;

    let paths: Vec<&str> = concurrent
        .iter()
        .map(|r| r.as_ref().unwrap().path.as_str())
        .collect();
    assert_eq!(paths, vec!["a.rs", "b.go", "nested/c.py", "nested/d.java"]);

    for (seq, con) in sequential.iter().zip(&concurrent) {
        assert_eq!(seq.as_ref().unwrap(), con.as_ref().unwrap());
    }
    let texts: Vec<&str> = concurrent
        .iter()
        .flat_map(|r| r.as_ref().unwrap().records.iter().map(|c| c.text.as_str()))
        .collect();
    assert_eq!(texts, vec!["one", "two", "three", " Entry "]);
}

#[tokio::test]
async fn test_batch_with_single_permit() {
    let config = ScanConfig {
        batch: BatchConfig {
            max_concurrent_scans: 1,
        },
        ..Default::default()
    };
    let engine = CommentEngine::new(config).unwrap();
    let files: Vec<SourceFile> = (0..8)
        .map(|i| SourceFile::new(format!("f{i}.js"), "javascript", format!("// {i}\nx();\n")))
        .collect();

    let results = engine.scan_batch(files).await;
    let texts: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().records[0].text.clone())
        .collect();
    let expected: Vec<String> = (0..8).map(|i| i.to_string()).collect();
    assert_eq!(texts, expected);
}

#[tokio::test]
async fn test_empty_batch() {
    assert!(engine().scan_batch(Vec::new()).await.is_empty());
}
