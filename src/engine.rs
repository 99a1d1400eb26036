use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::{
    associate::associate,
    classify::{classify, CommentKind},
    config::ScanConfig,
    diagnostic::Diagnostic,
    emit::{ClassifiedComment, CommentRecord, RecordEmitter},
    error::{ConfigError, ScanError},
    grammar::{CommentGrammar, GrammarRegistry},
    scanner::{self, LexicalSpan, LineIndex, Scan},
    strip::{self, StrippedSource},
    Error, GlossResult,
};

/// One source file handed to the engine. The engine never reads from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub language: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(
        path: impl Into<String>,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Everything found in one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub language: String,
    pub spans: Vec<LexicalSpan>,
    pub records: Vec<CommentRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn records_of(&self, kind: CommentKind) -> impl Iterator<Item = &CommentRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Entry point to the comment pipeline.
///
/// Cloning is cheap: the grammar registry and the configuration are shared.
#[derive(Debug, Clone)]
pub struct CommentEngine {
    registry: GrammarRegistry,
    config: Arc<ScanConfig>,
}

impl CommentEngine {
    /// Builds an engine with the built-in grammars plus any grammars listed in the
    /// configuration. Fails if one of the configured grammars is invalid.
    pub fn new(config: ScanConfig) -> GlossResult<Self> {
        let registry = GrammarRegistry::with_builtins();
        for grammar in &config.grammars {
            registry.register(grammar.clone())?;
        }
        Ok(Self {
            registry,
            config: Arc::new(config),
        })
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Wraps `text` as a [`SourceFile`], choosing the language from the extension of
    /// `path`.
    pub fn source_file(
        &self,
        path: impl Into<String>,
        text: impl Into<String>,
    ) -> GlossResult<SourceFile> {
        let path = path.into();
        let language = self
            .registry
            .language_for_path(&path)
            .ok_or_else(|| ConfigError::UnsupportedExtension { path: path.clone() })?;
        Ok(SourceFile {
            path,
            language,
            text: text.into(),
        })
    }

    #[tracing::instrument(level = "debug", skip(self, file), fields(path = %file.path, language = %file.language))]
    pub fn scan(&self, file: &SourceFile) -> GlossResult<FileReport> {
        self.run(&file.path, &file.language, &file.text)
    }

    pub fn scan_text(&self, text: &str, language: &str) -> GlossResult<FileReport> {
        self.run("", language, text)
    }

    /// Scans the files one after another on the calling thread.
    pub fn scan_all(&self, files: &[SourceFile]) -> Vec<GlossResult<FileReport>> {
        files.iter().map(|file| self.scan(file)).collect()
    }

    /// Scans the files concurrently on tokio's blocking pool, at most
    /// `batch.max_concurrent_scans` at a time. Results come back in input order, and a
    /// failing file only fails its own entry.
    #[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
    pub async fn scan_batch(&self, files: Vec<SourceFile>) -> Vec<GlossResult<FileReport>> {
        let semaphore = Arc::new(Semaphore::new(self.config.batch.max_concurrent_scans.max(1)));
        let tasks = files
            .into_iter()
            .map(|file| scan_owned(self.clone(), semaphore.clone(), file));
        let results = join_all(tasks).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        let comments: usize = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|report| report.records.len())
            .sum();
        info!(
            "batch scanned {} files: {} comments, {} failed",
            results.len(),
            comments,
            failed
        );
        results
    }

    #[tracing::instrument(level = "debug", skip(self, file), fields(path = %file.path))]
    pub fn strip(&self, file: &SourceFile) -> GlossResult<StrippedSource> {
        let grammar = self.grammar(&file.language)?;
        let Scan { spans, .. } = scanner::scan(&file.text, &grammar);
        Ok(strip::strip(&file.text, &spans, &self.config.strip))
    }

    fn grammar(&self, language: &str) -> GlossResult<Arc<CommentGrammar>> {
        self.registry.get(language).ok_or_else(|| {
            ConfigError::UnknownLanguage {
                language: language.to_string(),
            }
            .into()
        })
    }

    fn run(&self, path: &str, language: &str, text: &str) -> GlossResult<FileReport> {
        let grammar = self.grammar(language)?;
        let Scan { spans, diagnostics } = scanner::scan(text, &grammar);
        let index = LineIndex::new(text);
        let policy = &self.config.doc_comment;

        let comments = associate(text, &spans, &index)
            .into_iter()
            .map(|adjacency| {
                let span = spans[adjacency.span_index];
                ClassifiedComment {
                    span,
                    kind: classify(&span, &adjacency, text, &grammar, policy),
                    adjacency,
                }
            })
            .collect();
        let records = RecordEmitter::new(text, &grammar, &index, policy).emit(comments);

        debug!(
            "{} records, {} diagnostics in '{}'",
            records.len(),
            diagnostics.len(),
            path
        );
        Ok(FileReport {
            path: path.to_string(),
            language: grammar.language.clone(),
            spans,
            records,
            diagnostics,
        })
    }
}

async fn scan_owned(
    engine: CommentEngine,
    semaphore: Arc<Semaphore>,
    file: SourceFile,
) -> GlossResult<FileReport> {
    let _permit = semaphore
        .acquire_owned()
        .await
        .map_err(|e| Error::internal(e.to_string()))?;
    let path = file.path.clone();
    tokio::task::spawn_blocking(move || engine.scan(&file))
        .await
        .map_err(|e| ScanError::TaskFailed {
            path,
            message: e.to_string(),
        })?
}
