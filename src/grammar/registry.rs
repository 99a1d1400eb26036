use std::{path::Path, sync::Arc};

use dashmap::DashMap;
use tracing::debug;

use crate::error::ConfigError;

use super::{builtin::BUILTIN_GRAMMARS, CommentGrammar};

/// Concurrent lookup table from language id and file extension to [`CommentGrammar`].
///
/// Cloning is cheap and clones share the same table, so a registry can be handed to
/// worker tasks while new grammars are still being registered.
#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    grammars: Arc<DashMap<String, Arc<CommentGrammar>>>,
    extensions: Arc<DashMap<String, String>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for grammar in BUILTIN_GRAMMARS.iter() {
            registry.insert(grammar.clone());
        }
        registry
    }

    /// Registers `grammar`, replacing any grammar with the same language id.
    /// Its extensions take over from whichever language claimed them before.
    #[tracing::instrument(level = "debug", skip(self, grammar), fields(language = %grammar.language))]
    pub fn register(&self, grammar: CommentGrammar) -> Result<(), ConfigError> {
        grammar.validate()?;
        self.insert(grammar);
        Ok(())
    }

    fn insert(&self, grammar: CommentGrammar) {
        let language = grammar.language.to_lowercase();
        for ext in &grammar.extensions {
            let ext = ext.trim_start_matches('.').to_lowercase();
            self.extensions.insert(ext, language.clone());
        }
        debug!("registered grammar for {}", language);
        self.grammars.insert(language, Arc::new(grammar));
    }

    pub fn get(&self, language: &str) -> Option<Arc<CommentGrammar>> {
        self.grammars
            .get(&language.to_lowercase())
            .map(|entry| entry.value().clone())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.grammars.contains_key(&language.to_lowercase())
    }

    /// Infers a language id from the extension of `path`, ignoring case.
    pub fn language_for_path(&self, path: impl AsRef<Path>) -> Option<String> {
        let ext = path.as_ref().extension()?.to_string_lossy().to_lowercase();
        self.extensions.get(&ext).map(|entry| entry.value().clone())
    }

    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> =
            self.grammars.iter().map(|entry| entry.key().clone()).collect();
        languages.sort();
        languages
    }
}
