//! # Comment Grammars
//!
//! A [`CommentGrammar`] is the per-language table of delimiter tokens that defines
//! where comments and string literals begin and end. The scanner never branches on a
//! language: everything it knows about a language comes from one of these values.
//!
//! ## Component Structure
//!
//! * [`builtin`]: grammars shipped with the crate (JavaScript, TypeScript, Rust, ...)
//! * [`registry`]: the lookup table from language ids and file extensions to grammars
//!
//! ## Extending
//!
//! Grammars are plain `serde` data. A new language can be registered at runtime through
//! [`GrammarRegistry::register`](registry::GrammarRegistry::register) or listed under
//! `grammars` in the JSON configuration.

pub mod builtin;
pub mod registry;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use registry::GrammarRegistry;

/// An opening/closing token pair for block comments, e.g. `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDelimiter {
    pub open: String,
    pub close: String,
}

impl BlockDelimiter {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

/// A string literal form. Comment tokens inside one of these are not comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringDelimiter {
    pub open: String,
    pub close: String,
    /// Character that makes the following character literal. `None` for raw strings.
    #[serde(default = "default_escape")]
    pub escape: Option<char>,
    /// Whether the literal may contain line breaks.
    #[serde(default)]
    pub multiline: bool,
}

impl StringDelimiter {
    pub fn quoted(quote: &str) -> Self {
        Self {
            open: quote.to_string(),
            close: quote.to_string(),
            escape: default_escape(),
            multiline: false,
        }
    }

    pub fn multiline(quote: &str) -> Self {
        Self {
            multiline: true,
            ..Self::quoted(quote)
        }
    }

    pub fn raw(quote: &str) -> Self {
        Self {
            escape: None,
            multiline: true,
            ..Self::quoted(quote)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGrammar {
    /// Language id, e.g. `typescript`.
    pub language: String,
    /// File extensions without the leading dot, matched case-insensitively.
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub line_comment_tokens: Vec<String>,
    #[serde(default)]
    pub block_comment_tokens: Vec<BlockDelimiter>,
    #[serde(default)]
    pub string_delimiters: Vec<StringDelimiter>,
    /// Words that start a declaration (`function`, `class`, `export`, `pub`, ...).
    #[serde(default)]
    pub declaration_keywords: Vec<String>,
    /// Words that start a statement rather than a declaration (`return`, `if`, ...).
    #[serde(default)]
    pub statement_keywords: Vec<String>,
}

impl CommentGrammar {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            extensions: Vec::new(),
            line_comment_tokens: Vec::new(),
            block_comment_tokens: Vec::new(),
            string_delimiters: Vec::new(),
            declaration_keywords: Vec::new(),
            statement_keywords: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = to_strings(extensions);
        self
    }

    pub fn with_line_comments(mut self, tokens: &[&str]) -> Self {
        self.line_comment_tokens = to_strings(tokens);
        self
    }

    pub fn with_block_comment(mut self, open: &str, close: &str) -> Self {
        self.block_comment_tokens.push(BlockDelimiter::new(open, close));
        self
    }

    pub fn with_string(mut self, delimiter: StringDelimiter) -> Self {
        self.string_delimiters.push(delimiter);
        self
    }

    pub fn with_declaration_keywords(mut self, keywords: &[&str]) -> Self {
        self.declaration_keywords = to_strings(keywords);
        self
    }

    pub fn with_statement_keywords(mut self, keywords: &[&str]) -> Self {
        self.statement_keywords = to_strings(keywords);
        self
    }

    pub fn is_declaration_keyword(&self, word: &str) -> bool {
        self.declaration_keywords.iter().any(|k| k == word)
    }

    pub fn is_statement_keyword(&self, word: &str) -> bool {
        self.statement_keywords.iter().any(|k| k == word)
    }

    /// Checks that the grammar can drive the scanner: a non-empty id, at least one
    /// comment form, and no empty tokens (an empty token would match everywhere).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidGrammar {
            language: self.language.clone(),
            reason: reason.to_string(),
        };

        if self.language.trim().is_empty() {
            return Err(invalid("language id is empty"));
        }
        if self.line_comment_tokens.is_empty() && self.block_comment_tokens.is_empty() {
            return Err(invalid("no line or block comment tokens"));
        }
        if self.line_comment_tokens.iter().any(String::is_empty) {
            return Err(invalid("empty line comment token"));
        }
        if self
            .block_comment_tokens
            .iter()
            .any(|b| b.open.is_empty() || b.close.is_empty())
        {
            return Err(invalid("empty block comment delimiter"));
        }
        if self
            .string_delimiters
            .iter()
            .any(|s| s.open.is_empty() || s.close.is_empty())
        {
            return Err(invalid("empty string delimiter"));
        }
        Ok(())
    }
}

fn default_escape() -> Option<char> {
    Some('\\')
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
