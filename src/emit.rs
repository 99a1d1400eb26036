//! # Record Emitter
//!
//! Turns classified comment spans into immutable [`CommentRecord`]s ordered by start
//! offset.
//!
//! ## Delimiter Stripping
//!
//! * Line comments lose their comment token and at most one following space:
//!   `// set x` becomes `set x` with delimiters `"// "` and `""`.
//! * Block comments lose their opening and closing tokens only. Whitespace and line
//!   structure inside the comment are kept verbatim, including JSDoc-style `*`
//!   continuation markers. An unterminated block comment has an empty closing delimiter.
//!
//! The removed text is kept in [`Delimiters`], so [`CommentRecord::raw_text`] always
//! reproduces the original span.

use lazy_static::lazy_static;
use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::{opt, recognize},
    sequence::pair,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    associate::Adjacency,
    classify::{CommentKind, ParserResult},
    config::DocCommentConfig,
    grammar::CommentGrammar,
    scanner::span::{LexicalSpan, LineIndex, Position, SpanKind},
};

lazy_static! {
    static ref CONTINUATION_MARKER: Regex = Regex::new(r"(?m)^[ \t]*\*(?:[ \t]|$)").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub span: LexicalSpan,
    pub kind: CommentKind,
    pub start: Position,
    /// Position just past the last character of the comment.
    pub end: Position,
    /// Line of the code this comment documents or trails.
    pub attached_to: Option<usize>,
    pub trailing: bool,
    /// Comment content without delimiters.
    pub text: String,
    pub delimiters: Delimiters,
    /// Doc comment content without `*` continuation markers, when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_body: Option<String>,
}

impl CommentRecord {
    pub fn raw_text(&self) -> String {
        format!("{}{}{}", self.delimiters.open, self.text, self.delimiters.close)
    }
}

/// A comment span with its classification and surroundings resolved.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedComment {
    pub span: LexicalSpan,
    pub kind: CommentKind,
    pub adjacency: Adjacency,
}

pub struct RecordEmitter<'a> {
    text: &'a str,
    grammar: &'a CommentGrammar,
    index: &'a LineIndex,
    policy: &'a DocCommentConfig,
}

impl<'a> RecordEmitter<'a> {
    pub fn new(
        text: &'a str,
        grammar: &'a CommentGrammar,
        index: &'a LineIndex,
        policy: &'a DocCommentConfig,
    ) -> Self {
        Self {
            text,
            grammar,
            index,
            policy,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(comments = comments.len()))]
    pub fn emit(&self, comments: Vec<ClassifiedComment>) -> Vec<CommentRecord> {
        let mut records: Vec<CommentRecord> =
            comments.into_iter().map(|c| self.record(c)).collect();
        records.sort_by_key(|r| r.span.start);
        debug!("emitted {} records", records.len());
        records
    }

    fn record(&self, comment: ClassifiedComment) -> CommentRecord {
        let raw = comment.span.text(self.text);
        let (delimiters, text) = match comment.span.kind {
            SpanKind::BlockComment => split_block(raw, self.grammar),
            _ => split_line(raw, self.grammar),
        };
        let doc_body = (self.policy.strip_continuation && comment.kind == CommentKind::Doc)
            .then(|| doc_body(text));

        CommentRecord {
            span: comment.span,
            kind: comment.kind,
            start: self.index.position(self.text, comment.span.start),
            end: self.index.position(self.text, comment.span.end),
            attached_to: comment.adjacency.attached_to,
            trailing: comment.adjacency.trailing,
            text: text.to_string(),
            delimiters,
            doc_body,
        }
    }
}

/// Removes `*` continuation markers from each line and trims the surrounding blank
/// lines and padding.
pub fn doc_body(text: &str) -> String {
    CONTINUATION_MARKER.replace_all(text, "").trim().to_string()
}

fn line_marker<'a>(input: &'a str, token: &str) -> ParserResult<'a, &'a str> {
    recognize(pair(tag(token), opt(char(' '))))(input)
}

fn split_line<'a>(raw: &'a str, grammar: &CommentGrammar) -> (Delimiters, &'a str) {
    let open = grammar
        .line_comment_tokens
        .iter()
        .filter_map(|token| line_marker(raw, token).ok())
        .map(|(_, marker)| marker)
        .max_by_key(|marker| marker.len())
        .unwrap_or("");
    (
        Delimiters {
            open: open.to_string(),
            close: String::new(),
        },
        &raw[open.len()..],
    )
}

fn split_block<'a>(raw: &'a str, grammar: &CommentGrammar) -> (Delimiters, &'a str) {
    let pair = grammar
        .block_comment_tokens
        .iter()
        .filter(|b| raw.starts_with(&b.open))
        .max_by_key(|b| b.open.len());
    let Some(pair) = pair else {
        return (
            Delimiters {
                open: String::new(),
                close: String::new(),
            },
            raw,
        );
    };

    let body = &raw[pair.open.len()..];
    let (close, body) = match body.strip_suffix(pair.close.as_str()) {
        Some(inner) => (pair.close.clone(), inner),
        None => (String::new(), body),
    };
    (
        Delimiters {
            open: pair.open.clone(),
            close,
        },
        body,
    )
}
