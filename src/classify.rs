//! # Comment Classifier
//!
//! Tags every comment span as [`CommentKind::Line`], [`CommentKind::Block`] or
//! [`CommentKind::Doc`].
//!
//! A block comment becomes a doc comment when it leads (does not trail) a
//! declaration-like line of code and the comment chain leading there has no more blank
//! lines than [`DocCommentConfig::max_blank_lines`] allows. Other comments between the
//! block comment and the code do not prevent the promotion; classification waits for
//! the first code after the whole run.
//!
//! Line comments are never promoted. Conventions such as `///` are left to callers.

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::{context, VerboseError},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::{
    associate::Adjacency,
    config::DocCommentConfig,
    grammar::CommentGrammar,
    scanner::span::{LexicalSpan, SpanKind},
};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Line,
    Block,
    Doc,
}

#[tracing::instrument(level = "trace", skip_all, fields(start = span.start))]
pub fn classify(
    span: &LexicalSpan,
    adjacency: &Adjacency,
    text: &str,
    grammar: &CommentGrammar,
    policy: &DocCommentConfig,
) -> CommentKind {
    if span.kind != SpanKind::BlockComment {
        return CommentKind::Line;
    }
    if adjacency.trailing || adjacency.blank_lines > policy.max_blank_lines {
        return CommentKind::Block;
    }
    match adjacency.next_code {
        Some(offset) if is_declaration(&text[offset..], grammar) => CommentKind::Doc,
        _ => CommentKind::Block,
    }
}

/// Whether `code` (starting at its first non-whitespace character) opens something
/// a comment can document: a declaration keyword, or any identifier that is not a
/// statement keyword.
pub fn is_declaration(code: &str, grammar: &CommentGrammar) -> bool {
    match parse_word(code) {
        Ok((_, word)) => {
            grammar.is_declaration_keyword(word) || !grammar.is_statement_keyword(word)
        }
        Err(_) => false,
    }
}

fn parse_word(input: &str) -> ParserResult<&str> {
    context(
        "declaration word",
        recognize(pair(
            take_while1(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
            take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
        )),
    )(input)
}
