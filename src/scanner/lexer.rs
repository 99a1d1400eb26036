use nom::{bytes::complete::tag, error::VerboseError};
use tracing::{debug, warn};

use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    grammar::CommentGrammar,
};

use super::span::{LexicalSpan, LineIndex, SpanKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    /// Index into `string_delimiters`.
    InString(usize),
    InLineComment,
    /// Index into `block_comment_tokens`.
    InBlockComment(usize),
}

/// Single-pass scanner over one source text.
///
/// Yields contiguous, non-empty [`LexicalSpan`]s covering the whole input. Problems
/// found on the way are collected and available from [`Lexer::into_diagnostics`] once
/// the iterator is exhausted.
#[derive(Debug)]
pub struct Lexer<'a> {
    text: &'a str,
    grammar: &'a CommentGrammar,
    pos: usize,
    span_start: usize,
    mode: Mode,
    diagnostics: Vec<Diagnostic>,
    index: Option<LineIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub spans: Vec<LexicalSpan>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Splits `text` into CODE, STRING, LINE_COMMENT and BLOCK_COMMENT spans.
#[tracing::instrument(level = "debug", skip(text, grammar), fields(language = %grammar.language, len = text.len()))]
pub fn scan(text: &str, grammar: &CommentGrammar) -> Scan {
    let mut lexer = Lexer::new(text, grammar);
    let spans: Vec<LexicalSpan> = lexer.by_ref().collect();
    let diagnostics = lexer.into_diagnostics();
    debug!(
        "scanned {} spans, {} comments, {} diagnostics",
        spans.len(),
        spans.iter().filter(|s| s.kind.is_comment()).count(),
        diagnostics.len()
    );
    Scan { spans, diagnostics }
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, grammar: &'a CommentGrammar) -> Self {
        Self {
            text,
            grammar,
            pos: 0,
            span_start: 0,
            mode: Mode::Code,
            diagnostics: Vec::new(),
            index: None,
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// One dispatch on the current mode at the current position. Returns the span that
    /// this step closed, if any.
    fn step(&mut self) -> Option<LexicalSpan> {
        let (text, grammar) = (self.text, self.grammar);
        let rest = &text[self.pos..];
        match self.mode {
            Mode::Code => match self.opening(rest) {
                Some((mode, len)) => {
                    let closed = self.close_span(SpanKind::Code, self.pos);
                    self.mode = mode;
                    self.pos += len;
                    closed
                }
                None => {
                    self.advance_char();
                    None
                }
            },
            Mode::InString(i) => {
                let delimiter = &grammar.string_delimiters[i];
                if let Some(escape) = delimiter.escape {
                    if rest.starts_with(escape) {
                        self.pos += escape.len_utf8();
                        // an escaped CRLF is one line break
                        if text[self.pos..].starts_with("\r\n") {
                            self.pos += 2;
                        } else {
                            self.advance_char();
                        }
                        return None;
                    }
                }
                if let Some(len) = match_tag(rest, &delimiter.close) {
                    self.pos += len;
                    self.mode = Mode::Code;
                    return self.close_span(SpanKind::String, self.pos);
                }
                if !delimiter.multiline && starts_with_line_break(rest) {
                    self.warn(
                        DiagnosticKind::UnterminatedString,
                        "string literal not closed before end of line",
                    );
                    self.mode = Mode::Code;
                    return self.close_span(SpanKind::String, self.pos);
                }
                self.advance_char();
                None
            }
            Mode::InLineComment => {
                if starts_with_line_break(rest) {
                    self.mode = Mode::Code;
                    return self.close_span(SpanKind::LineComment, self.pos);
                }
                self.advance_char();
                None
            }
            Mode::InBlockComment(i) => {
                let close = &grammar.block_comment_tokens[i].close;
                if let Some(len) = match_tag(rest, close) {
                    self.pos += len;
                    self.mode = Mode::Code;
                    return self.close_span(SpanKind::BlockComment, self.pos);
                }
                self.advance_char();
                None
            }
        }
    }

    /// Closes whatever span is open at end of input.
    fn finish(&mut self) -> Option<LexicalSpan> {
        let end = self.text.len();
        let kind = match self.mode {
            Mode::Code => SpanKind::Code,
            Mode::InLineComment => SpanKind::LineComment,
            Mode::InString(_) => {
                self.warn(
                    DiagnosticKind::UnterminatedString,
                    "string literal not closed before end of file",
                );
                SpanKind::String
            }
            Mode::InBlockComment(_) => {
                self.warn(
                    DiagnosticKind::UnterminatedBlockComment,
                    "block comment not closed before end of file",
                );
                SpanKind::BlockComment
            }
        };
        self.mode = Mode::Code;
        self.close_span(kind, end)
    }

    /// Longest comment or string opener at the start of `rest`. Comment tokens win
    /// ties against string delimiters.
    fn opening(&self, rest: &str) -> Option<(Mode, usize)> {
        let grammar = self.grammar;
        let comments = grammar
            .block_comment_tokens
            .iter()
            .enumerate()
            .filter_map(|(i, b)| match_tag(rest, &b.open).map(|len| (Mode::InBlockComment(i), len)))
            .chain(
                grammar
                    .line_comment_tokens
                    .iter()
                    .filter_map(|t| match_tag(rest, t).map(|len| (Mode::InLineComment, len))),
            );
        let strings = grammar
            .string_delimiters
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match_tag(rest, &s.open).map(|len| (Mode::InString(i), len)));

        let mut best: Option<(Mode, usize)> = None;
        for (mode, len) in comments.chain(strings) {
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((mode, len));
            }
        }
        best
    }

    fn close_span(&mut self, kind: SpanKind, end: usize) -> Option<LexicalSpan> {
        if end <= self.span_start {
            return None;
        }
        let span = LexicalSpan::new(kind, self.span_start, end);
        self.span_start = end;
        Some(span)
    }

    fn advance_char(&mut self) {
        if let Some(c) = self.text[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    fn warn(&mut self, kind: DiagnosticKind, message: &str) {
        let text = self.text;
        let position = self
            .index
            .get_or_insert_with(|| LineIndex::new(text))
            .position(text, self.span_start);
        let diagnostic = Diagnostic::warning(kind, self.span_start, self.pos, position, message);
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexicalSpan;

    fn next(&mut self) -> Option<LexicalSpan> {
        while self.pos < self.text.len() {
            if let Some(span) = self.step() {
                return Some(span);
            }
        }
        self.finish()
    }
}

/// Length of `token` if `input` starts with it. Empty tokens never match.
fn match_tag(input: &str, token: &str) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    tag::<&str, &str, VerboseError<&str>>(token)(input)
        .ok()
        .map(|(_, matched)| matched.len())
}

fn starts_with_line_break(input: &str) -> bool {
    input.starts_with('\n') || input.starts_with("\r\n")
}
