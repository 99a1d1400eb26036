//! # Association Engine
//!
//! Links each comment to the code line it belongs to:
//!
//! * A comment that starts on the same line as the last code before it is a
//!   *trailing* comment and attaches to that line.
//! * Any other comment attaches to the line of the next code character, skipping
//!   whitespace and further comments. Several comments can attach to one line.
//! * A comment with no code after it attaches to nothing.
//!
//! STRING spans count as code. The work is two linear passes over the spans: a forward
//! pass for trailing detection and a backward pass for the next code position.

use crate::scanner::span::{LexicalSpan, LineIndex, SpanKind};

/// Where one comment sits relative to the code around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// Index of the comment in the scanned span list.
    pub span_index: usize,
    pub trailing: bool,
    /// Byte offset of the first code character after the comment.
    pub next_code: Option<usize>,
    /// Largest run of blank lines between consecutive comments on the way from this
    /// comment to `next_code`.
    pub blank_lines: usize,
    /// Line number this comment documents or follows.
    pub attached_to: Option<usize>,
}

#[tracing::instrument(level = "debug", skip_all, fields(spans = spans.len()))]
pub fn associate(text: &str, spans: &[LexicalSpan], index: &LineIndex) -> Vec<Adjacency> {
    let trailing = trailing_flags(text, spans, index);

    let mut ahead = Vec::with_capacity(trailing.len());
    let mut anchor: Option<usize> = None;
    let mut next_code: Option<usize> = None;
    let mut chain_gap = 0;

    for (i, span) in spans.iter().enumerate().rev() {
        match span.kind {
            SpanKind::Code => {
                if let Some(offset) = first_non_whitespace(text, span) {
                    next_code = Some(offset);
                    anchor = Some(offset);
                    chain_gap = 0;
                }
            }
            SpanKind::String => {
                next_code = Some(span.start);
                anchor = Some(span.start);
                chain_gap = 0;
            }
            SpanKind::LineComment | SpanKind::BlockComment => {
                let gap = anchor
                    .map(|a| blank_lines(&text[span.end..a]))
                    .unwrap_or(0);
                chain_gap = chain_gap.max(gap);
                ahead.push((i, next_code, chain_gap));
                anchor = Some(span.start);
            }
        }
    }
    ahead.reverse();

    ahead
        .into_iter()
        .zip(trailing)
        .map(|((span_index, next_code, blank_lines), trailing)| {
            let attached_to = if trailing {
                Some(index.line(spans[span_index].start))
            } else {
                next_code.map(|offset| index.line(offset))
            };
            Adjacency {
                span_index,
                trailing,
                next_code,
                blank_lines,
                attached_to,
            }
        })
        .collect()
}

/// One flag per comment span, in order: does code precede it on its start line?
fn trailing_flags(text: &str, spans: &[LexicalSpan], index: &LineIndex) -> Vec<bool> {
    let mut flags = Vec::new();
    let mut last_code_line: Option<usize> = None;

    for span in spans {
        match span.kind {
            SpanKind::Code => {
                if let Some(offset) = last_non_whitespace(text, span) {
                    last_code_line = Some(index.line(offset));
                }
            }
            SpanKind::String => last_code_line = Some(index.line(span.end - 1)),
            SpanKind::LineComment | SpanKind::BlockComment => {
                flags.push(last_code_line == Some(index.line(span.start)));
            }
        }
    }
    flags
}

fn first_non_whitespace(text: &str, span: &LexicalSpan) -> Option<usize> {
    span.text(text)
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| span.start + i)
}

fn last_non_whitespace(text: &str, span: &LexicalSpan) -> Option<usize> {
    span.text(text)
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| span.start + i)
}

/// Blank lines in a whitespace-only gap between two elements.
fn blank_lines(gap: &str) -> usize {
    gap.matches('\n').count().saturating_sub(1)
}
