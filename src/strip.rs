//! Comment removal built on the scanner's spans. STRING and CODE text is copied
//! through untouched, so a `//` inside a string literal survives stripping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::StripConfig,
    scanner::span::{LexicalSpan, SpanKind},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrippedSource {
    pub text: String,
    /// Number of comment spans removed.
    pub removed: usize,
}

#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn strip(text: &str, spans: &[LexicalSpan], config: &StripConfig) -> StrippedSource {
    let mut kept = String::with_capacity(text.len());
    let mut cuts = Vec::new();
    for span in spans {
        if span.kind.is_comment() {
            cuts.push(kept.len());
        } else {
            kept.push_str(span.text(text));
        }
    }
    let removed = cuts.len();

    let mut output = String::with_capacity(kept.len());
    let mut blank_run = 0;
    let mut line_start = 0;
    let mut cuts = cuts.into_iter().peekable();

    for line in kept.split_inclusive('\n') {
        let (content, ending) = split_line_ending(line);
        let content_end = line_start + content.len();
        line_start += line.len();

        let mut touched = false;
        while let Some(&cut) = cuts.peek() {
            if cut > content_end {
                break;
            }
            touched = true;
            cuts.next();
        }

        let content = if touched { content.trim_end() } else { content };
        let blank = content.trim().is_empty();
        if blank && touched && config.drop_emptied_lines {
            continue;
        }
        if blank {
            blank_run += 1;
            if blank_run > config.max_blank_lines {
                continue;
            }
        } else {
            blank_run = 0;
        }
        output.push_str(content);
        output.push_str(ending);
    }

    if text.ends_with('\n') && !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    debug!("removed {} comments", removed);
    StrippedSource {
        text: output,
        removed,
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
