//! # Lexical Scanner
//!
//! The scanner is the first stage of the comment pipeline. It walks raw source text
//! once, left to right, and splits it into [`LexicalSpan`](span::LexicalSpan)s tagged
//! CODE, STRING, LINE_COMMENT or BLOCK_COMMENT.
//!
//! ## Design Principles
//!
//! * **Full coverage**: spans are contiguous, non-overlapping and non-empty, and
//!   concatenating their text reproduces the input byte for byte.
//! * **Language agnostic**: every delimiter comes from a
//!   [`CommentGrammar`](crate::grammar::CommentGrammar); there is no per-language code.
//! * **Best effort**: unterminated strings and block comments become
//!   [`Diagnostic`](crate::diagnostic::Diagnostic)s, never errors.
//!
//! ## State Machine
//!
//! The [`Lexer`](lexer::Lexer) holds one mode out of `Code`, `InString`,
//! `InLineComment` and `InBlockComment`, and performs one dispatch on that mode per
//! step:
//!
//! ```text
//! Code ──string open──▶ InString ──close / line break──▶ Code
//! Code ──line token───▶ InLineComment ──line break─────▶ Code
//! Code ──block open───▶ InBlockComment ──first close───▶ Code
//! ```
//!
//! ## Known Limitations
//!
//! * Block comments do not nest: the first closing token ends the comment.
//! * Template literal interpolation (`${ ... }`) is treated as string content.
//! * Regular expression literals are not recognized.
//!
//! ## Usage Example
//!
//! ```rust
//! use glossator::grammar::GrammarRegistry;
//! use glossator::scanner::{lexer::scan, span::SpanKind};
//!
//! let registry = GrammarRegistry::with_builtins();
//! let grammar = registry.get("javascript").unwrap();
//! let scan = scan("let s = \"// not a comment\";", &grammar);
//! assert!(scan.spans.iter().all(|s| s.kind != SpanKind::LineComment));
//! ```

pub mod lexer;
pub mod span;

pub use lexer::{scan, Lexer, Scan};
pub use span::{LexicalSpan, LineIndex, Position, SpanKind};
