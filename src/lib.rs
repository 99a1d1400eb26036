//! # Glossator: Source Comment Extraction
//!
//! Glossator finds the comments in source files of many languages, works out which
//! code each comment belongs to, and tells plain comments from documentation.
//!
//! ## Technical Foundations
//!
//! ### 1. Grammar-Driven Scanning
//! Languages are described as data, never as code:
//! - Comment grammars and the built-in language table ([`grammar`])
//! - Concurrent grammar lookup by language id or file extension ([`grammar::GrammarRegistry`])
//!
//! ### 2. Lexically Correct Comments
//! A `//` inside a string literal is never a comment. The [`scanner`] tracks strings and
//! comments in a single pass, and reports malformed input as [`diagnostic`]s rather
//! than failing.
//!
//! ### 3. Batch Processing
//! Files are independent. The [`engine`] scans them sequentially or concurrently on the
//! tokio blocking pool, and one bad file never affects the others.
//!
//! ## Comment Pipeline
//!
//! ```text
//! SourceFile → Scanner → Association → Classifier → Emitter → FileReport
//!                 └────────────────────────────────→ Stripper → StrippedSource
//! ```
//!
//! ### Stage 1: Scanning
//!
//! The [`scanner`] splits raw text into contiguous CODE, STRING, LINE_COMMENT and
//! BLOCK_COMMENT spans that together cover the whole input.
//!
//! ### Stage 2: Association
//!
//! The [`associate`] module decides for every comment whether it trails code on its own
//! line or leads the next code line, and records that line.
//!
//! ### Stage 3: Classification
//!
//! The [`classify`] module tags comments as LINE, BLOCK or DOC. A block comment leading a
//! declaration is a DOC comment.
//!
//! ### Stage 4: Emission
//!
//! The [`emit`] module strips delimiters and builds the final
//! [`CommentRecord`](emit::CommentRecord)s with line and column positions.
//!
//! ## Stripping
//!
//! [`strip`] reuses the scanner's spans to remove every comment from a file without
//! touching string literals.
//!
//! ## Configuration
//!
//! Every knob lives in [`config::ScanConfig`], loadable from JSON with every field
//! defaulted.

pub mod associate;
pub mod classify;
pub mod config;
pub mod diagnostic;
pub mod emit;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod scanner;
pub mod strip;

// Re-exports
pub use classify::CommentKind;
pub use config::ScanConfig;
pub use emit::CommentRecord;
pub use engine::{CommentEngine, FileReport, SourceFile};
pub use error::*;
