use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{error::ConfigError, grammar::CommentGrammar, GlossResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub doc_comment: DocCommentConfig,

    #[serde(default)]
    pub strip: StripConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    /// Extra grammars, registered after the built-in ones. A grammar whose language id
    /// matches a built-in one replaces it.
    #[serde(default)]
    pub grammars: Vec<CommentGrammar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCommentConfig {
    /// Blank lines allowed between a block comment and the declaration it documents.
    #[serde(default = "default_doc_max_blank_lines")]
    pub max_blank_lines: usize,

    /// Fill `doc_body` on doc comment records with leading `*` continuation markers
    /// removed. Record `text` is never changed.
    #[serde(default)]
    pub strip_continuation: bool,
}

impl Default for DocCommentConfig {
    fn default() -> Self {
        Self {
            max_blank_lines: default_doc_max_blank_lines(),
            strip_continuation: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Longest run of blank lines kept in stripped output.
    #[serde(default = "default_strip_max_blank_lines")]
    pub max_blank_lines: usize,

    /// Drop lines left blank only because a comment was removed from them.
    #[serde(default = "default_true")]
    pub drop_emptied_lines: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            max_blank_lines: default_strip_max_blank_lines(),
            drop_emptied_lines: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_max_concurrent_scans")]
    pub max_concurrent_scans: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_scans: default_max_concurrent_scans(),
        }
    }
}

pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> GlossResult<T> {
    let file = File::open(path).map_err(ConfigError::Io)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(ConfigError::Parse)?;
    Ok(config)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> GlossResult<T> {
    let config = serde_json::from_str(s).map_err(ConfigError::Parse)?;
    Ok(config)
}

fn default_doc_max_blank_lines() -> usize {
    0
}
fn default_strip_max_blank_lines() -> usize {
    1
}
fn default_true() -> bool {
    true
}
fn default_max_concurrent_scans() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
