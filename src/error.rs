use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type GlossResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}

/// Failures of the scan machinery itself.
///
/// Malformed content never produces one of these; it is reported through
/// [`Diagnostic`](crate::diagnostic::Diagnostic)s on the file's report instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("scan task for '{path}' failed: {message}")]
    TaskFailed { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no comment grammar registered for language '{language}'")]
    UnknownLanguage { language: String },
    #[error("cannot infer a language for '{path}'")]
    UnsupportedExtension { path: String },
    #[error("Invalid grammar for '{language}': {reason}")]
    InvalidGrammar { language: String, reason: String },
}
