// File: src/error.rs

/// Errors raised while building an engine or moving a lexicon on and off disk.
/// Interpreting an utterance never fails.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid pattern in group '{group}': {pattern}")]
    InvalidPattern {
        group: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Unsupported lexicon format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
