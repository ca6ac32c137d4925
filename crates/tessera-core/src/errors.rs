//! Error types for the Tessera pipeline.

use thiserror::Error;

/// Top-level error type for the token pipeline.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while parsing a token document from JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("token document root must be a JSON object")]
    RootNotObject,

    #[error("invalid $type for token '{path}': {source}")]
    InvalidKind {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid $value for token '{path}': {source}")]
    InvalidValue {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid $extensions.mode for token '{path}': {source}")]
    InvalidModeValues {
        path: String,
        source: serde_json::Error,
    },

    #[error("scalar child '{path}' belongs to a group without a $type")]
    UntypedScalar { path: String },
}

/// Errors during token reference resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("undefined token reference: {{{path}}}")]
    UndefinedToken { path: String },

    #[error("circular token reference: {}", .cycle.join(" -> "))]
    CircularReference { cycle: Vec<String> },
}

/// Errors while reading inputs or writing generated artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
