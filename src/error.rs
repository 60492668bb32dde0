//! Unified crate-level error type.

use thiserror::Error;

/// Top-level error for callers that mix store operations with their own
/// I/O. Library operations themselves return [`crate::IniError`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("INI error: {0}")]
    Ini(#[from] crate::ini::IniError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the unified [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
