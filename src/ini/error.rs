//! Error types for INI store operations.

use thiserror::Error;

/// Errors that can occur while loading, querying, mutating or saving a store.
///
/// Lookup and delete operations report the specific miss (`GroupNotFound`
/// vs `ValueNotFound`) so callers can tell "no such group" apart from
/// "no such key in an existing group".
#[derive(Error, Debug)]
pub enum IniError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid path: no backing file path set")]
    InvalidPath,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Value not found: {0}")]
    ValueNotFound(String),

    #[error("Duplicate key '{0}' in group")]
    DuplicateKey(String),

    #[error("Invalid key: key must not be empty")]
    InvalidKey,

    #[error("Cannot convert stored text '{text}' for key '{key}'")]
    Conversion { key: String, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
