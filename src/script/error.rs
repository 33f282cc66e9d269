use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a script file.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script file does not exist.
    #[error("Script file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8, so it cannot be tilde-expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// File exists but is not UTF-8 text.
    #[error("Script is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
