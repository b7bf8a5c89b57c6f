//! Error types for the reader shell

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::input::LoadError;

/// Main error type
#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, RsvpError>;

impl From<LoadError> for RsvpError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io(e) => RsvpError::Io(e),
            LoadError::EmptyFile(path) => RsvpError::EmptyFile(path),
            LoadError::Clipboard(msg) => RsvpError::Clipboard(msg),
            LoadError::FileNotFound(path) => RsvpError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
        }
    }
}
