use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Raw text ready to be placed in the settings text box.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedText {
    pub text: String,
    /// Where the text came from, e.g. `file:notes.txt` or `clipboard`
    pub source: String,
}

pub mod clipboard;
pub mod file;
