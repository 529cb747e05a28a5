//! Centralized error types for emlextract.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the emlextract library.
///
/// Configuration errors (`InvalidInputDir`, `OutputDir`) and `CsvExport`
/// abort the whole run; everything else is caught per file or per
/// attachment, logged, and skipped.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified EML file does not exist.
    #[error("Could not find file '{0}'")]
    FileNotFound(PathBuf),

    /// The input path given to directory mode is missing or not a directory.
    #[error("'{0}' is not a valid directory")]
    InvalidInputDir(PathBuf),

    /// The output directory could not be created.
    #[error("Could not create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file's content could not be parsed as an EML message.
    #[error("Failed to parse EML message in '{0}'")]
    Parse(PathBuf),

    /// An attachment payload could not be written.
    #[error("Could not write attachment '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV report could not be created or written.
    #[error("Could not write CSV report '{path}': {source}")]
    CsvExport {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, ExtractError>`.
pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
