// src/error.rs

//! Error types for token file conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a token file
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist or is inaccessible
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Filesystem failure while reading
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path could not be created or written
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The conversion backend rejected a line
    #[error("Conversion failed on line {line}: {source}")]
    Conversion {
        line: usize,
        #[source]
        source: ConversionError,
    },

    /// Configuration file could not be loaded
    #[error("Invalid configuration '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque failure raised by a conversion backend
///
/// The underlying error is kept as-is and exposed through `source()`.
#[derive(Error, Debug)]
#[error("{inner}")]
pub struct ConversionError {
    #[source]
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl ConversionError {
    /// Wrap a backend error
    pub fn new(inner: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    /// The backend error, unmodified
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

impl Error {
    /// Classify an error from opening the input file
    pub(crate) fn from_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                Error::FileNotFound { path }
            }
            _ => Error::Io { path, source },
        }
    }
}
