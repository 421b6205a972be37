//! Error taxonomy for the fitness plotting pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`FitplotError`].
///
/// Callers that only care about which step failed (missing input, bad
/// header, bad cell, unwritable output) match on this instead of the
/// full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    SchemaError,
    ParseError,
    IoError,
    RenderError,
    DisplayError,
}

/// Errors produced by the fitness plotting pipeline.
#[derive(Debug, Error)]
pub enum FitplotError {
    #[error("Fitness log not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Missing column {column:?} in header of {}", path.display())]
    Schema { path: PathBuf, column: String },

    #[error(
        "Invalid value {value:?} for column {column:?} at line {line} of {}",
        path.display()
    )]
    Parse {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Chart display failed: {0}")]
    Display(String),
}

impl FitplotError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FitplotError::FileNotFound { .. } => ErrorKind::FileNotFound,
            FitplotError::Schema { .. } => ErrorKind::SchemaError,
            FitplotError::Parse { .. } | FitplotError::Csv { .. } => ErrorKind::ParseError,
            FitplotError::Io { .. } => ErrorKind::IoError,
            FitplotError::Render(_) => ErrorKind::RenderError,
            FitplotError::Display(_) => ErrorKind::DisplayError,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FitplotError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        FitplotError::Render(err.to_string())
    }
}

/// Result type for fitness plotting operations.
pub type FitplotResult<T> = Result<T, FitplotError>;
