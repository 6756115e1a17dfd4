//! Error types shared by every generator operation.
//!
//! Each variant names the path (or input) that caused it, so a failure
//! surfaced through several layers still tells the user what to look at.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse classification of a [`ScaffoldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Template root or a specific template file is missing
    NotFound,
    /// Destination artifact already exists
    Conflict,
    /// Empty or malformed required input
    Invalid,
    /// Template body failed to parse or render
    Syntax,
    /// Any other read/write/mkdir failure
    Io,
}

/// Errors returned by the renderer, the tree materializer and the generators.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("template not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("file already exists: {}", path.display())]
    Conflict { path: PathBuf },

    #[error("invalid input: {reason}")]
    Invalid { reason: String },

    #[error("template error in {}: {source}", path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Coarse classification, for callers that branch on the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::NotFound { .. } => ErrorKind::NotFound,
            ScaffoldError::Conflict { .. } => ErrorKind::Conflict,
            ScaffoldError::Invalid { .. } => ErrorKind::Invalid,
            ScaffoldError::Syntax { .. } => ErrorKind::Syntax,
            ScaffoldError::Io { .. } => ErrorKind::Io,
        }
    }

    /// The path this error is about, if it has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ScaffoldError::NotFound { path }
            | ScaffoldError::Conflict { path }
            | ScaffoldError::Syntax { path, .. }
            | ScaffoldError::Io { path, .. } => Some(path),
            ScaffoldError::Invalid { .. } => None,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ScaffoldError::Invalid {
            reason: reason.into(),
        }
    }

    /// Attach a path to an I/O error.
    ///
    /// Always `Io`: callers that know the error means "destination exists"
    /// build [`ScaffoldError::Conflict`] themselves.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
