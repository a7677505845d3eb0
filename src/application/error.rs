//! Application-level errors (wraps domain errors)

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Direction of a file access, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    Reading,
    Writing,
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileMode::Reading => write!(f, "read"),
            FileMode::Writing => write!(f, "write"),
        }
    }
}

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The file could not be opened, or the write after opening failed.
    #[error("cannot {mode} file: {}", path.display())]
    FileUnavailable {
        mode: FileMode,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console output failed")]
    Console(#[source] std::io::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
