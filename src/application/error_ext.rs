//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult, FileMode};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the path and access mode of a failed file operation.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(path)
    ///     .with_path_context(FileMode::Reading, path)?;
    /// ```
    fn with_path_context(self, mode: FileMode, path: &Path) -> ApplicationResult<T>;

    /// Mark a failed write to the console stream.
    fn console(self) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, mode: FileMode, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::FileUnavailable {
            mode,
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn console(self) -> ApplicationResult<T> {
        self.map_err(ApplicationError::Console)
    }
}
