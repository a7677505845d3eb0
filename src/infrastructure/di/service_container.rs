//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DirectoryService;
use crate::config::Settings;
use crate::domain::ColumnLayout;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding settings and I/O dependencies.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Create an empty directory configured from settings.
    pub fn directory(&self) -> DirectoryService {
        let layout = ColumnLayout::new(
            self.settings.display.name_width,
            self.settings.display.phone_width,
        );
        DirectoryService::with_options(
            Arc::clone(&self.fs),
            layout,
            self.settings.placeholder_address.as_str(),
        )
    }
}
