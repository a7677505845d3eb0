//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem)
//! but are themselves concrete structs, not traits.

mod directory;

pub use directory::{DirectoryService, DEFAULT_PLACEHOLDER_ADDRESS};
