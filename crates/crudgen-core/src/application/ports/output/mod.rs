//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{BaseCode, Project};
use crate::error::CrudgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CrudgenResult<()>;
}

/// Port for the base code a run starts from.
///
/// Implemented by:
/// - `crudgen_adapters::base_code::EmbeddedBaseCode` (bundled AngularJS set)
/// - `crudgen_adapters::base_code::DirectoryBaseCode` (user directory)
pub trait BaseCodeSource: Send + Sync {
    /// Load every base file, keyed by relative path.
    fn load(&self) -> CrudgenResult<BaseCode>;

    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;
}

/// Port for reading project descriptions.
pub trait ProjectLoader: Send + Sync {
    fn load(&self, path: &Path) -> CrudgenResult<Project>;
}
