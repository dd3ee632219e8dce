//! Infrastructure adapters for crudgen.
//!
//! This crate implements the ports defined in `crudgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod base_code;
pub mod filesystem;
pub mod project_loader;

// Re-export commonly used adapters
pub use base_code::{DirectoryBaseCode, EmbeddedBaseCode};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project_loader::JsonProjectLoader;
