//! Application layer for crudgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation logic itself. All generation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateOptions, GenerationReport, GeneratorService};

pub use ports::{BaseCodeSource, Filesystem, ProjectLoader};

pub use error::ApplicationError;
