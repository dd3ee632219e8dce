//! [`Filesystem`](crudgen_core::application::ports::Filesystem) adapters.
//!
//! `LocalFilesystem` writes generated applications to disk;
//! `MemoryFilesystem` backs tests and never touches the disk.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
