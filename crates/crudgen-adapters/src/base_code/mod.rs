//! Base-code sources.
//!
//! A base-code tree holds the shared application skeleton plus the five
//! per-object skeletons under `app/components/base/`. Two sources ship:
//!
//! - [`EmbeddedBaseCode`]: the bundled AngularJS 1.x + Bootstrap set,
//!   compiled into the binary. The default.
//! - [`DirectoryBaseCode`]: any directory with the same layout.

mod directory;
mod embedded;

pub use directory::DirectoryBaseCode;
pub use embedded::EmbeddedBaseCode;
