//! Code synthesis: classification, fragment building, relation expansion,
//! the substitution protocol and the module and project assemblers.

pub mod base_code;
pub mod classifier;
pub mod context;
pub mod fragments;
pub mod module;
pub mod project;
pub mod relations;
pub mod substitution;

#[cfg(test)]
pub(crate) mod testing;

pub use base_code::{BaseCode, MODULE_BASE_DIR};
pub use classifier::{FieldKind, classify};
pub use context::{GenerationContext, RelationPolicy};
pub use module::{GeneratedModule, ModuleAssembler, ModuleFile};
pub use project::{Diagnostics, GeneratedOutput, ProjectAssembler};
pub use relations::RelationFragments;
pub use substitution::{BaseFileKind, DefaultToken, Placeholder, ResidualText, Substitutions};
