// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! Pure generation logic: the project data model, field classification,
//! fragment builders, relation expansion, the substitution protocol, and the
//! module and project assemblers.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: base code arrives as an in-memory [`BaseCode`], output
//!   leaves as a [`GeneratedTree`]
//! - **No shared mutable state**: every pass reads one borrowed
//!   [`GenerationContext`]
//! - **Deterministic**: same project and base code, byte-identical tree
//!
pub mod codegen;
pub mod entities;
pub mod error;
pub mod naming;

mod validation;

pub use codegen::{
    BaseCode, BaseFileKind, DefaultToken, Diagnostics, FieldKind, GeneratedModule,
    GeneratedOutput, GenerationContext, ModuleAssembler, Placeholder, ProjectAssembler,
    RelationPolicy, classify,
};
pub use entities::{
    Field, FieldType, GeneratedTree, ObjectSpec, Project,
    common::RelativePath,
    generated_tree::{DirectoryToCreate, FileToWrite, FsEntry},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{ProjectValidator, Severity, ValidationIssue, ValidationReport};
