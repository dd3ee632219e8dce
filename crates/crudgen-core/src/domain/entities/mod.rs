pub mod common;
pub mod generated_tree;
pub mod project;

pub use crate::domain::DomainError;
pub use generated_tree::GeneratedTree;
pub use project::{Field, FieldType, ObjectSpec, Project};
