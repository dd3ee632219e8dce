// ============================================================================
// domain/error.rs - GENERATION DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported once, logged again by callers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project metadata errors
    // ========================================================================
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Duplicate object {attribute} '{value}'")]
    DuplicateObject {
        attribute: &'static str,
        value: String,
    },

    #[error("Object '{object}' is a child of '{foreign}', which is not declared")]
    UnresolvedRelation { object: String, foreign: String },

    // ========================================================================
    // Substitution protocol errors
    // ========================================================================
    #[error("Base file '{file}' declares placeholder '{placeholder}' but no value was supplied")]
    MissingPlaceholder {
        file: &'static str,
        placeholder: &'static str,
    },

    #[error("Placeholder '{{%{token}%}}' survived substitution in '{file}'")]
    UnresolvedPlaceholder { file: String, token: String },

    #[error("Base code is missing required file: {path}")]
    MissingBaseFile { path: String },

    // ========================================================================
    // Output tree errors
    // ========================================================================
    #[error("Duplicate path in generated output: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Generated path leaves the output directory: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProject(msg) => vec![
                "Check the project description file".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicateObject { attribute, value } => vec![
                format!("Two objects share the {} '{}'", attribute, value),
                "Object names and singular names must be unique".into(),
            ],
            Self::UnresolvedRelation { object, foreign } => vec![
                format!("Declare an object named '{}'", foreign),
                format!("Or remove '{}' from the child_of list of '{}'", foreign, object),
                "Run without --strict to skip unresolved relations".into(),
            ],
            Self::MissingBaseFile { path } => vec![
                format!("The base code directory has no '{}'", path),
                "Omit --templates to use the bundled base code".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' would be written outside the output directory", path),
                "Object names must not contain '..' or path separators".into(),
            ],
            Self::UnresolvedPlaceholder { token, .. } => vec![
                format!("Base code uses an unknown placeholder '{}'", token),
                "Remove it or replace it with one of the supported placeholders".into(),
            ],
            _ => vec!["This is likely a bug in crudgen, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProject(_) | Self::DuplicateObject { .. } => ErrorCategory::Validation,
            Self::UnresolvedRelation { .. } => ErrorCategory::Validation,
            Self::MissingBaseFile { .. } => ErrorCategory::NotFound,
            Self::UnresolvedPlaceholder { .. } | Self::PathEscapesRoot { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
