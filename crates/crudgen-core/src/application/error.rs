//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in
//! generation logic. Generation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project description could not be read or parsed.
    #[error("Failed to load project from {path}: {reason}")]
    ProjectLoad { path: PathBuf, reason: String },

    /// The base-code source could not be read.
    #[error("Failed to load base code from {source_name}: {reason}")]
    BaseCodeUnavailable { source_name: String, reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Output directory already exists.
    #[error("Output directory already exists: {path}")]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectLoad { path, .. } => vec![
                format!("Check that {} exists and is valid JSON", path.display()),
                "Expected shape: { \"name\": ..., \"data\": { \"objects\": [...] } }".into(),
            ],
            Self::BaseCodeUnavailable { source_name, .. } => vec![
                format!("Check the base code directory: {}", source_name),
                "Omit --templates to use the bundled base code".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or choose a different output directory with --output".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::ProjectLoad { .. } => ErrorCategory::Validation,
            Self::BaseCodeUnavailable { .. } => ErrorCategory::NotFound,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
