//! Immutable generation context threaded through every builder and assembler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{ObjectSpec, Project},
    error::DomainError,
};

/// What to do with a `child_of` name that matches no declared object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationPolicy {
    /// Emit the fetch function and injection, skip the select widget.
    #[default]
    Permissive,
    /// Fail before any output is produced.
    Strict,
}

impl RelationPolicy {
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for RelationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for RelationPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(DomainError::InvalidProject(format!(
                "unknown relation policy '{other}' (expected permissive or strict)"
            ))),
        }
    }
}

/// Everything a generation pass may read. Borrowed, never mutated, so
/// per-object work can run independently.
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    project: &'a Project,
    angular_app_name: String,
    policy: RelationPolicy,
}

impl<'a> GenerationContext<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            angular_app_name: project.camel_case_name(),
            policy: RelationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RelationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    pub fn objects(&self) -> &'a [ObjectSpec] {
        self.project.objects()
    }

    pub fn app_name(&self) -> &'a str {
        &self.project.name
    }

    pub fn angular_app_name(&self) -> &str {
        &self.angular_app_name
    }

    pub fn policy(&self) -> RelationPolicy {
        self.policy
    }

    pub fn find_object(&self, name: &str) -> Option<&'a ObjectSpec> {
        self.project.find_object(name)
    }
}
