use std::collections::HashSet;
use std::fmt;

use crate::domain::{
    codegen::RelationPolicy,
    entities::{ObjectSpec, Project},
    error::DomainError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub error: DomainError,
}

/// Outcome of [`ProjectValidator::validate`], issues in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, error: DomainError) {
        self.issues.push(ValidationIssue { severity, error });
    }

    pub fn errors(&self) -> impl Iterator<Item = &DomainError> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| &i.error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DomainError> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .map(|i| &i.error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// First error, if any; warnings never fail.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self
            .issues
            .into_iter()
            .find(|i| i.severity == Severity::Error)
        {
            Some(issue) => Err(issue.error),
            None => Ok(()),
        }
    }
}

/// Opt-in checks over a project description.
///
/// Generation itself trusts its input; these checks back the `check`
/// command and strict generation.
pub struct ProjectValidator;

impl ProjectValidator {
    pub fn validate(project: &Project, policy: RelationPolicy) -> ValidationReport {
        let mut report = ValidationReport::default();

        if project.name.trim().is_empty() {
            report.push(
                Severity::Error,
                DomainError::InvalidProject("project name is empty".into()),
            );
        }

        if project.objects().is_empty() {
            report.push(
                Severity::Error,
                DomainError::InvalidProject("project declares no objects".into()),
            );
        }

        let mut names = HashSet::new();
        let mut singulars = HashSet::new();

        for object in project.objects() {
            Self::check_identifiers(object, &mut report);

            if !names.insert(object.name.as_str()) {
                report.push(
                    Severity::Error,
                    DomainError::DuplicateObject {
                        attribute: "name",
                        value: object.name.clone(),
                    },
                );
            }
            if !singulars.insert(object.name_singular.as_str()) {
                report.push(
                    Severity::Error,
                    DomainError::DuplicateObject {
                        attribute: "name_singular",
                        value: object.name_singular.clone(),
                    },
                );
            }

            let severity = if policy.is_strict() {
                Severity::Error
            } else {
                Severity::Warning
            };
            for foreign in &object.child_of {
                if project.find_object(foreign).is_none() {
                    report.push(
                        severity,
                        DomainError::UnresolvedRelation {
                            object: object.name.clone(),
                            foreign: foreign.clone(),
                        },
                    );
                }
            }
        }

        report
    }

    fn check_identifiers(object: &ObjectSpec, report: &mut ValidationReport) {
        if object.name.trim().is_empty() {
            report.push(
                Severity::Error,
                DomainError::InvalidProject("an object has an empty name".into()),
            );
        }
        if object.name_singular.trim().is_empty() {
            report.push(
                Severity::Error,
                DomainError::InvalidProject(format!(
                    "object '{}' has an empty name_singular",
                    object.name
                )),
            );
        }
        for field in &object.structure {
            if field.name.trim().is_empty() {
                report.push(
                    Severity::Error,
                    DomainError::InvalidProject(format!(
                        "object '{}' has a field with an empty name",
                        object.name
                    )),
                );
            }
        }
    }
}
