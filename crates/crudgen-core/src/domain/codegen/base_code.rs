//! The base-code tree a generation run starts from.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{
    codegen::substitution::BaseFileKind, entities::common::RelativePath, error::DomainError,
};

/// Subtree holding the per-object skeletons. Never copied to the output.
pub const MODULE_BASE_DIR: &str = "app/components/base";

/// All base files, keyed by relative path (sorted, so iteration is stable).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseCode {
    files: BTreeMap<RelativePath, String>,
}

impl BaseCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<RelativePath>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Content of a known base file.
    ///
    /// # Errors
    /// `MissingBaseFile` if the tree lacks it.
    pub fn get(&self, kind: BaseFileKind) -> Result<&str, DomainError> {
        self.get_path(kind.base_path())
            .ok_or_else(|| DomainError::MissingBaseFile {
                path: kind.base_path().to_string(),
            })
    }

    pub fn get_path(&self, path: &str) -> Option<&str> {
        self.files
            .get(&RelativePath::new(path))
            .map(String::as_str)
    }

    /// Check every file the generator reads is present.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        for kind in BaseFileKind::MODULE
            .into_iter()
            .chain([BaseFileKind::Index, BaseFileKind::States, BaseFileKind::Sidebar])
        {
            self.get(kind)?;
        }
        Ok(())
    }

    /// Files copied to the output as-is (everything outside the module base).
    pub fn shared_files(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.files
            .iter()
            .filter(|(path, _)| !path.starts_with(Path::new(MODULE_BASE_DIR)))
            .map(|(path, content)| (path, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_files_exclude_module_base() {
        let base = BaseCode::new()
            .with_file("index.html", "")
            .with_file("app/components/base/base.services.js", "")
            .with_file("app/components/baseline/readme.txt", "");

        let shared: Vec<_> = base.shared_files().map(|(p, _)| p.to_string()).collect();
        assert_eq!(shared, vec!["app/components/baseline/readme.txt", "index.html"]);
    }

    #[test]
    fn missing_base_file_is_reported() {
        let err = BaseCode::new().get(BaseFileKind::Services).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingBaseFile {
                path: "app/components/base/base.services.js".into()
            }
        );
        assert!(BaseCode::new().ensure_complete().is_err());
    }
}
