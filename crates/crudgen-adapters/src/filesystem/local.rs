//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use crudgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrudgenError, CrudgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> CrudgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_file_to_disk() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("app/components/cars");
        let file = dir.join("cars.services.js");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "angular.module('garage');").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "angular.module('garage');"
        );
    }

    #[test]
    fn remove_dir_all_deletes_tree() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = temp.path().join("out");

        fs.create_dir_all(&root.join("app")).unwrap();
        fs.write_file(&root.join("app/app.js"), "").unwrap();
        fs.remove_dir_all(&root).unwrap();

        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_into_missing_directory_maps_to_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&temp.path().join("nope/index.html"), "<html>")
            .unwrap_err();

        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
