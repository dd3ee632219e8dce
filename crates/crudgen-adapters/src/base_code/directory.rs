//! Directory-backed base code.
//!
//! Reads every regular file under a root directory, keyed by its path
//! relative to that root:
//!
//! ```text
//! my-base/
//! ├── index.html
//! └── app/
//!     ├── app.js
//!     ├── app.states.js
//!     └── components/
//!         ├── base/            ← per-object skeletons
//!         ├── home/
//!         └── layout/views/
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crudgen_core::{
    application::{ApplicationError, ports::BaseCodeSource},
    domain::{BaseCode, RelativePath},
    error::CrudgenResult,
};

/// Loads base code from a directory tree.
#[derive(Debug, Clone)]
pub struct DirectoryBaseCode {
    root: PathBuf,
}

impl DirectoryBaseCode {
    /// The directory does not need to exist yet; [`BaseCodeSource::load`]
    /// reports it when missing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unavailable(&self, reason: impl Into<String>) -> ApplicationError {
        ApplicationError::BaseCodeUnavailable {
            source_name: self.root.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl BaseCodeSource for DirectoryBaseCode {
    /// Load every file and check the generator's required files exist.
    ///
    /// Non-UTF-8 files are skipped with a `WARN` log; base code is text.
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn load(&self) -> CrudgenResult<BaseCode> {
        if !self.root.is_dir() {
            return Err(self.unavailable("directory not found").into());
        }

        let mut base = BaseCode::new();

        for walk_entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            let walk_entry =
                walk_entry.map_err(|e| self.unavailable(format!("directory walk error: {e}")))?;

            if !walk_entry.file_type().is_file() {
                continue; // Directories are implied by file paths; skip symlinks.
            }

            let abs_path = walk_entry.path();
            let rel_raw = abs_path.strip_prefix(&self.root).map_err(|_| {
                self.unavailable(format!("failed to relativise '{}'", abs_path.display()))
            })?;
            let rel_path = normalize_path(&rel_raw.to_string_lossy());

            match fs::read_to_string(abs_path) {
                Ok(content) => {
                    debug!(path = %rel_path, bytes = content.len(), "base file read");
                    base.insert(RelativePath::new(rel_path), content);
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    warn!(path = %rel_path, "skipping non-UTF-8 base file");
                }
                Err(e) => {
                    return Err(self
                        .unavailable(format!("failed to read '{rel_path}': {e}"))
                        .into());
                }
            }
        }

        base.ensure_complete()?;
        debug!(count = base.len(), "finished loading base code");
        Ok(base)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Normalise to forward slashes so Windows and Unix keys compare identically.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
