use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay under the output root.
///
/// Invariant: only normal components (and `.`). Never absolute, never `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path leaves the root (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            check_contained(&path).is_ok(),
            "RelativePath must stay under the root: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check_contained(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check_contained(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    /// Whether this path lives under `dir` (component-wise).
    pub fn starts_with(&self, dir: impl AsRef<Path>) -> bool {
        self.0.starts_with(dir)
    }

    /// Directory part, empty for top-level files.
    pub fn parent(&self) -> &Path {
        self.0.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn extension(&self) -> Option<&str> {
        self.0.extension().and_then(|e| e.to_str())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

fn check_contained(path: &Path) -> Result<(), DomainError> {
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        });
    }
    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(DomainError::PathEscapesRoot {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward slashes everywhere so generated paths read the same on every OS.
        let mut first = true;
        for component in self.0.components() {
            if !first {
                f.write_str("/")?;
            }
            first = false;
            write!(f, "{}", component.as_os_str().to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_paths() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("app/app.js").is_ok());
    }

    #[test]
    fn rejects_parent_components() {
        assert!(matches!(
            RelativePath::try_new("app/components/../../../escaped/x.js"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            RelativePath::new("app").join("../up"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(RelativePath::try_new("./app/app.js").is_ok());
    }

    #[test]
    #[should_panic(expected = "must stay under the root")]
    fn new_panics_on_parent_component() {
        RelativePath::new("../outside");
    }

    #[test]
    fn parent_of_top_level_file_is_empty() {
        assert_eq!(RelativePath::new("index.html").parent(), Path::new(""));
        assert_eq!(
            RelativePath::new("app/components/home/home.controller.js").parent(),
            Path::new("app/components/home")
        );
    }

    #[test]
    fn displays_with_forward_slashes() {
        let path = RelativePath::new("app").join("components").unwrap();
        assert_eq!(path.to_string(), "app/components");
    }
}
