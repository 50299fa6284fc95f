use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScriptFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ScriptFilesystem> {
    filesystem: F,
    working_dir: PathBuf,
}

impl<F: ScriptFilesystem> AppContext<F> {
    /// Create a context anchored at an explicit working directory.
    pub fn new(filesystem: F, working_dir: impl Into<PathBuf>) -> Self {
        Self { filesystem, working_dir: working_dir.into() }
    }

    /// Create a context anchored at the process's current directory.
    pub fn current(filesystem: F) -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(filesystem, cwd))
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Directory relative paths are resolved against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Anchor a caller-supplied path at the working directory.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Express `path` relative to the working directory for display.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.working_dir).unwrap_or_else(|| path.to_path_buf())
    }
}
