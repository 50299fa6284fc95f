//! Filesystem operations needed to combine scripts.
//!
//! This port only moves text in and out of files. Path resolution and the
//! meaning of manifests and output names belong to the domain.

use std::io;
use std::path::Path;

/// Port for the file reads and writes a combiner pass performs.
///
/// Paths are passed through unchanged; callers resolve them against the
/// working directory first.
pub trait ScriptFilesystem {
    /// Read a whole file as text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Replace the contents of a file, creating it if needed.
    ///
    /// Parent directories are not created.
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Check whether a directory exists at `path`.
    fn is_dir(&self, path: &Path) -> bool;
}
