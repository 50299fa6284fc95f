use std::path::{Path, PathBuf};

use super::ScriptSetKind;

/// Inputs for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Install scripts base directory.
    pub install_dir: PathBuf,
    /// Rollback scripts base directory.
    pub rollback_dir: PathBuf,
    /// Output destination folder; each set's base directory when absent.
    pub output_dir: Option<PathBuf>,
}

impl GenerateOptions {
    /// Base directory for a script set.
    pub fn base_dir(&self, kind: ScriptSetKind) -> &Path {
        match kind {
            ScriptSetKind::Install => &self.install_dir,
            ScriptSetKind::Rollback => &self.rollback_dir,
        }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}
