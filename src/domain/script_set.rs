use std::fmt;
use std::path::{Path, PathBuf};

use super::Manifest;

/// The two script sets a deployment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptSetKind {
    Install,
    Rollback,
}

impl ScriptSetKind {
    /// Processing order: install first, then rollback.
    pub const ALL: [ScriptSetKind; 2] = [ScriptSetKind::Install, ScriptSetKind::Rollback];

    /// Label used in messages and in the `combined_<name>.sql` file name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptSetKind::Install => "install",
            ScriptSetKind::Rollback => "rollback",
        }
    }
}

impl fmt::Display for ScriptSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named base directory together with the script paths its manifest lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSet {
    name: String,
    base_dir: PathBuf,
    scripts: Vec<PathBuf>,
}

impl ScriptSet {
    /// Resolve every manifest entry against `base_dir`, keeping manifest order.
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>, manifest: &Manifest) -> Self {
        let base_dir = base_dir.into();
        let scripts = manifest.entries().iter().map(|entry| base_dir.join(entry)).collect();
        Self { name: name.into(), base_dir, scripts }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn scripts(&self) -> &[PathBuf] {
        &self.scripts
    }

    /// Number of scripts found in the manifest.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
