//! Manifest parsing.
//!
//! A manifest lists script paths, one per line, relative to the directory that
//! contains it. Entry order is the concatenation order and is kept verbatim.

use std::path::{Path, PathBuf};

use super::LINE_SEPARATOR;

/// File name of the manifest inside a base directory.
pub const MANIFEST_FILE: &str = "manifest.txt";

/// Ordered script entries read from a `manifest.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Parse manifest text split on the platform line separator.
    pub fn parse(content: &str) -> Self {
        Self::parse_with_separator(content, LINE_SEPARATOR)
    }

    /// Parse manifest text split on an explicit separator.
    ///
    /// Empty entries are dropped. Entries are not trimmed, so a line holding
    /// only spaces is kept as an entry.
    pub fn parse_with_separator(content: &str, separator: &str) -> Self {
        let entries = content
            .split(separator)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Location of the manifest inside `base_dir`.
    pub fn path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(MANIFEST_FILE)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
