//! Output location rules.

use std::path::{Path, PathBuf};

/// Output folder spellings that stand for the working directory.
///
/// Only these exact strings are substituted; other relative forms such as
/// `.` or `./out` resolve normally.
const WORKING_DIR_ALIASES: [&str; 2] = ["./", "/"];

/// File name of the combined script for a script set.
pub fn combined_file_name(name: &str) -> String {
    format!("combined_{name}.sql")
}

/// Effective output directory for one pass.
///
/// Falls back to `base_dir` when no output folder was requested. Only a
/// requested folder is checked against the working-directory aliases.
/// Relative results are anchored at `working_dir`.
pub fn resolve_output_dir(
    requested: Option<&Path>,
    base_dir: &Path,
    working_dir: &Path,
) -> PathBuf {
    match requested {
        Some(dir) if is_working_dir_alias(dir) => working_dir.to_path_buf(),
        Some(dir) => working_dir.join(dir),
        None => working_dir.join(base_dir),
    }
}

fn is_working_dir_alias(dir: &Path) -> bool {
    dir.to_str().is_some_and(|raw| WORKING_DIR_ALIASES.contains(&raw))
}
