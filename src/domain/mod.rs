//! Domain model: manifests, script sets, and the combined output buffer.

mod combined_script;
pub mod error;
mod manifest;
mod options;
mod output_target;
mod script_set;

pub use combined_script::CombinedScript;
pub use error::AppError;
pub use manifest::{MANIFEST_FILE, Manifest};
pub use options::GenerateOptions;
pub use output_target::{combined_file_name, resolve_output_dir};
pub use script_set::{ScriptSet, ScriptSetKind};

/// Line separator of the host platform.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Line separator of the host platform.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
