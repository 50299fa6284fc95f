//! dsgen: combine manifest-listed SQL scripts into single install and rollback scripts.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::LocalFilesystem;
use app::{AppContext, commands};

pub use app::commands::combine::CombineOutcome;
pub use app::commands::generate::Progress;
pub use domain::{AppError, GenerateOptions, ScriptSetKind};

/// Combine the scripts listed in `<base_dir>/manifest.txt` into
/// `combined_<name>.sql`.
///
/// Relative paths resolve against the current directory. The file is written
/// to `output_dir` when given, otherwise into `base_dir`.
pub fn combine(
    base_dir: &Path,
    name: &str,
    output_dir: Option<&Path>,
) -> Result<CombineOutcome, AppError> {
    let ctx = AppContext::current(LocalFilesystem::new())?;
    commands::combine::execute(&ctx, base_dir, name, output_dir)
}

/// Generate `combined_install.sql` and `combined_rollback.sql`.
///
/// Both manifests and the output folder are checked before anything is
/// written. Returns one outcome per script set, install first.
pub fn generate(options: &GenerateOptions) -> Result<Vec<CombineOutcome>, AppError> {
    let ctx = AppContext::current(LocalFilesystem::new())?;
    commands::generate::execute(&ctx, options, |_| {})
}

/// Like [`generate`], anchored at an explicit working directory.
pub fn generate_in(
    working_dir: &Path,
    options: &GenerateOptions,
    report: impl FnMut(Progress<'_>),
) -> Result<Vec<CombineOutcome>, AppError> {
    let ctx = AppContext::new(LocalFilesystem::new(), working_dir);
    commands::generate::execute(&ctx, options, report)
}
