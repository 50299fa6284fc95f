//! Install and rollback generation: pre-flight checks, then one pass per set.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, GenerateOptions, Manifest, ScriptSetKind};
use crate::ports::ScriptFilesystem;

use super::combine::{self, CombineOutcome};

/// Progress notifications emitted while generating.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// A manifest was read.
    Found { name: &'a str, count: usize },
    /// A combined script was written.
    Generated(&'a CombineOutcome),
}

/// Validate that both manifests and the output folder exist.
///
/// Nothing is read or written when this fails.
pub fn preflight<F>(ctx: &AppContext<F>, options: &GenerateOptions) -> Result<(), AppError>
where
    F: ScriptFilesystem,
{
    for kind in ScriptSetKind::ALL {
        let base_dir = options.base_dir(kind);
        if !has_manifest(ctx, base_dir) {
            return Err(AppError::ManifestNotFound(base_dir.display().to_string()));
        }
    }

    if let Some(output_dir) = options.output_dir() {
        if !ctx.filesystem().is_dir(&ctx.resolve(output_dir)) {
            return Err(AppError::OutputDirectoryNotFound(output_dir.display().to_string()));
        }
    }

    Ok(())
}

fn has_manifest<F: ScriptFilesystem>(ctx: &AppContext<F>, base_dir: &Path) -> bool {
    ctx.filesystem().is_file(&Manifest::path_in(&ctx.resolve(base_dir)))
}

/// Run pre-flight checks, then the install pass and the rollback pass.
///
/// Passes run in order and a failed rollback pass leaves the install output
/// in place.
pub fn execute<F>(
    ctx: &AppContext<F>,
    options: &GenerateOptions,
    mut report: impl FnMut(Progress<'_>),
) -> Result<Vec<CombineOutcome>, AppError>
where
    F: ScriptFilesystem,
{
    preflight(ctx, options)?;

    let mut outcomes = Vec::with_capacity(ScriptSetKind::ALL.len());
    for kind in ScriptSetKind::ALL {
        let set = combine::load(ctx, options.base_dir(kind), kind.as_str())?;
        report(Progress::Found { name: set.name(), count: set.len() });

        let outcome = combine::write(ctx, &set, options.output_dir())?;
        report(Progress::Generated(&outcome));
        outcomes.push(outcome);
    }

    Ok(outcomes)
}
