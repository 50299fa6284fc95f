//! One combiner pass: manifest in, `combined_<name>.sql` out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, CombinedScript, Manifest, ScriptSet, combined_file_name, resolve_output_dir,
};
use crate::ports::ScriptFilesystem;

/// Result of a completed pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    /// Script set name, as used in the output file name.
    pub name: String,
    /// Scripts combined, in manifest order.
    pub scripts: Vec<PathBuf>,
    /// Absolute location of the written file.
    pub output_path: PathBuf,
    /// Output location relative to the working directory.
    pub display_path: PathBuf,
}

impl CombineOutcome {
    /// Number of scripts found in the manifest.
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }
}

/// Read the manifest in `base_dir` and resolve the scripts it lists.
///
/// Listed scripts are not checked for existence here.
pub fn load<F>(ctx: &AppContext<F>, base_dir: &Path, name: &str) -> Result<ScriptSet, AppError>
where
    F: ScriptFilesystem,
{
    let base_dir = ctx.resolve(base_dir);
    let manifest_path = Manifest::path_in(&base_dir);
    let text = ctx
        .filesystem()
        .read_text(&manifest_path)
        .map_err(|source| AppError::ManifestRead { path: manifest_path.clone(), source })?;

    let manifest = Manifest::parse(&text);
    debug!(manifest = %manifest_path.display(), entries = manifest.len(), "Parsed manifest");
    Ok(ScriptSet::new(name, base_dir, &manifest))
}

/// Concatenate the scripts of `set` and write the combined file.
///
/// The first unreadable script aborts the pass before anything is written.
pub fn write<F>(
    ctx: &AppContext<F>,
    set: &ScriptSet,
    output_dir: Option<&Path>,
) -> Result<CombineOutcome, AppError>
where
    F: ScriptFilesystem,
{
    let mut combined = CombinedScript::new();
    for script in set.scripts() {
        let content = ctx
            .filesystem()
            .read_text(script)
            .map_err(|source| AppError::ScriptRead { path: script.clone(), source })?;
        debug!(script = %script.display(), bytes = content.len(), "Appending script");
        combined.append(&content);
    }

    let output_dir = resolve_output_dir(output_dir, set.base_dir(), ctx.working_dir());
    let output_path = output_dir.join(combined_file_name(set.name()));
    ctx.filesystem()
        .write_text(&output_path, combined.as_str())
        .map_err(|source| AppError::OutputWrite { path: output_path.clone(), source })?;

    info!(
        set = set.name(),
        scripts = combined.section_count(),
        output = %output_path.display(),
        "Wrote combined script"
    );

    Ok(CombineOutcome {
        name: set.name().to_string(),
        scripts: set.scripts().to_vec(),
        display_path: ctx.display_path(&output_path),
        output_path,
    })
}

/// Run a full pass for the script set in `base_dir`.
pub fn execute<F>(
    ctx: &AppContext<F>,
    base_dir: &Path,
    name: &str,
    output_dir: Option<&Path>,
) -> Result<CombineOutcome, AppError>
where
    F: ScriptFilesystem,
{
    let set = load(ctx, base_dir, name)?;
    write(ctx, &set, output_dir)
}
