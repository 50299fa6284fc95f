use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure not tied to a specific script file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No manifest.txt directly inside the given base directory.
    #[error("Could not find manifest at '{0}'!!")]
    ManifestNotFound(String),

    /// Requested output folder does not exist as a directory.
    #[error("Output directory '{0}' does not exist.")]
    OutputDirectoryNotFound(String),

    /// Manifest exists but could not be read.
    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A script listed in the manifest is missing or unreadable.
    #[error("Failed to read script {}: {source}", .path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Combined script could not be written.
    #[error("Failed to write combined script {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Whether this failure was caught by pre-flight validation.
    ///
    /// Configuration errors are reported on standard output without the
    /// `Error:` prefix; everything else is a resource failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::ManifestNotFound(_) | AppError::OutputDirectoryNotFound(_))
    }

    /// Closest `io::ErrorKind` for this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ManifestNotFound(_) | AppError::OutputDirectoryNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::ManifestRead { source, .. }
            | AppError::ScriptRead { source, .. }
            | AppError::OutputWrite { source, .. } => source.kind(),
        }
    }
}
