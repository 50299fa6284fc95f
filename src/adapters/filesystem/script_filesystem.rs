//! `ScriptFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::ports::ScriptFilesystem;

use super::{LocalFilesystem, decode_text};

impl ScriptFilesystem for LocalFilesystem {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        let (text, had_errors) = decode_text(&bytes);
        if had_errors {
            warn!(path = %path.display(), "Replaced invalid UTF-8 sequences with U+FFFD");
        }
        Ok(text)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
