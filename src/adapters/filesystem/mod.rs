//! Filesystem adapter for the `ScriptFilesystem` port.

mod script_filesystem;

use encoding_rs::UTF_8;

/// `ScriptFilesystem` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

/// Decode file bytes as text.
///
/// A UTF-8, UTF-16 LE, or UTF-16 BE byte order mark selects the encoding and
/// is removed. Without one the bytes are read as UTF-8, and malformed
/// sequences become U+FFFD instead of failing the read.
pub(crate) fn decode_text(bytes: &[u8]) -> (String, bool) {
    let (text, _encoding, had_errors) = UTF_8.decode(bytes);
    (text.into_owned(), had_errors)
}
