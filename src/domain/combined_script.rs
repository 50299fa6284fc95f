use super::LINE_SEPARATOR;

/// Text buffer holding script bodies in order, each followed by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedScript {
    buffer: String,
    sections: usize,
}

impl CombinedScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one script body verbatim, then two line separators.
    pub fn append(&mut self, content: &str) {
        self.buffer.push_str(content);
        self.buffer.push_str(LINE_SEPARATOR);
        self.buffer.push_str(LINE_SEPARATOR);
        self.sections += 1;
    }

    /// Number of scripts appended so far.
    pub fn section_count(&self) -> usize {
        self.sections
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
