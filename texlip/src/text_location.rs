//! Line locations inside the input document, used in error reports.

use std::fmt;
use std::path::PathBuf;

/// A line within the input document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLocation {
    /// The document path (if known).
    pub filename: Option<PathBuf>,
    /// Line number (1-indexed).
    pub line: usize,
}

impl TextLocation {
    /// Creates a location with only line information.
    pub fn line_only(line: usize) -> Self {
        Self {
            filename: None,
            line,
        }
    }

    /// Creates a location with file and line.
    pub fn file_line(filename: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            filename: Some(filename.into()),
            line,
        }
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        Self::line_only(1)
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
