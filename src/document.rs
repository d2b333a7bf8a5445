//! Line-oriented document buffer.
//!
//! A [`Document`] owns the full text of one file for the duration of a
//! single operation: read, transform, write back. Lines are split on `\n`
//! so CRLF endings survive untouched inside each line, and the presence of
//! a trailing newline is preserved across the round trip.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// An in-memory document as an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Build a document from raw file content.
    pub fn parse(content: &str) -> Self {
        let trailing_newline = content.ends_with('\n');
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        if trailing_newline {
            // split leaves one empty element after the final newline
            lines.pop();
        }
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Read and parse a document from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert lines before index `at`, shifting the rest of the document.
    pub fn insert(&mut self, at: usize, lines: Vec<String>) {
        self.lines.splice(at..at, lines);
    }

    /// Reassemble the document into a single string.
    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        if self.trailing_newline {
            content.push('\n');
        }
        content
    }

    /// Write the document to `path` via a temporary file in the same
    /// directory, renamed over the target. The previous file stays intact
    /// unless the whole write completes.
    pub fn write(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if parent != Path::new("") => PathBuf::from(parent),
            _ => PathBuf::from("."),
        };
        let mut tmp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
        tmp.write_all(self.render().as_bytes())
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tmp.persist(path)
            .with_context(|| format!("Failed to replace file: {}", path.display()))?;
        Ok(())
    }
}
