//! Injection of generated content back into a document.
//!
//! Two write paths:
//!
//! - [`SectionInjector`] appends whole named sections after a reference
//!   section, once each. Re-running the same batch is a no-op: a section
//!   whose marker already exists anywhere in the document is skipped and
//!   reported as [`InjectOutcome::AlreadyPresent`].
//! - [`patch_span`] replaces one marker-bounded span in a flat buffer.
//!   It is a pure function, so a failed patch cannot leave the caller's
//!   document half-modified.

use anyhow::{Context, Result};

use crate::document::Document;
use crate::section::{find_braced_section, section_marker};

/// What happened to one appended section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The section was inserted; `lines` counts marker and closing lines.
    Inserted { lines: usize },
    /// A marker for this section already exists; nothing was written.
    AlreadyPresent,
}

/// Appends named sections after a reference section, keeping an exact
/// insertion cursor so a multi-section batch lands in call order without
/// rescanning the document.
pub struct SectionInjector<'a> {
    doc: &'a mut Document,
    cursor: usize,
}

impl<'a> SectionInjector<'a> {
    /// Position the cursor one past the closing line of `reference`.
    ///
    /// Fails loudly when the reference section is missing or never closes;
    /// nothing is inserted in that case.
    pub fn after(doc: &'a mut Document, reference: &str) -> Result<Self> {
        let anchor = find_braced_section(doc.lines(), reference)
            .with_context(|| format!("Section \"{}\" not found or never closed", reference))?;
        let cursor = anchor.end;
        Ok(Self { doc, cursor })
    }

    /// Current insertion line index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append one section wrapped as `  <name>: { ... },`.
    ///
    /// The cursor advances by the number of lines inserted, so the next
    /// `append` lands right after this one.
    pub fn append(&mut self, name: &str, body: &[String]) -> InjectOutcome {
        let marker = section_marker(name);
        if self.doc.lines().iter().any(|line| line.trim() == marker) {
            return InjectOutcome::AlreadyPresent;
        }

        let mut block = Vec::with_capacity(body.len() + 2);
        block.push(format!("  {}: {{", name));
        block.extend(body.iter().cloned());
        block.push("  },".to_string());

        let lines = block.len();
        self.doc.insert(self.cursor, block);
        self.cursor += lines;
        InjectOutcome::Inserted { lines }
    }
}

/// Replace the span from the first occurrence of `start_marker` through the
/// first occurrence of `end_marker` at or after it, end marker included.
///
/// Both markers are literal substrings. A missing marker is an error and
/// the input is returned untouched — there is no partial-success mode,
/// since a replacement missing one bound would corrupt the document.
pub fn patch_span(
    content: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String> {
    let start = content
        .find(start_marker)
        .with_context(|| format!("Start marker not found: \"{}\"", start_marker))?;
    let end = content[start..]
        .find(end_marker)
        .map(|offset| start + offset + end_marker.len())
        .with_context(|| format!("End marker not found: \"{}\"", end_marker))?;

    Ok(format!(
        "{}{}{}",
        &content[..start],
        replacement,
        &content[end..]
    ))
}
