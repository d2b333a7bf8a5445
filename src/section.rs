//! Section location inside semi-structured text.
//!
//! A section is a named block of lines opened by a marker line (`name: {`)
//! and closed where bracket nesting returns to balance. Three locator modes
//! cover the document shapes we patch:
//!
//! - [`find_braced_section`]: marker line plus brace-depth counting.
//! - [`find_delimited_section`]: a section known to be immediately followed
//!   by another named section; stops at the next marker, no counting.
//! - [`find_paren_span`]: parenthesis-depth counting anchored at an
//!   arbitrary literal substring, for free-form code rather than key/value
//!   tables.
//!
//! Depth counting is a structural heuristic, not a parser: bracket
//! characters inside string literals are counted like any other. Balanced
//! pairs such as `{user}` placeholders cancel out on their own line, but an
//! unbalanced bracket in quoted content will shift the detected end. Callers
//! operate on constrained, hand-written documents and accept this.

use std::ops::Range;

/// A named, contiguous block of lines within a document.
///
/// `start` is the index of the marker line; `end` is one past the line
/// where nesting depth first returned to zero, so the block occupies the
/// half-open range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

impl Section {
    /// Line range of the section content, excluding the marker line and
    /// the closing line.
    pub fn body(&self) -> Range<usize> {
        self.start + 1..self.end - 1
    }
}

/// The exact marker line opening a named section, before indentation.
pub fn section_marker(name: &str) -> String {
    format!("{}: {{", name)
}

fn marker_position(lines: &[String], marker: &str, from: usize) -> Option<usize> {
    lines[from..]
        .iter()
        .position(|line| line.trim() == marker)
        .map(|offset| from + offset)
}

/// Locate a named section by marker line and brace balance.
///
/// The depth counter starts at the marker line itself (which normally
/// contributes its opening brace) and counts every `{` and `}` on each
/// line; a single line may open and close several times. The section ends
/// at the first line past the marker where depth returns to zero or below.
///
/// Returns `None` when the marker is absent or the depth never returns to
/// balance before end of document.
pub fn find_braced_section(lines: &[String], name: &str) -> Option<Section> {
    let marker = section_marker(name);
    let start = marker_position(lines, &marker, 0)?;

    let mut depth: i64 = 0;
    for (i, line) in lines.iter().enumerate().skip(start) {
        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;
        if i > start && depth <= 0 {
            return Some(Section {
                name: name.to_string(),
                start,
                end: i + 1,
            });
        }
    }
    None
}

/// Locate a named section bounded by the marker of the section that
/// immediately follows it.
///
/// Used when the document grammar guarantees `next_name` opens right after
/// `name` closes: the scan stops at the next marker and walks backward to
/// the closing `},` line instead of counting braces.
pub fn find_delimited_section(lines: &[String], name: &str, next_name: &str) -> Option<Section> {
    let start = marker_position(lines, &section_marker(name), 0)?;
    let next = marker_position(lines, &section_marker(next_name), start + 1)?;

    let close = (start + 1..next).rev().find(|&i| lines[i].trim() == "},")?;
    Some(Section {
        name: name.to_string(),
        start,
        end: close + 1,
    })
}

/// Locate a parenthesis-balanced span in free-form code.
///
/// The anchor is the first line *containing* `marker` as a literal
/// substring (not a trimmed equality match); the balance scan is the same
/// as [`find_braced_section`] but over `(` and `)`.
pub fn find_paren_span(lines: &[String], marker: &str) -> Option<Section> {
    let start = lines.iter().position(|line| line.contains(marker))?;

    let mut depth: i64 = 0;
    for (i, line) in lines.iter().enumerate().skip(start) {
        depth += line.matches('(').count() as i64;
        depth -= line.matches(')').count() as i64;
        if i > start && depth <= 0 {
            return Some(Section {
                name: marker.to_string(),
                start,
                end: i + 1,
            });
        }
    }
    None
}
