//! Token-preserving text translation.
//!
//! Values are rewritten term-by-term from an ordered dictionary while two
//! token classes survive byte-for-byte: `{placeholder}` substitutions and
//! `/command` values. Placeholders are parked behind `__PH<i>__` sentinels
//! for the duration of the substitution pass and restored afterwards.
//!
//! This is deliberately not linguistic translation. Terms missing from the
//! dictionary stay in the source language, capitalization and spacing of
//! replaced terms follow the dictionary verbatim, and a later rule may
//! re-match text produced by an earlier one. Callers rely on that exact
//! behavior.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::tables::CompiledTables;

/// A value that is a bot command and nothing else, e.g. `/status`.
static COMMAND_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/[a-z_]+$").unwrap());

/// `{name}`-style placeholders; no nesting, shortest match.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap());

/// One table entry: indent, key, quoted value, optional comma, trailing
/// whitespace. Both `"` and `` ` `` quotes are accepted.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(\s*)([a-z_]+):\s*["`](.+?)["`](,?)(\s*)$"#).unwrap());

fn sentinel(index: usize) -> String {
    format!("__PH{}__", index)
}

/// Translate a single value, protecting placeholders and commands.
///
/// Unknown language codes fall back to identity: the text goes through the
/// placeholder round trip and comes back otherwise unchanged.
pub fn translate_value(text: &str, lang: &str, tables: &CompiledTables) -> String {
    if COMMAND_REGEX.is_match(text.trim()) {
        return text.to_string();
    }

    let placeholders: Vec<String> = PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let mut work = text.to_string();
    for (i, placeholder) in placeholders.iter().enumerate() {
        work = work.replacen(placeholder.as_str(), &sentinel(i), 1);
    }

    if let Some(rules) = tables.get(lang) {
        for rule in rules {
            work = rule
                .pattern
                .replace_all(&work, NoExpand(&rule.replacement))
                .into_owned();
        }
    }

    for (i, placeholder) in placeholders.iter().enumerate() {
        work = work.replacen(&sentinel(i), placeholder.as_str(), 1);
    }
    work
}

/// Translate one table line.
///
/// Lines matching the entry grammar get their value translated and their
/// quoting normalized to `"`; key, comma and surrounding whitespace are
/// kept exactly. Anything else (blank lines, comments, malformed entries)
/// passes through verbatim.
pub fn translate_entry(line: &str, lang: &str, tables: &CompiledTables) -> String {
    match ENTRY_REGEX.captures(line) {
        Some(caps) => format!(
            "{}{}: \"{}\"{}{}",
            &caps[1],
            &caps[2],
            translate_value(&caps[3], lang, tables),
            &caps[4],
            &caps[5],
        ),
        None => line.to_string(),
    }
}

/// Translate a block of table lines for one language.
pub fn translate_lines(lines: &[String], lang: &str, tables: &CompiledTables) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                line.clone()
            } else {
                translate_entry(line, lang, tables)
            }
        })
        .collect()
}
