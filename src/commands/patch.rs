//! The `patch` command.
//!
//! Replaces the span between two literal markers with replacement text
//! from a file or an inline argument. Both markers must be present; a
//! missing marker aborts before anything is written.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, PatchSummary};
use crate::cli::args::PatchCommand;
use crate::config::load_config;
use crate::document::Document;
use crate::inject::patch_span;

pub fn patch(cmd: PatchCommand) -> Result<CommandResult> {
    let args = cmd.args;

    let config = load_config(&env::current_dir()?)?.config;
    let path: PathBuf = args
        .common
        .file
        .or_else(|| config.source_file.as_deref().map(PathBuf::from))
        .context("No file given: pass --file or set sourceFile in the config file")?;

    let replacement = match (args.replacement, args.text) {
        (Some(replacement_path), None) => fs::read_to_string(&replacement_path)
            .with_context(|| {
                format!(
                    "Failed to read replacement file: {}",
                    replacement_path.display()
                )
            })?,
        (None, Some(text)) => text,
        _ => bail!("Provide exactly one of --replacement or --text"),
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let patched = patch_span(&content, &args.start, &args.end, &replacement)?;
    let changed = patched != content;

    let summary = PatchSummary {
        is_apply: args.apply,
        file: path.display().to_string(),
        changed,
        lines_before: content.lines().count(),
        lines_after: patched.lines().count(),
    };

    if args.apply && changed {
        Document::parse(&patched).write(&path)?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Patch(summary),
    })
}
