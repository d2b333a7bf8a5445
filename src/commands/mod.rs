//! Command implementations and their summary types.
//!
//! Each command returns a [`CommandResult`] describing what happened (or
//! what would happen in a dry run); rendering is left to the report layer
//! so the command logic stays printable-free and testable.

pub mod generate;
pub mod patch;

pub use generate::generate;
pub use patch::patch;

use crate::inject::InjectOutcome;

/// Outcome of one CLI command.
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// True when a dry run found work that `--apply` would perform.
    pub fn pending_changes(&self) -> bool {
        match &self.summary {
            CommandSummary::Generate(summary) => {
                !summary.is_apply && summary.inserted_count() > 0
            }
            CommandSummary::Patch(summary) => !summary.is_apply && summary.changed,
            CommandSummary::Init(_) => false,
        }
    }
}

pub enum CommandSummary {
    Generate(GenerateSummary),
    Patch(PatchSummary),
    Init(InitSummary),
}

/// Per-language outcome of a generate run.
pub struct SectionOutcome {
    pub lang: String,
    pub outcome: InjectOutcome,
    /// False when the language has no dictionary and the base text was
    /// copied as-is.
    pub has_dictionary: bool,
}

pub struct GenerateSummary {
    pub is_apply: bool,
    pub file: String,
    pub base_section: String,
    pub reference_section: String,
    /// Lines of base content each generated section is derived from.
    pub base_lines: usize,
    pub sections: Vec<SectionOutcome>,
}

impl GenerateSummary {
    pub fn inserted_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.outcome, InjectOutcome::Inserted { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.sections.len() - self.inserted_count()
    }

    pub fn inserted_lines(&self) -> usize {
        self.sections
            .iter()
            .filter_map(|s| match s.outcome {
                InjectOutcome::Inserted { lines } => Some(lines),
                InjectOutcome::AlreadyPresent => None,
            })
            .sum()
    }
}

pub struct PatchSummary {
    pub is_apply: bool,
    pub file: String,
    /// False when the patched content equals the input (replacement was
    /// already in place).
    pub changed: bool,
    pub lines_before: usize,
    pub lines_after: usize,
}

pub struct InitSummary {
    pub created: bool,
}
