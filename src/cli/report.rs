//! Report formatting and printing utilities.
//!
//! This module is separate from the command logic to allow transpatch to
//! be used as a library without printing side effects.

use colored::Colorize;

use crate::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, PatchSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::inject::InjectOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose),
        CommandSummary::Patch(summary) => print_patch(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_generate(summary: &GenerateSummary, verbose: bool) {
    if verbose {
        println!(
            "Translating {} line(s) from section \"{}\", inserting after \"{}\"",
            summary.base_lines, summary.base_section, summary.reference_section
        );
    }

    for section in &summary.sections {
        match section.outcome {
            InjectOutcome::Inserted { lines } => {
                let note = if section.has_dictionary {
                    String::new()
                } else {
                    format!(" {}", "(no dictionary, copied as-is)".dimmed())
                };
                println!("  {} {}: {} line(s){}", "+".green(), section.lang, lines, note);
            }
            InjectOutcome::AlreadyPresent => {
                println!(
                    "  {} {}: already present, skipped",
                    "=".dimmed(),
                    section.lang
                );
            }
        }
    }

    let inserted = summary.inserted_count();
    if inserted == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} section(s) already present in {} - nothing to do",
                summary.sections.len(),
                summary.file
            )
            .green()
        );
    } else if summary.is_apply {
        println!(
            "{} {} section(s) ({} line(s)) into {}",
            "Injected".green().bold(),
            inserted,
            summary.inserted_lines(),
            summary.file
        );
        if summary.skipped_count() > 0 {
            println!("  - skipped: {} section(s) already present", summary.skipped_count());
        }
    } else {
        println!(
            "{} {} section(s) ({} line(s)) into {}",
            "Would inject".yellow().bold(),
            inserted,
            summary.inserted_lines(),
            summary.file
        );
        println!("Run with {} to write the file.", "--apply".cyan());
    }
}

fn print_patch(summary: &PatchSummary) {
    if !summary.changed {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Span already matches in {} - nothing to do", summary.file).green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} ({} -> {} line(s))",
            "Patched".green().bold(),
            summary.file,
            summary.lines_before,
            summary.lines_after
        );
    } else {
        println!(
            "{} {} ({} -> {} line(s))",
            "Would patch".yellow().bold(),
            summary.file,
            summary.lines_before,
            summary.lines_after
        );
        println!("Run with {} to write the file.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
