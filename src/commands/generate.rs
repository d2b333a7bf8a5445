//! The `generate` command.
//!
//! Extracts the base-language section from the locale table, produces one
//! translated section per requested language, and injects each after the
//! reference section. Dry-run by default; `--apply` writes the file.
//! Languages whose section already exists are skipped, so re-running after
//! adding a language to the config only inserts the new one.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, GenerateSummary, SectionOutcome};
use crate::cli::args::GenerateCommand;
use crate::config::load_config;
use crate::document::Document;
use crate::inject::SectionInjector;
use crate::section::find_delimited_section;
use crate::tables::TranslationTables;
use crate::translate::translate_lines;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = cmd.args;

    let mut config = load_config(&env::current_dir()?)?.config;
    if let Some(base) = args.base {
        config.base_section = base;
    }
    if let Some(reference) = args.reference {
        config.reference_section = reference;
    }
    if !args.langs.is_empty() {
        config.languages = args.langs;
    }
    if let Some(terms_file) = args.terms_file {
        config.terms_file = Some(terms_file.to_string_lossy().into_owned());
    }
    config.validate()?;

    let path: PathBuf = args
        .common
        .file
        .or_else(|| config.source_file.as_deref().map(PathBuf::from))
        .context("No file given: pass --file or set sourceFile in the config file")?;

    let mut doc = Document::read(&path)?;

    let base =
        find_delimited_section(doc.lines(), &config.base_section, &config.reference_section)
            .with_context(|| {
                format!(
                    "Base section \"{}\" (delimited by \"{}\") not found in {}",
                    config.base_section,
                    config.reference_section,
                    path.display()
                )
            })?;
    let base_body: Vec<String> = doc.lines()[base.body()].to_vec();

    let mut tables = TranslationTables::builtin();
    if let Some(terms_file) = &config.terms_file {
        tables.merge_file(Path::new(terms_file))?;
    }
    let tables = tables.compile()?;

    let mut injector = SectionInjector::after(&mut doc, &config.reference_section)?;
    let mut sections = Vec::with_capacity(config.languages.len());
    for lang in &config.languages {
        let body = translate_lines(&base_body, lang, &tables);
        let outcome = injector.append(lang, &body);
        sections.push(SectionOutcome {
            lang: lang.clone(),
            outcome,
            has_dictionary: tables.supports(lang),
        });
    }

    let summary = GenerateSummary {
        is_apply: args.apply,
        file: path.display().to_string(),
        base_section: config.base_section,
        reference_section: config.reference_section,
        base_lines: base_body.len(),
        sections,
    };

    if args.apply && summary.inserted_count() > 0 {
        doc.write(&path)?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Generate(summary),
    })
}
