//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: translate the base section and inject one section per
//!   target language
//! - `patch`: replace a marker-bounded span with new content
//! - `init`: initialize a transpatch configuration file
//!
//! Mutating commands are dry-run by default and only write with `--apply`.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Patch(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// File containing the embedded locale table (overrides config file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Target language to generate (default: config languages)
    /// Can be specified multiple times: --lang de --lang fr
    #[arg(long = "lang")]
    pub langs: Vec<String>,

    /// Section to translate from (overrides config file)
    #[arg(long)]
    pub base: Option<String>,

    /// Section after which new sections are inserted (overrides config file)
    #[arg(long)]
    pub reference: Option<String>,

    /// JSON terms file merged over the built-in dictionaries
    #[arg(long)]
    pub terms_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct PatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Literal start marker of the span to replace
    #[arg(long)]
    pub start: String,

    /// Literal end marker of the span to replace
    #[arg(long)]
    pub end: String,

    /// File whose contents replace the span
    #[arg(long)]
    pub replacement: Option<PathBuf>,

    /// Inline replacement text
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct PatchCommand {
    #[command(flatten)]
    pub args: PatchArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate the base section and inject one section per target language
    Generate(GenerateCommand),
    /// Replace a marker-bounded span with new content
    Patch(PatchCommand),
    /// Initialize a new .transpatchrc.json configuration file
    Init,
}
