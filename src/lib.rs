//! Transpatch - translation generator and patcher for embedded locale tables
//!
//! Transpatch is a CLI tool and library for maintaining translation tables
//! embedded in source files. It locates a base-language section by marker
//! lines and brace balance, rewrites its entries through per-language term
//! dictionaries while protecting placeholders and command tokens, and
//! injects the generated sections back into the file exactly once. A second
//! mode replaces an arbitrary marker-bounded span in free-form code.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `commands`: One module per subcommand, returning printable summaries
//! - `config`: Configuration file loading and parsing
//! - `document`: Line-oriented document buffer with atomic writes
//! - `inject`: Section append and span replacement
//! - `section`: Marker and bracket-balance section location
//! - `tables`: Ordered per-language term dictionaries
//! - `translate`: Token-preserving value and entry translation

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod inject;
pub mod section;
pub mod tables;
pub mod translate;
