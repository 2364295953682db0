//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Postgen batch converter CLI
///
/// The surface is two positional directory paths; invocations with any
/// other positional count are rejected by clap before any processing.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input directory containing Markdown post files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input_dir: PathBuf,

    /// Output directory for serialized content records
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
