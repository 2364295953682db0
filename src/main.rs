//! Postgen - batch converter from Markdown blog posts to binary content records.

mod cli;
mod content;
mod error;
mod logger;
mod markdown;
mod pipeline;
mod store;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use std::time::Instant;
use utils::plural_count;

fn main() -> Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let stats = pipeline::run(&cli.input_dir, &cli.output_dir)?;

    log!(
        "convert";
        "done, {} in {} ms",
        plural_count(stats.posts, "post"),
        started.elapsed().as_millis()
    );
    Ok(())
}
