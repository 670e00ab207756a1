//! svgs-to-icons - turn a folder of SVG files into CSS icon classes.

mod cli;
mod config;
mod demo;
mod icon;
mod logger;
mod pipeline;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BuildConfig;
use pipeline::BuildPipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = BuildConfig::load(&cli)?;
    debug!("config"; "{:?}", config);

    let result = BuildPipeline::new(&config).quiet(cli.quiet).process();

    match &result.error {
        Some(error) if !result.success => {
            log!("error"; "Processing failed: {}", error);
            std::process::exit(1);
        }
        _ => cli::report::print_success(&config.output, &result),
    }

    Ok(())
}
