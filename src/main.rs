//! Wojek - attribute hash tooling for the wojek avatar set.

#![allow(dead_code)]

mod cli;
mod codec;
mod config;
mod hash;
mod logger;
mod migrate;
mod rect;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::WojekConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = WojekConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Migrate { args } => cli::migrate::run(args),
        Commands::Render { args } => cli::render::run(args, &config),
        Commands::Hash { args } => cli::hash::run(args, &config.hash),
    }
}
