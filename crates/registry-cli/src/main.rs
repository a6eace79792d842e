//! Registry CLI
//!
//! Syncs shared AWS profile registries into a config file as generated blocks.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let sync = commands::open(&cli.config, cli.settings.as_deref())?;
    tracing::debug!(config = %sync.config_path(), "using config file");

    match cli.command {
        Commands::List { json } => commands::run_list(&sync, json),
        Commands::RemoveAll => commands::run_remove_all(&sync),
        Commands::Remove { source } => commands::run_remove(&sync, &source),
        Commands::Add { source, from } => commands::run_add(&sync, &source, &from),
        Commands::Sync { registries } => commands::run_sync(&sync, &registries),
    }
}
