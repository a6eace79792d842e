//! Add and sync commands

use std::path::Path;

use colored::Colorize;
use registry_fs::NormalizedPath;
use registry_sync::{RegenerateReport, RegistrySource, RegistrySync};

use crate::cli::RegistryArg;
use crate::error::{CliError, Result};

/// Run the add command: refresh one registry's block from `from`.
pub fn run_add(sync: &RegistrySync, source: &str, from: &Path) -> Result<()> {
    let registry = RegistrySource::load(source, &NormalizedPath::new(from))?;
    let report = sync.add_registry(source, &registry.document)?;
    print_report(&report);
    Ok(())
}

/// Run the sync command: regenerate every registry's block in order.
pub fn run_sync(sync: &RegistrySync, registries: &[RegistryArg]) -> Result<()> {
    if registries.is_empty() {
        return Err(CliError::user("No registries given. Use --registry SOURCE=FILE."));
    }

    let sources = registries
        .iter()
        .map(|arg| RegistrySource::load(arg.source.as_str(), &NormalizedPath::new(&arg.file)))
        .collect::<registry_sync::Result<Vec<_>>>()?;

    let reports = sync.sync_all(&sources)?;
    for report in &reports {
        print_report(report);
    }
    println!(
        "{} Synced {} registries into {}.",
        "OK".green().bold(),
        reports.len(),
        sync.config_path().as_str().cyan()
    );
    Ok(())
}

fn print_report(report: &RegenerateReport) {
    println!(
        "{} {}: {} profiles",
        "=>".blue().bold(),
        report.source_id.cyan(),
        report.profile_count()
    );
    for renamed in &report.renamed {
        println!(
            "  {} {} -> {}",
            "renamed".yellow(),
            renamed.original,
            renamed.renamed
        );
    }
    for name in &report.skipped {
        eprintln!(
            "{} skipped '{}': not a legal profile name",
            "warning:".yellow().bold(),
            name
        );
    }
}
