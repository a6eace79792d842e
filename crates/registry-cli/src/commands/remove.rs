//! Remove commands

use colored::Colorize;
use registry_sync::RegistrySync;

use crate::error::Result;

/// Run the remove-all command
pub fn run_remove_all(sync: &RegistrySync) -> Result<()> {
    let removed = sync.remove_all()?;
    if removed.is_empty() {
        println!("{} No generated sections to remove.", "=>".blue().bold());
    } else {
        println!(
            "{} Removed {} generated sections from {}.",
            "OK".green().bold(),
            removed.len(),
            sync.config_path().as_str().cyan()
        );
    }
    Ok(())
}

/// Run the remove command for one registry
pub fn run_remove(sync: &RegistrySync, source: &str) -> Result<()> {
    let removed = sync.remove_registry(source)?;
    if removed.is_empty() {
        println!(
            "{} No generated sections found for {}.",
            "=>".blue().bold(),
            source.yellow()
        );
    } else {
        println!(
            "{} Removed {} sections for {}.",
            "OK".green().bold(),
            removed.len(),
            source.cyan()
        );
        for name in &removed {
            println!("  {} {}", "-".red(), name);
        }
    }
    Ok(())
}
