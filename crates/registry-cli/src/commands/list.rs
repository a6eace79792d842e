//! List command

use colored::Colorize;
use registry_sync::RegistrySync;

use crate::error::Result;

/// Run the list command
pub fn run_list(sync: &RegistrySync, json: bool) -> Result<()> {
    let listing = sync.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Generated sections".bold());
    if listing.generated.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for name in &listing.generated {
        println!("  {}", name.cyan());
    }

    println!();
    println!("{}", "User sections".bold());
    if listing.user.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for name in &listing.user {
        println!("  {}", name.green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_test_utils::TestConfig;

    #[test]
    fn test_list_runs() {
        let config = TestConfig::with_content("[profile a]\n");
        let sync = RegistrySync::new(config.path());
        assert!(run_list(&sync, false).is_ok());
        assert!(run_list(&sync, true).is_ok());
    }

    #[test]
    fn test_list_missing_config_fails() {
        let config = TestConfig::new();
        let sync = RegistrySync::new(config.path());
        assert!(run_list(&sync, false).is_err());
    }
}
