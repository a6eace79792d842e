//! CLI argument parsing using clap derive

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

/// Registry - Sync shared AWS profile registries into your config file
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AWS config file to edit
    #[arg(long, env = "AWS_CONFIG_FILE")]
    pub config: PathBuf,

    /// Sync settings file (TOML, JSON or YAML)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List generated and user-authored sections
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove every generated registry block
    RemoveAll,

    /// Remove the generated block of one registry
    Remove {
        /// Registry source identifier, usually a repository URL
        source: String,
    },

    /// Add or refresh one registry's block
    ///
    /// Examples:
    ///   registry add https://github.com/org/profiles --from ./config
    Add {
        /// Registry source identifier, usually a repository URL
        source: String,

        /// Profile file of the registry
        #[arg(long)]
        from: PathBuf,
    },

    /// Regenerate the blocks of every registry, in order
    ///
    /// Examples:
    ///   registry sync --registry https://github.com/org/a=./a/config \
    ///                 --registry https://github.com/org/b=./b/config
    Sync {
        /// Registry as SOURCE=FILE, repeatable
        #[arg(long = "registry", required = true)]
        registries: Vec<RegistryArg>,
    },
}

/// A `SOURCE=FILE` pair given to `sync`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryArg {
    pub source: String,
    pub file: PathBuf,
}

impl FromStr for RegistryArg {
    type Err = String;

    /// Splits on the last `=`, so source URLs may carry query strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('=') {
            Some((source, file)) if !source.is_empty() && !file.is_empty() => Ok(Self {
                source: source.to_string(),
                file: PathBuf::from(file),
            }),
            _ => Err(format!("expected SOURCE=FILE, got '{s}'")),
        }
    }
}
