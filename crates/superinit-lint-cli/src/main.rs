//! superinit-lint CLI tool.
//!
//! Usage:
//! ```bash
//! superinit-lint check [OPTIONS] [PATH]
//! superinit-lint list-rules
//! superinit-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Lints Android layouts for missing constraints and Kotlin DTOs for missing defaults
#[derive(Parser)]
#[command(name = "superinit-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log analysis progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (skips project and global lookup)
    #[arg(short, long, global = true, env = "SUPERINIT_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint layout XML and Kotlin sources under a directory
    Check {
        /// Project root to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Report format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or ids)
        #[arg(long)]
        rules: Option<String>,

        /// Extra glob to skip, repeatable
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Apply suggested fixes in place
        #[arg(long)]
        fix: bool,
    },

    /// Print the rule table
    ListRules,

    /// Write a starter superinit-lint.toml
    Init {
        /// Replace an existing superinit-lint.toml
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Android lint text report with source excerpts.
    Lint,
    /// Graphical diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            fix,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                rules,
                exclude,
                fix,
            };
            commands::check::run(&path, &options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
