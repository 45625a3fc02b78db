//! CLI for the plugsum plugin checksummer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plugsum_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_scan, run_status};

/// Top-level CLI for the plugsum plugin checksummer.
#[derive(Debug, Parser)]
#[command(name = "plugsum")]
#[command(about = "plugsum: recompute and track checksums of installed plugin files", long_about = None)]
pub struct Cli {
    /// Plugin base directory (overrides PLUGSUM_DIR and the config file).
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Recompute checksums from local files, update the database, and print
    /// each entry's name and checksum, sorted.
    Scan {
        /// Restrict the scan to these files (absolute, or relative to the
        /// base directory). Without arguments the configured scan
        /// directories are walked.
        files: Vec<PathBuf>,
    },

    /// Show the recorded state of every known plugin.
    Status,

    /// Compute SHA-256 of a single file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let base_dir = config::resolve_base_dir(cli.base_dir.as_deref(), &cfg)?;
        tracing::debug!("base dir: {}", base_dir.display());

        match cli.command {
            CliCommand::Scan { files } => run_scan(&base_dir, &cfg, &files)?,
            CliCommand::Status => run_status(&base_dir)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}
