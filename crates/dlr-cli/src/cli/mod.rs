//! CLI for the DLR download-link resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dlr_core::config;

use commands::{run_candidates, run_completions, run_release, run_resolve, run_watch};

/// Top-level CLI for the DLR download-link resolver.
#[derive(Debug, Parser)]
#[command(name = "dlr")]
#[command(about = "DLR: tiered download-link resolver for release artifacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one resolution pass and print the applied link targets.
    Resolve,

    /// Run resolution passes on a fixed interval, printing each outcome.
    Watch {
        /// Seconds between passes (overrides the configured interval).
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Show the configured candidate tiers and fallback.
    Candidates,

    /// Check the latest release on the remote host.
    Release,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions need no configuration.
        if let CliCommand::Completions { shell } = &cli.command {
            run_completions(*shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve => run_resolve(&cfg).await?,
            CliCommand::Watch { interval } => run_watch(&cfg, interval).await?,
            CliCommand::Candidates => run_candidates(&cfg)?,
            CliCommand::Release => run_release(&cfg).await?,
            CliCommand::Completions { .. } => unreachable!("handled above"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
