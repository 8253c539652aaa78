//! CLI for the oparl-resolve URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_linguas, run_open, run_resolve};

/// Top-level CLI for oparl-resolve.
#[derive(Debug, Parser)]
#[command(name = "oparl-resolve")]
#[command(about = "Resolve OParl URLs with a blocking HTTP GET", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL once and print status and body.
    Resolve {
        /// HTTP/HTTPS URL to resolve.
        url: String,

        /// Print the full result as JSON instead of status + body.
        #[arg(long)]
        json: bool,
    },

    /// Open a URL through the resolver registry and print the returned document.
    Open {
        /// HTTP/HTTPS URL of the document (e.g. an OParl system endpoint).
        url: String,
    },

    /// Print the language codes listed in <root>/po/LINGUAS.
    Linguas {
        /// Project root containing the `po/` directory.
        root: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { url, json } => run_resolve(&url, json)?,
            CliCommand::Open { url } => run_open(&url)?,
            CliCommand::Linguas { root } => run_linguas(&root)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
