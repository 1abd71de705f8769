//! CLI for the htmlfetch page inspector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use htmlfetch_core::config::{self, FetchConfig};
use std::path::PathBuf;

use commands::{run_config_path, run_session};

/// Top-level CLI. Without a subcommand, starts the interactive session.
#[derive(Debug, Parser)]
#[command(name = "htmlfetch", version)]
#[command(
    about = "Interactively fetch a web page, inspect its headers and HTML, and save it",
    long_about = None
)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/htmlfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Start the interactive fetch session (the default).
    Fetch,

    /// Print the path of the config file in use.
    ConfigPath,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    fn run(&self) -> Result<()> {
        match self.command.as_ref().unwrap_or(&CliCommand::Fetch) {
            CliCommand::Fetch => {
                let cfg = self.load_config()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_session(cfg)
            }
            CliCommand::ConfigPath => run_config_path(self.config.as_deref()),
        }
    }

    fn load_config(&self) -> Result<FetchConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }
}
