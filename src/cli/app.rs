//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use gemsync::config;
use gemsync::output::OutputMode;

/// gemsync - Reconcile gem ownership with team membership
#[derive(Parser, Debug)]
#[command(
    name = "gemsync",
    version,
    about = "Reconcile RubyGems gem ownership with GitHub team membership",
    long_about = "Discovers which repositories of a GitHub organization correspond to\n\
                  published gems, resolves the desired owner set from two access-control\n\
                  teams, and reconciles each gem's owner list to match."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a gemsync.toml configuration template
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Run the ownership reconciliation
    Sync {
        /// Path to the configuration file
        #[arg(short, long, default_value = config::CONFIG_FILE)]
        config: PathBuf,

        /// Organization to consult, overriding the configured list
        /// (repeatable)
        #[arg(long = "org", value_name = "NAME")]
        organizations: Vec<String>,

        /// Revoke owners not present in the desired set
        #[arg(long)]
        revoke: bool,

        /// Exit non-zero when the run collected errors
        #[arg(long)]
        strict: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = cli.verbose || config::env_flag(config::VERBOSE_VAR);
    if verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Init { force } => commands::init::init(force),
        Command::Sync {
            config,
            organizations,
            revoke,
            strict,
        } => commands::sync::sync(&config, organizations, revoke, strict, verbose, mode),
    }
}
