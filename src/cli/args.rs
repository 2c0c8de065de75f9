//! CLI argument definitions using clap
//!
//! Commands:
//! - glossary serve [--config <path>] [--port <n>] [--database <path>] [--no-seed]
//! - glossary seed [--config <path>] [--database <path>]
//! - glossary stats [--config <path>] [--database <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glossary of web rendering techniques, served over HTTP
#[derive(Parser, Debug)]
#[command(name = "glossary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Database path, or ":memory:" (overrides the config file)
        #[arg(long)]
        database: Option<PathBuf>,

        /// Do not seed an empty database
        #[arg(long)]
        no_seed: bool,
    },

    /// Insert the initial terms if the database is empty
    Seed {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Database path (overrides the config file)
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Print glossary statistics as JSON
    Stats {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Database path (overrides the config file)
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
