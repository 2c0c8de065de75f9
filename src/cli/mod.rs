//! CLI module for the glossary service
//!
//! Provides command-line interface for:
//! - serve: Open the database, seed if empty and run the HTTP API
//! - seed: One-shot idempotent seeding
//! - stats: One-shot statistics dump

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{open_store, run, run_command, seed, serve, stats};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::write_response;
