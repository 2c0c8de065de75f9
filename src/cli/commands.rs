//! CLI command implementations
//!
//! `serve` is the process entry point for the HTTP API: it loads the
//! configuration, opens the database, seeds it once if empty and runs the
//! server. `seed` and `stats` are one-shot commands over the same database.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;
use crate::http_server::HttpServer;
use crate::observability::{init_tracing, log_event, Event};
use crate::rest_api::GlossaryState;
use crate::seed::{seed_if_empty, SeedOutcome};
use crate::stats::compute_stats;
use crate::storage::{Database, TermStore};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            database,
            no_seed,
        } => {
            let mut config = resolve_config(config.as_deref(), database)?;
            if let Some(port) = port {
                config.http.port = port;
            }
            if no_seed {
                config.seed_on_startup = false;
            }
            config.validate()?;
            serve(config)
        }
        Command::Seed { config, database } => seed(resolve_config(config.as_deref(), database)?),
        Command::Stats { config, database } => stats(resolve_config(config.as_deref(), database)?),
    }
}

fn resolve_config(path: Option<&Path>, database: Option<PathBuf>) -> CliResult<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(database) = database {
        config.database_path = database;
    }
    Ok(config)
}

/// Open the configured database behind a term store
pub fn open_store(config: &Config) -> CliResult<TermStore> {
    let db = Database::open(&config.database_path)?;
    info!(
        event = Event::DatabaseOpened.as_str(),
        location = %db.location()
    );
    Ok(TermStore::new(db))
}

/// Boot sequence for the HTTP API
///
/// 1. Initialise logging
/// 2. Open the database (schema is created if missing)
/// 3. Seed once if configured and the store is empty
/// 4. Serve until a shutdown signal
pub fn serve(config: Config) -> CliResult<()> {
    init_tracing(&config.log_level, config.log_json);
    log_event(Event::BootStart);
    info!(
        event = Event::ConfigLoaded.as_str(),
        address = %config.http.socket_addr(),
        seed_on_startup = config.seed_on_startup
    );

    let store = open_store(&config)?;
    if config.seed_on_startup {
        seed_if_empty(&store)?;
    }

    let state = GlossaryState::new(store).with_default_limit(config.default_list_limit);
    let server = HttpServer::new(config.http.clone(), state);
    log_event(Event::BootComplete);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Seed the database once and report what happened
pub fn seed(config: Config) -> CliResult<()> {
    init_tracing(&config.log_level, config.log_json);
    let store = open_store(&config)?;

    let data = match seed_if_empty(&store)? {
        SeedOutcome::Seeded(inserted) => json!({"seeded": true, "inserted": inserted}),
        SeedOutcome::Skipped(existing) => json!({"seeded": false, "existing": existing}),
    };
    write_response(data)
}

/// Print aggregate statistics
pub fn stats(config: Config) -> CliResult<()> {
    init_tracing(&config.log_level, config.log_json);
    let store = open_store(&config)?;
    let stats = compute_stats(&store)?;
    write_response(serde_json::to_value(stats)?)
}
