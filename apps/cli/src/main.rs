//! # Stockbook Entry Point
//!
//! ## Startup Sequence
//! ```text
//! 1. Parse flags (--db, --config)
//! 2. Load AppConfig
//! 3. Initialize tracing (stderr)
//! 4. Open the database, run migrations
//! 5. Run the command loop on stdin/stdout
//! ```
//!
//! ## Usage
//! ```bash
//! stockbook                         # default database in the data directory
//! stockbook --db ./shop.db          # explicit database file
//! RUST_LOG=debug stockbook          # verbose logging
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stockbook_cli::{run_repl, AppConfig};
use stockbook_db::migrations::migration_status;
use stockbook_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inventory and sales ledger.
#[derive(Debug, Parser)]
#[command(name = "stockbook", version, about)]
struct Cli {
    /// SQLite database file (overrides the configured path)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_database_override(cli.db);

    init_tracing(&config.log_filter);

    config
        .ensure_database_dir()
        .context("Failed to create database directory")?;

    info!(path = %config.database_path.display(), "Opening database");
    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .with_context(|| format!("Failed to open database {}", config.database_path.display()))?;

    let (total, applied) = migration_status(db.pool())
        .await
        .context("Failed to read migration status")?;
    info!(applied, total, "Database ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_repl(&db, stdin.lock(), &mut stdout.lock()).await;

    // Already closed after `exit`; closing again is a no-op.
    db.close().await;

    result.context("Command loop failed")
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so they
/// never interleave with command output.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
