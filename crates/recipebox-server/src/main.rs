//! recipebox-server binary.
//!
//! Reads `recipebox.toml` (or the path given with `--config`) plus
//! `RECIPEBOX_*` environment variables, opens the SQLite store, and serves the
//! JSON API over HTTP.
//!
//! ```text
//! cargo run -p recipebox-server                # serve (default)
//! cargo run -p recipebox-server -- migrate     # create schema + sample data, then exit
//! cargo run -p recipebox-server -- reset       # drop and recreate, then exit
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use recipebox_server::{RetryPolicy, ServerConfig, seed_samples, startup};
use recipebox_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Recipe box API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "recipebox.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
  /// Serve the HTTP API (default).
  Serve,
  /// Ensure the schema exists and seed an empty database, then exit.
  Migrate,
  /// Drop the recipes table, recreate it with sample data, then exit.
  Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;
  tracing::info!(
    environment = ?cfg.environment,
    database = %cfg.database_path().display(),
    "configuration loaded"
  );

  // Open SQLite store, retrying per environment.
  let store_path = cfg.database_path();
  if let Some(dir) = store_path.parent()
    && !dir.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(dir)
      .await
      .with_context(|| format!("failed to create {dir:?}"))?;
  }
  let policy = RetryPolicy::from_config(&cfg);
  let store = startup::retry(&policy, "opening database", || SqliteStore::open(&store_path))
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(cfg, store).await,
    Command::Migrate => {
      let inserted = store.seed_if_empty().await.context("failed to seed database")?;
      let total = store.count().await.context("failed to count recipes")?;
      tracing::info!(inserted, total, "migration complete");
      Ok(())
    }
    Command::Reset => {
      store.reset().await.context("failed to reset database")?;
      let inserted = store.seed_if_empty().await.context("failed to seed database")?;
      tracing::info!(inserted, "database reset");
      Ok(())
    }
  }
}

async fn serve(cfg: ServerConfig, store: SqliteStore) -> anyhow::Result<()> {
  if cfg.seed {
    seed_samples(&store).await;
  }

  let app = recipebox_api::app(Arc::new(store));
  let address = cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
