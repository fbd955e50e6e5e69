//! pessoas server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite record store and the configured cache, and serves the JSON API over
//! HTTP until interrupted.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use pessoas_cache::CacheProvider;
use pessoas_core::service::PessoaService;
use pessoas_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Pessoas REST API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
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
  let server_cfg = ServerConfig::load(&cli.config)?;

  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;

  let cache = CacheProvider::from_settings(&server_cfg.cache)
    .await
    .context("failed to initialise cache")?;

  let service = Arc::new(PessoaService::new(store, cache));
  let app = pessoas_api::api_router(service).layer(TraceLayer::new_for_http());

  let address = server_cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  tokio::select! {
    result = axum::serve(listener, app) => {
      result.context("server error")?;
    }
    _ = tokio::signal::ctrl_c() => {
      tracing::info!("Shutdown signal received");
    }
  }

  Ok(())
}
