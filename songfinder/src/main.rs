//! songfinder - HTTP song lookup service
//!
//! Looks up songs by numeric id or by title from a JSON document store.
//! Startup sequence: CLI args → TOML config → tracing → database → seed →
//! router → serve until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use songfinder::db::SqliteSongStore;
use songfinder::{build_router, AppState, SongController, SongRepository};
use songfinder_common::config::{locate_config_file, resolve_root_folder, TomlConfig};
use songfinder_common::db::{count_songs, load_dataset, seed_songs};
use tokio::signal;
use tracing::{error, info, warn};

/// Command-line arguments for songfinder
#[derive(Parser, Debug)]
#[command(name = "songfinder")]
#[command(about = "Song lookup service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "SONGFINDER_PORT")]
    port: Option<u16>,

    /// Interface to bind (overrides config file)
    #[arg(long, env = "SONGFINDER_HOST")]
    host: Option<String>,

    /// Root folder holding the database and dataset
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON dataset to seed the song collection from
    #[arg(short, long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = locate_config_file(args.config.as_deref());
    let mut config = match &config_path {
        Some(path) => TomlConfig::load(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => TomlConfig::default(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.host = host;
    }
    config.validate().context("Invalid configuration")?;

    // Initialize tracing; RUST_LOG overrides the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting songfinder v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_path {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => warn!("No config file found, using built-in defaults"),
    }

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), &config);
    info!("Root folder: {}", root_folder.display());

    let db_path = config.database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let store = match SqliteSongStore::open(&db_path).await {
        Ok(store) => {
            info!("✓ Connected to database");
            store
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let dataset_path = args
        .dataset
        .clone()
        .unwrap_or_else(|| config.dataset_path(&root_folder));
    if dataset_path.exists() {
        let songs = load_dataset(&dataset_path)
            .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;
        let seeded = seed_songs(store.pool(), &songs).await?;
        info!("✓ Seeded {} songs from {}", seeded, dataset_path.display());
    } else {
        warn!(
            "Dataset {} not found, serving existing collection",
            dataset_path.display()
        );
    }
    info!("Song collection holds {} documents", count_songs(store.pool()).await?);

    let repository = SongRepository::new(Arc::new(store)).with_name_match(config.name_match);
    info!("Name lookups use {:?} matching", config.name_match);

    let state = AppState::new(SongController::new(repository))
        .with_not_found_status(config.not_found_status);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("songfinder listening on http://{}", addr);
    info!("Health check: http://{}/hello", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
