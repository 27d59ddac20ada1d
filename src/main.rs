//! Trading Bot Status Service — Entry Point
//!
//! Wiring sequence:
//! 1. Load config.toml if present (defaults otherwise) + validate
//! 2. Init tracing (JSON structured logging, RUST_LOG overrides)
//! 3. Create metrics registry and the simulated snapshot source
//! 4. Spawn status server on :5000 (GET /status)
//! 5. Spawn ops server on :9090 when enabled (/metrics, /live, /ready)
//! 6. Wait for SIGINT → readiness off → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

use trading_bot_status::adapters::http::StatusServer;
use trading_bot_status::adapters::metrics::{HealthState, MetricsRegistry, OpsServer};
use trading_bot_status::adapters::simulated::SimulatedSource;
use trading_bot_status::config;
use trading_bot_status::usecases::status_report::StatusReporter;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let (config, from_file) = config::loader::load_or_default(CONFIG_PATH)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.service.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        config_file = from_file,
        bind_address = %config.service.bind_address,
        ops_enabled = config.ops.enabled,
        "Starting trading bot status service"
    );

    // ── 3. Shutdown channel, metrics, reporter ──────────────
    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);
    let health = Arc::new(HealthState::new());
    let metrics = Arc::new(
        MetricsRegistry::new().context("Failed to register metrics")?,
    );
    let reporter = Arc::new(StatusReporter::new(
        Arc::new(SimulatedSource::new()),
        Arc::clone(&metrics),
    ));

    // ── 4. Status server ────────────────────────────────────
    let status_server = StatusServer::new(reporter, config.service.bind_address.clone());
    let mut status_handle = tokio::spawn(status_server.run(shutdown_tx.subscribe()));

    // ── 5. Ops server (optional) ────────────────────────────
    let ops_handle = if config.ops.enabled {
        let ops_server = OpsServer::new(
            Arc::clone(&health),
            Arc::clone(&metrics),
            config.ops.bind_address.clone(),
        );
        let ops_shutdown = shutdown_tx.subscribe();
        Some(tokio::spawn(async move {
            if let Err(e) = ops_server.run(ops_shutdown).await {
                error!(error = %e, "Ops server failed");
            }
        }))
    } else {
        None
    };

    // ── 6. Wait for SIGINT or an early status server exit ───
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
        result = &mut status_handle => {
            if let Some(ops) = ops_handle {
                ops.abort();
            }
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e.context("Status server failed")),
                Err(e) => Err(anyhow::Error::new(e).context("Status server task panicked")),
            };
        }
    }

    // Readiness probe → 503 before listeners close
    health.mark_draining();
    let _ = shutdown_tx.send(());
    info!("Shutdown signal broadcast to all listeners");

    let _ = tokio::time::timeout(Duration::from_secs(5), status_handle).await;
    if let Some(ops) = ops_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), ops).await;
    }

    info!("Shutdown complete");
    Ok(())
}
