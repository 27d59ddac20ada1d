//! Ops Server - Metrics and Probes
//!
//! Exposes /metrics, /live and /ready via axum 0.7 on a socket
//! separate from the status endpoint. Readiness drops to 503 as soon
//! as shutdown begins so load balancers stop routing first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use super::prometheus::MetricsRegistry;

/// Shared health state polled by readiness probes.
#[derive(Debug)]
pub struct HealthState {
    /// Whether the status listener should receive traffic.
    accepting: AtomicBool,
}

impl HealthState {
    /// Create a new health state (ready by default).
    pub const fn new() -> Self {
        Self {
            accepting: AtomicBool::new(true),
        }
    }

    /// Check if the service is ready to serve traffic.
    pub fn is_ready(&self) -> bool {
        self.accepting.load(Ordering::Relaxed)
    }

    /// Stop advertising readiness.
    pub fn mark_draining(&self) {
        self.accepting.store(false, Ordering::Relaxed);
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct OpsState {
    health: Arc<HealthState>,
    metrics: Arc<MetricsRegistry>,
}

/// Build the ops router.
pub fn ops_router(health: Arc<HealthState>, metrics: Arc<MetricsRegistry>) -> Router {
    Router::new()
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics_text))
        .with_state(OpsState { health, metrics })
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probe: 200 until shutdown begins.
async fn readiness(State(state): State<OpsState>) -> impl IntoResponse {
    if state.health.is_ready() {
        (StatusCode::OK, "READY")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
    }
}

/// Prometheus text exposition.
async fn metrics_text(State(state): State<OpsState>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

/// Axum-based ops HTTP server.
pub struct OpsServer {
    health: Arc<HealthState>,
    metrics: Arc<MetricsRegistry>,
    bind_address: String,
}

impl OpsServer {
    /// Create a new ops server.
    pub fn new(
        health: Arc<HealthState>,
        metrics: Arc<MetricsRegistry>,
        bind_address: impl Into<String>,
    ) -> Self {
        Self {
            health,
            metrics,
            bind_address: bind_address.into(),
        }
    }

    /// Start the ops server; returns once shutdown is signalled.
    #[instrument(skip(self, shutdown_rx), fields(address = %self.bind_address))]
    pub async fn run(
        self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let app = ops_router(self.health, self.metrics);
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;

        info!(address = %self.bind_address, "Ops server started");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }
}
