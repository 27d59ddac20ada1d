//! Status endpoint router and listener.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::sync::broadcast;
use tracing::{info, instrument};

use super::error::ApiError;
use crate::usecases::status_report::StatusReporter;

/// Fixed path of the status endpoint.
pub const STATUS_PATH: &str = "/status";

/// Build the status router around a reporter.
pub fn status_router(reporter: Arc<StatusReporter>) -> Router {
    Router::new()
        .route(STATUS_PATH, get(get_status))
        .with_state(reporter)
}

/// `GET /status` — one freshly drawn snapshot as JSON.
async fn get_status(
    State(reporter): State<Arc<StatusReporter>>,
) -> Result<impl IntoResponse, ApiError> {
    let report = reporter.get_status()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], report.body))
}

/// Listener for the status endpoint.
pub struct StatusServer {
    reporter: Arc<StatusReporter>,
    bind_address: String,
}

impl StatusServer {
    pub fn new(reporter: Arc<StatusReporter>, bind_address: impl Into<String>) -> Self {
        Self {
            reporter,
            bind_address: bind_address.into(),
        }
    }

    /// Bind and serve until a shutdown signal arrives.
    #[instrument(skip(self, shutdown_rx), fields(address = %self.bind_address))]
    pub async fn run(
        self,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.bind_address).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(
        self,
        listener: tokio::net::TcpListener,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let local = listener.local_addr()?;
        info!(
            address = %local,
            source = self.reporter.source_name(),
            "Status server started"
        );

        axum::serve(listener, status_router(self.reporter))
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        info!("Status server stopped");
        Ok(())
    }
}
