//! Prometheus Metrics Registry - Status Service Observability
//!
//! Registers request counters, latency and the last reported values
//! so dashboards can follow what the status endpoint is serving.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

use crate::domain::snapshot::StatusSnapshot;

/// Outcome label for a successfully served snapshot.
pub const OUTCOME_OK: &str = "ok";

/// Outcome label for a request that ended in a server error.
pub const OUTCOME_ERROR: &str = "error";

/// Centralized Prometheus metrics for the status service.
///
/// All metrics follow the naming convention `trading_bot_status_*`.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
    /// Status requests by outcome (`ok` / `error`).
    pub requests: IntCounterVec,
    /// Time spent producing and encoding a snapshot (microseconds).
    pub request_latency_us: Histogram,
    /// `active_trades` of the most recent snapshot.
    pub last_active_trades: IntGauge,
    /// `profit_today` of the most recent snapshot.
    pub last_profit_today: Gauge,
}

impl MetricsRegistry {
    /// Create and register all Prometheus metrics.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                "trading_bot_status_requests_total",
                "Status requests served, by outcome",
            ),
            &["outcome"],
        )?;

        let request_latency_us = Histogram::with_opts(
            HistogramOpts::new(
                "trading_bot_status_request_latency_us",
                "Snapshot generation and encoding latency in microseconds",
            )
            .buckets(vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0]),
        )?;

        let last_active_trades = IntGauge::new(
            "trading_bot_status_last_active_trades",
            "active_trades value of the last snapshot served",
        )?;

        let last_profit_today = Gauge::new(
            "trading_bot_status_last_profit_today",
            "profit_today value of the last snapshot served",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(request_latency_us.clone()))?;
        registry.register(Box::new(last_active_trades.clone()))?;
        registry.register(Box::new(last_profit_today.clone()))?;

        Ok(Self {
            registry,
            requests,
            request_latency_us,
            last_active_trades,
            last_profit_today,
        })
    }

    /// Record a snapshot that was handed to the client.
    pub fn record_snapshot(&self, snapshot: &StatusSnapshot, latency_us: f64) {
        self.requests.with_label_values(&[OUTCOME_OK]).inc();
        self.request_latency_us.observe(latency_us);
        self.last_active_trades
            .set(i64::from(snapshot.active_trades));
        self.last_profit_today.set(snapshot.profit_today);
    }

    /// Record a request that failed after the snapshot was drawn.
    pub fn record_failure(&self) {
        self.requests.with_label_values(&[OUTCOME_ERROR]).inc();
    }

    /// Number of requests recorded under `outcome`.
    pub fn request_count(&self, outcome: &str) -> u64 {
        self.requests.with_label_values(&[outcome]).get()
    }

    /// Encode every registered metric in the Prometheus text format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
