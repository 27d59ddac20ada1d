//! Metrics and Monitoring Adapters
//!
//! Prometheus registry plus the ops listener serving /metrics,
//! /live and /ready via axum 0.7.

pub mod health;
pub mod prometheus;

pub use health::{HealthState, OpsServer};
pub use prometheus::MetricsRegistry;
