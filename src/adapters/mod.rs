//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits in `crate::ports` and exposes the
//! use cases over HTTP.
//!
//! Adapter categories:
//! - `http`: The `GET /status` listener
//! - `metrics`: Prometheus metrics and the ops listener
//! - `simulated`: Random snapshot source

pub mod http;
pub mod metrics;
pub mod simulated;
