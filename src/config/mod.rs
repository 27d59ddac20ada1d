//! Configuration Module - TOML-based Service Configuration
//!
//! Loads and validates configuration from an optional `config.toml`.
//! Without a file the defaults reproduce the stock deployment: the
//! status endpoint on `0.0.0.0:5000` and no ops listener.

pub mod loader;

use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Status service identity and listener.
  #[serde(default)]
  pub service: ServiceConfig,
  /// Metrics and probe listener.
  #[serde(default)]
  pub ops: OpsConfig,
}

/// Status service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
  /// Human-readable service name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Status listener bind address.
  #[serde(default = "default_bind_address")]
  pub bind_address: String,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      bind_address: default_bind_address(),
    }
  }
}

/// Ops listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpsConfig {
  /// Serve /metrics, /live and /ready.
  #[serde(default)]
  pub enabled: bool,
  /// Ops listener bind address.
  #[serde(default = "default_ops_address")]
  pub bind_address: String,
}

impl Default for OpsConfig {
  fn default() -> Self {
    Self {
      enabled: false,
      bind_address: default_ops_address(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "trading-bot-status".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_bind_address() -> String {
  "0.0.0.0:5000".to_string()
}

fn default_ops_address() -> String {
  "0.0.0.0:9090".to_string()
}
