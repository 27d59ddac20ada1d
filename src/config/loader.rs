//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Load `path` if it exists, otherwise fall back to defaults.
///
/// Returns the config and whether a file was read. A file that exists
/// but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<(AppConfig, bool)> {
  if Path::new(path).exists() {
    load_config(path).map(|config| (config, true))
  } else {
    Ok((AppConfig::default(), false))
  }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Parseable socket addresses
/// - Distinct status and ops listeners
/// - Non-empty log level
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.service.log_level.trim().is_empty(),
    "service.log_level must not be empty"
  );

  let status_addr: SocketAddr = config
    .service
    .bind_address
    .parse()
    .with_context(|| {
      format!(
        "service.bind_address is not a socket address: {}",
        config.service.bind_address
      )
    })?;

  if config.ops.enabled {
    let ops_addr: SocketAddr = config
      .ops
      .bind_address
      .parse()
      .with_context(|| {
        format!(
          "ops.bind_address is not a socket address: {}",
          config.ops.bind_address
        )
      })?;

    anyhow::ensure!(
      ops_addr.port() != status_addr.port() || ops_addr.port() == 0,
      "ops.bind_address must use a different port than service.bind_address ({})",
      status_addr.port()
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_falls_back_to_defaults() {
    let (config, from_file) = load_or_default("nonexistent.toml").unwrap();
    assert!(!from_file);
    assert_eq!(config.service.bind_address, "0.0.0.0:5000");
    assert!(!config.ops.enabled);
  }

  #[test]
  fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.service.name, "trading-bot-status");
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.ops.bind_address, "0.0.0.0:9090");
  }

  #[test]
  fn test_full_file() {
    let config = parse_config(
      r#"
      [service]
      name = "demo"
      log_level = "debug"
      bind_address = "127.0.0.1:8000"

      [ops]
      enabled = true
      bind_address = "127.0.0.1:9100"
      "#,
    )
    .unwrap();
    assert_eq!(config.service.name, "demo");
    assert_eq!(config.service.bind_address, "127.0.0.1:8000");
    assert!(config.ops.enabled);
  }

  #[test]
  fn test_rejects_bad_address() {
    let result = parse_config("[service]\nbind_address = \"localhost\"\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_rejects_port_clash_when_ops_enabled() {
    let toml = "[service]\nbind_address = \"0.0.0.0:5000\"\n\
                [ops]\nenabled = true\nbind_address = \"127.0.0.1:5000\"\n";
    assert!(parse_config(toml).is_err());
  }

  #[test]
  fn test_ignores_ops_address_when_disabled() {
    let toml = "[ops]\nenabled = false\nbind_address = \"not-an-address\"\n";
    assert!(parse_config(toml).is_ok());
  }

  #[test]
  fn test_rejects_empty_log_level() {
    assert!(parse_config("[service]\nlog_level = \"\"\n").is_err());
  }
}
