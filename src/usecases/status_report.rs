//! Status Reporting Use Case — `GetStatus()`
//!
//! Pulls one snapshot from the configured source, encodes it as JSON
//! and records the outcome. Stateless apart from the metric counters.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error};

use crate::adapters::metrics::MetricsRegistry;
use crate::domain::snapshot::StatusSnapshot;
use crate::ports::status_source::SnapshotSource;

/// Failures while producing a status report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("snapshot from source '{source_name}' violates reporting ranges")]
    OutOfRange { source_name: &'static str },
    #[error("failed to encode status snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A snapshot together with its encoded JSON body.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub snapshot: StatusSnapshot,
    pub body: Vec<u8>,
}

/// Serves status reports from a snapshot source.
pub struct StatusReporter {
    source: Arc<dyn SnapshotSource>,
    metrics: Arc<MetricsRegistry>,
}

impl StatusReporter {
    pub fn new(source: Arc<dyn SnapshotSource>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { source, metrics }
    }

    /// Name of the underlying source adapter.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Metrics shared with the ops listener.
    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Produce and encode a fresh snapshot.
    ///
    /// # Errors
    /// Returns [`ReportError::OutOfRange`] when the source hands back a
    /// value outside its reporting range (including non-finite amounts,
    /// which JSON would otherwise encode as `null`), and
    /// [`ReportError::Serialization`] when encoding fails.
    pub fn get_status(&self) -> Result<StatusReport, ReportError> {
        let started = Instant::now();
        let snapshot = self.source.snapshot();

        if !snapshot.is_within_bounds() {
            self.metrics.record_failure();
            error!(source = self.source.name(), ?snapshot, "Snapshot outside reporting ranges");
            return Err(ReportError::OutOfRange {
                source_name: self.source.name(),
            });
        }

        let body = match serde_json::to_vec(&snapshot) {
            Ok(body) => body,
            Err(e) => {
                self.metrics.record_failure();
                error!(error = %e, source = self.source.name(), "Status snapshot encoding failed");
                return Err(e.into());
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let latency_us = started.elapsed().as_micros() as f64;
        self.metrics.record_snapshot(&snapshot, latency_us);

        debug!(
            active_trades = snapshot.active_trades,
            profit_today = snapshot.profit_today,
            errors = snapshot.errors,
            latency_us,
            "Status snapshot served"
        );

        Ok(StatusReport { snapshot, body })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::adapters::metrics::prometheus::{OUTCOME_ERROR, OUTCOME_OK};
    use crate::domain::snapshot::{watching_pairs, BotState};

    mock! {
        Source {}

        impl SnapshotSource for Source {
            fn snapshot(&self) -> StatusSnapshot;
            fn name(&self) -> &'static str;
        }
    }

    fn fixed_snapshot(profit_today: f64) -> StatusSnapshot {
        StatusSnapshot {
            status: BotState::Active,
            active_trades: 4,
            profit_today,
            errors: 1,
            usdt_balance: 2500.25,
            btc_balance: 0.5123,
            watching_pairs: watching_pairs(),
        }
    }

    fn reporter_with(profit_today: f64) -> StatusReporter {
        let mut source = MockSource::new();
        source
            .expect_snapshot()
            .returning(move || fixed_snapshot(profit_today));
        source.expect_name().return_const("mock");
        StatusReporter::new(Arc::new(source), Arc::new(MetricsRegistry::new().unwrap()))
    }

    #[test]
    fn test_report_encodes_snapshot() {
        let reporter = reporter_with(123.45);
        let report = reporter.get_status().unwrap();

        let decoded: StatusSnapshot = serde_json::from_slice(&report.body).unwrap();
        assert_eq!(decoded, report.snapshot);
        assert_eq!(reporter.metrics().request_count(OUTCOME_OK), 1);
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let reporter = reporter_with(f64::NAN);
        let err = reporter.get_status().unwrap_err();

        assert!(matches!(err, ReportError::OutOfRange { source_name: "mock" }));
        assert_eq!(reporter.metrics().request_count(OUTCOME_ERROR), 1);
        assert_eq!(reporter.metrics().request_count(OUTCOME_OK), 0);
    }

    #[test]
    fn test_out_of_range_amount_is_rejected() {
        let reporter = reporter_with(500.01);
        assert!(reporter.get_status().is_err());
    }
}
