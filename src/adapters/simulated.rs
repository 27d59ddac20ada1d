//! Simulated Status Source — Random Snapshot Adapter
//!
//! Implements the `SnapshotSource` port by drawing every value from
//! the calling thread's RNG. No state is shared between requests.

use crate::domain::snapshot::StatusSnapshot;
use crate::ports::status_source::SnapshotSource;

/// Fabricates bot metrics for demonstration deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource;

impl SimulatedSource {
    pub const fn new() -> Self {
        Self
    }
}

impl SnapshotSource for SimulatedSource {
    fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::draw(&mut rand::thread_rng())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_stay_in_bounds() {
        let source = SimulatedSource::new();
        for _ in 0..500 {
            let snap = source.snapshot();
            assert!(snap.is_within_bounds(), "out of bounds: {snap:?}");
        }
    }

    #[test]
    fn test_successive_snapshots_differ() {
        let source = SimulatedSource::new();
        let first = source.snapshot();
        let second = source.snapshot();
        // Identical continuous draws for both amounts are practically impossible.
        assert!(
            first.profit_today != second.profit_today
                || first.usdt_balance != second.usdt_balance
        );
    }

    #[test]
    fn test_usable_across_threads() {
        let source = std::sync::Arc::new(SimulatedSource::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let source = std::sync::Arc::clone(&source);
                std::thread::spawn(move || source.snapshot().is_within_bounds())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
