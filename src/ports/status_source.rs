//! Status Source Port — Where Snapshots Come From
//!
//! The HTTP layer and the reporting use case only see this trait.
//! The production adapter synthesizes values; tests substitute
//! fixed or deliberately broken snapshots.

use crate::domain::snapshot::StatusSnapshot;

/// Produces a fresh status snapshot on every call.
///
/// Implementations must be callable concurrently from any worker
/// thread without external locking.
pub trait SnapshotSource: Send + Sync {
    /// Generate the snapshot for a single request.
    fn snapshot(&self) -> StatusSnapshot;

    /// Human-readable adapter name for logs.
    fn name(&self) -> &'static str;
}
