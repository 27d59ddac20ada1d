//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `SnapshotSource`: Supplies a fresh status snapshot per request

pub mod status_source;

pub use status_source::SnapshotSource;
