//! Domain layer - Status snapshot model.
//!
//! Pure value types and generation rules. No I/O here
//! (hexagonal architecture inner ring).

pub mod snapshot;

pub use snapshot::{BotState, StatusSnapshot};
