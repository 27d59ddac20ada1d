//! Use Cases Layer - Application Operations
//!
//! - `status_report`: `GetStatus()`, drawing and encoding one snapshot

pub mod status_report;

pub use status_report::{ReportError, StatusReport, StatusReporter};
