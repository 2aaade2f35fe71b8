//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → per-request spans (method, path, request ID) from http/server.rs
//!
//! Consumers:
//!     → logging.rs (fmt subscriber to stdout)
//! ```

pub mod logging;

pub use logging::{default_filter, init_logging};
