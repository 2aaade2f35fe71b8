//! House projects service library.
//!
//! A CRUD HTTP API over a keyed store of project records.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{InMemoryProjectStore, Project, ProjectStore, StoreError};
