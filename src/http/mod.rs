//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → handlers.rs (decode body, call ProjectStore)
//!     → response.rs (StoreError → status + JSON message)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
