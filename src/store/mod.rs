//! Project storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → ProjectStore trait (init, get_all, get, create, update, delete)
//!     → memory.rs (InMemoryProjectStore, concurrent keyed map)
//!     → StoreError mapped to a status by http/response.rs
//! ```
//!
//! # Design Decisions
//! - Records are keyed by title; the title never changes after creation
//! - Delete is idempotent: removing an absent title succeeds
//! - The trait is object safe so handlers hold `Arc<dyn ProjectStore>`

pub mod memory;
pub mod types;

use thiserror::Error;

pub use memory::InMemoryProjectStore;
pub use types::Project;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The project title was empty.
    #[error("project title cannot be blank")]
    BlankTitle,

    /// A project with this title already exists.
    #[error("cannot use existing title {0} for new project")]
    TitleExists(String),

    /// No project with this title exists.
    #[error("project title {0} not found")]
    NotFound(String),

    /// Backend failure unrelated to the request.
    #[error("store failure: {0}")]
    Unexpected(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend for project records.
pub trait ProjectStore: Send + Sync {
    /// Bulk-load projects, overwriting any existing record with the same title.
    fn init(&self, projects: Vec<Project>);

    /// All projects, in no particular order.
    fn get_all(&self) -> StoreResult<Vec<Project>>;

    /// The project stored under `title`.
    fn get(&self, title: &str) -> StoreResult<Project>;

    /// Insert a new project.
    fn create(&self, project: Project) -> StoreResult<Project>;

    /// Overwrite cost, duration and description of an existing project.
    fn update(&self, project: Project) -> StoreResult<Project>;

    /// Remove the project stored under `title`, if any.
    fn delete(&self, title: &str) -> StoreResult<()>;

    /// Number of stored projects.
    fn count(&self) -> StoreResult<usize> {
        self.get_all().map(|all| all.len())
    }
}
