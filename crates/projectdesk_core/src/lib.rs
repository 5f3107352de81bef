//! Core state store for the projectdesk project/task manager.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{NewProject, Project, ProjectId, ProjectStatus};
pub use model::snapshot::Snapshot;
pub use model::task::{NewTask, Priority, Task, TaskId};
pub use model::team::{MemberId, NewTeamMember, TeamMember};
pub use model::ValidationError;
pub use storage::{
    open_store_db, open_store_db_in_memory, MemoryStorage, SqliteStorage, StateStorage,
    StorageError, StorageResult,
};
pub use store::{AppStore, DashboardCounts, ModalKind, Page, STATE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
