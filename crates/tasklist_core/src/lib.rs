//! Core state for the task list.
//! Renderers hold a `TaskListService` and forward gestures into it; every
//! list invariant lives in this crate.

pub mod actions;
pub mod config;
pub mod logging;
pub mod model;
pub mod policy;
pub mod service;
pub mod session;
pub mod store;

pub use actions::{actions_for, ActionSet, TaskAction};
pub use config::CoreConfig;
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::task::{normalize_text, Task, TaskId, TaskValidationError};
pub use policy::{EditPolicy, Platform, PlatformParseError};
pub use service::task_list_service::{
    EventOutcome, TaskListService, TaskListView, TaskRow, UiEvent,
};
pub use session::edit_session::{EditSession, EditState, SaveOutcome};
pub use store::task_store::{RenameOutcome, TaskSnapshot, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
