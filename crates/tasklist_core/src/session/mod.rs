//! Editing-session state.
//!
//! # Responsibility
//! - Track the single task open for editing and its draft text.
//! - Mediate commit/cancel against `TaskStore`.
//!
//! # Invariants
//! - At most one task is edited at a time.
//! - A session knows nothing about deletions on its own; callers report them
//!   through `EditSession::on_task_deleted`.

pub mod edit_session;
