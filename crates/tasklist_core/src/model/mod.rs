//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical `Task` record rendered by every list surface.
//! - Own the text normalization rule shared by add and rename paths.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - A committed task never carries empty (trimmed) text.

pub mod task;
