//! Core use-case services.
//!
//! # Responsibility
//! - Coordinate `TaskStore` and `EditSession` as one unit.
//! - Keep renderers decoupled from the state-machine details.
//!
//! # Invariants
//! - Under `TaskListService`, the active edit always refers to a task
//!   present in the store.

pub mod task_list_service;
