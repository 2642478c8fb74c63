//! In-memory task storage.
//!
//! # Responsibility
//! - Own the ordered task collection and its mutations.
//! - Hand out immutable snapshots to renderers.
//!
//! # Invariants
//! - Insertion order is the only ordering.
//! - Operations on unknown ids are no-ops.

pub mod task_store;
