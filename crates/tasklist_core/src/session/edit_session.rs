//! Single-writer edit session.
//!
//! # Responsibility
//! - Implement the `Idle` / `Editing` state machine.
//! - Apply platform commit triggers given as an `EditPolicy`.
//!
//! # Invariants
//! - Starting a new edit discards any previous draft without saving.
//! - Saving always returns the session to `Idle`, even when the draft is
//!   rejected as empty.
//! - Repeated save/cancel calls in `Idle` are no-ops.

use crate::model::task::TaskId;
use crate::policy::EditPolicy;
use crate::store::task_store::{RenameOutcome, TaskStore};
use log::debug;

/// Current edit state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { task_id: TaskId, draft: String },
}

/// Result of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was open; the call had no effect.
    NotEditing,
    /// Edit stays open with its draft; the trigger does not commit on this
    /// platform.
    Kept(TaskId),
    /// Draft was written to the task.
    Saved(TaskId),
    /// Session closed without changing the task (empty draft, or the task
    /// is gone).
    Discarded(TaskId),
}

/// Tracks which task, if any, is being edited.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, EditState::Idle)
    }

    pub fn active_task_id(&self) -> Option<TaskId> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { task_id, .. } => Some(*task_id),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft.as_str()),
        }
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.active_task_id() == Some(id)
    }

    /// Opens `task_id` for editing, abandoning any current draft.
    pub fn start_edit(&mut self, task_id: TaskId, initial_text: impl Into<String>) {
        if let Some(previous) = self.active_task_id() {
            if previous != task_id {
                debug!(
                    "event=edit_switch module=session status=ok from={previous} to={task_id}"
                );
            }
        }
        self.state = EditState::Editing {
            task_id,
            draft: initial_text.into(),
        };
        debug!("event=edit_start module=session status=ok id={task_id}");
    }

    /// Replaces the draft text. Returns `false` when idle.
    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state {
            EditState::Idle => {
                debug!("event=edit_draft module=session status=ignored reason=idle");
                false
            }
            EditState::Editing { draft, .. } => {
                *draft = text.into();
                true
            }
        }
    }

    /// Commits the draft through `TaskStore::rename` and returns to `Idle`.
    pub fn save_edit(&mut self, store: &mut TaskStore) -> SaveOutcome {
        let EditState::Editing { task_id, draft } = std::mem::take(&mut self.state) else {
            return SaveOutcome::NotEditing;
        };
        match store.rename(task_id, &draft) {
            RenameOutcome::Renamed => {
                debug!("event=edit_save module=session status=ok id={task_id}");
                SaveOutcome::Saved(task_id)
            }
            outcome => {
                debug!(
                    "event=edit_save module=session status=discarded id={task_id} reason={:?}",
                    outcome
                );
                SaveOutcome::Discarded(task_id)
            }
        }
    }

    /// Drops the draft without renaming. Returns whether an edit was open.
    pub fn cancel_edit(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            EditState::Idle => false,
            EditState::Editing { task_id, .. } => {
                debug!("event=edit_cancel module=session status=ok id={task_id}");
                true
            }
        }
    }

    /// Primary commit action of the edit field (enter/return).
    pub fn submit(&mut self, store: &mut TaskStore) -> SaveOutcome {
        self.save_edit(store)
    }

    /// Edit field lost focus.
    ///
    /// Saves only when the policy enables it; otherwise the session stays
    /// open and `Kept` is returned (`NotEditing` when idle).
    pub fn blur(&mut self, store: &mut TaskStore, policy: EditPolicy) -> SaveOutcome {
        if !policy.auto_save_on_blur {
            return match self.active_task_id() {
                Some(task_id) => SaveOutcome::Kept(task_id),
                None => SaveOutcome::NotEditing,
            };
        }
        self.save_edit(store)
    }

    /// Clears the session if `id` is the task being edited.
    ///
    /// Must run in the same step as the store deletion.
    pub fn on_task_deleted(&mut self, id: TaskId) -> bool {
        if !self.is_editing(id) {
            return false;
        }
        self.state = EditState::Idle;
        debug!("event=edit_cleared module=session status=ok reason=task_deleted id={id}");
        true
    }
}
