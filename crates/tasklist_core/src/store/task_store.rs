//! Ordered task collection with copy-on-write snapshots.
//!
//! # Responsibility
//! - Provide add/toggle/delete/rename over the task list.
//! - Keep each mutation atomic from a reader's point of view.
//!
//! # Invariants
//! - A `TaskSnapshot` taken before a mutation never observes it.
//! - No task is left with empty text after a committed rename.
//! - Unknown ids never panic and never change state.

use crate::model::task::{normalize_text, Task, TaskId};
use log::debug;
use std::sync::Arc;

/// Immutable view of the collection at one point in time.
pub type TaskSnapshot = Arc<Vec<Task>>;

/// Result of a rename request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Trimmed text was empty; the task keeps its previous text.
    RejectedEmpty,
    NotFound,
}

impl RenameOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Renamed)
    }
}

/// Authoritative ordered set of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: TaskSnapshot,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from existing tasks, dropping invalid or duplicate ids.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut accepted: Vec<Task> = Vec::new();
        for task in tasks {
            if task.validate().is_err() || accepted.iter().any(|t| t.id == task.id) {
                debug!("event=task_seed module=store status=skipped id={}", task.id);
                continue;
            }
            accepted.push(task);
        }
        Self {
            tasks: Arc::new(accepted),
        }
    }

    /// Appends a task and returns its id.
    ///
    /// Returns `None` without touching the collection when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let Ok(task) = Task::new(text) else {
            debug!("event=task_add module=store status=rejected reason=empty_text");
            return None;
        };
        let id = task.id;
        Arc::make_mut(&mut self.tasks).push(task);
        debug!(
            "event=task_add module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        Some(id)
    }

    /// Flips `completed` on the matching task. Returns whether it existed.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=store status=not_found id={id}");
            return false;
        };
        let task = &mut Arc::make_mut(&mut self.tasks)[index];
        task.toggle();
        debug!(
            "event=task_toggle module=store status=ok id={} completed={}",
            id, task.completed
        );
        true
    }

    /// Removes the matching task, keeping the relative order of the rest.
    ///
    /// Callers holding an edit session must clear it in the same step; see
    /// `TaskListService::dispatch`.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.position(id) else {
            debug!("event=task_delete module=store status=not_found id={id}");
            return None;
        };
        let removed = Arc::make_mut(&mut self.tasks).remove(index);
        debug!(
            "event=task_delete module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        Some(removed)
    }

    /// Replaces the text of the matching task with the trimmed `text`.
    pub fn rename(&mut self, id: TaskId, text: &str) -> RenameOutcome {
        let Some(index) = self.position(id) else {
            debug!("event=task_rename module=store status=not_found id={id}");
            return RenameOutcome::NotFound;
        };
        let Some(text) = normalize_text(text) else {
            debug!("event=task_rename module=store status=rejected reason=empty_text id={id}");
            return RenameOutcome::RejectedEmpty;
        };
        if self.tasks[index].text == text {
            return RenameOutcome::Renamed;
        }
        Arc::make_mut(&mut self.tasks)[index].text = text;
        debug!("event=task_rename module=store status=ok id={id}");
        RenameOutcome::Renamed
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Cheap handle to the current collection state.
    pub fn snapshot(&self) -> TaskSnapshot {
        Arc::clone(&self.tasks)
    }
}
