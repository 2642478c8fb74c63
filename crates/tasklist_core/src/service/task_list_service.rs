//! Gesture-level entry point for renderers.
//!
//! # Responsibility
//! - Translate inbound UI events into store/session operations.
//! - Produce a serializable view snapshot after each step.
//!
//! # Invariants
//! - Deleting the task being edited clears the session in the same call.
//! - An edit is only ever opened for a task present in the store.
//! - Events meaningless on the active platform are ignored, never errors.

use crate::actions::{actions_for, ActionSet};
use crate::config::CoreConfig;
use crate::model::task::{Task, TaskId};
use crate::policy::{EditPolicy, Platform};
use crate::session::edit_session::{EditSession, SaveOutcome};
use crate::store::task_store::TaskStore;
use log::{debug, info};
use serde::Serialize;

/// Inbound gesture forwarded by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New-task field text changed.
    ComposeChanged(String),
    /// Return key in the new-task field.
    ComposeSubmitted,
    /// Add button pressed.
    AddPressed,
    ToggleTapped(TaskId),
    /// Swipe-revealed delete or trash icon.
    DeleteRequested(TaskId),
    /// Tap on the task text (touch).
    TaskTextTapped(TaskId),
    /// Edit icon (pointer).
    EditButtonPressed(TaskId),
    DraftChanged(String),
    /// Return key in the edit field.
    EditSubmitted,
    EditBlurred,
    /// Save icon (pointer).
    SaveButtonPressed,
    /// Cancel icon (pointer).
    CancelButtonPressed,
}

/// What a dispatched event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Added(TaskId),
    Toggled(TaskId),
    Deleted(TaskId),
    EditStarted(TaskId),
    Saved(TaskId),
    Discarded(TaskId),
    Cancelled,
    DraftUpdated,
    ComposeUpdated,
    /// State unchanged: rejected input, stale id, or a gesture the platform
    /// does not offer.
    Ignored,
}

impl From<SaveOutcome> for EventOutcome {
    fn from(value: SaveOutcome) -> Self {
        match value {
            SaveOutcome::NotEditing | SaveOutcome::Kept(_) => Self::Ignored,
            SaveOutcome::Saved(id) => Self::Saved(id),
            SaveOutcome::Discarded(id) => Self::Discarded(id),
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: Task,
    pub editing: bool,
    /// Draft text, present only on the row being edited.
    pub draft: Option<String>,
    pub actions: ActionSet,
}

/// Full render snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub platform: Platform,
    pub compose: String,
    pub rows: Vec<TaskRow>,
    pub total: usize,
    pub completed: usize,
}

/// Owns the task list and the edit session for one surface.
#[derive(Debug, Clone)]
pub struct TaskListService {
    store: TaskStore,
    session: EditSession,
    platform: Platform,
    policy: EditPolicy,
    compose: String,
}

impl Default for TaskListService {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl TaskListService {
    pub fn new(platform: Platform) -> Self {
        Self::with_store(platform, TaskStore::new())
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.platform)
    }

    /// Wraps an existing store; the session starts idle.
    pub fn with_store(platform: Platform, store: TaskStore) -> Self {
        info!(
            "event=service_init module=service status=ok platform={} tasks={}",
            platform,
            store.len()
        );
        Self {
            store,
            session: EditSession::new(),
            platform,
            policy: EditPolicy::for_platform(platform),
            compose: String::new(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    pub fn compose_text(&self) -> &str {
        &self.compose
    }

    /// Applies one event as a single logical step.
    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        let outcome = match event {
            UiEvent::ComposeChanged(text) => {
                self.compose = text;
                EventOutcome::ComposeUpdated
            }
            UiEvent::ComposeSubmitted if self.policy.submit_new_task_on_enter => {
                self.submit_compose()
            }
            UiEvent::ComposeSubmitted => EventOutcome::Ignored,
            UiEvent::AddPressed => self.submit_compose(),
            UiEvent::ToggleTapped(id) => self.toggle_complete(id),
            UiEvent::DeleteRequested(id) => self.delete(id),
            UiEvent::TaskTextTapped(id) if self.platform == Platform::Touch => {
                self.start_edit(id)
            }
            UiEvent::EditButtonPressed(id) if self.platform == Platform::Pointer => {
                self.start_edit(id)
            }
            UiEvent::TaskTextTapped(_) | UiEvent::EditButtonPressed(_) => EventOutcome::Ignored,
            UiEvent::DraftChanged(text) => {
                if self.session.update_draft(text) {
                    EventOutcome::DraftUpdated
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::EditSubmitted => self.session.submit(&mut self.store).into(),
            UiEvent::EditBlurred => self.session.blur(&mut self.store, self.policy).into(),
            UiEvent::SaveButtonPressed if self.platform == Platform::Pointer => {
                self.save_edit()
            }
            UiEvent::CancelButtonPressed if self.platform == Platform::Pointer => {
                self.cancel_edit()
            }
            UiEvent::SaveButtonPressed | UiEvent::CancelButtonPressed => EventOutcome::Ignored,
        };
        debug!("event=dispatch module=service outcome={:?}", outcome);
        outcome
    }

    /// Adds a task; `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.store.add(text)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> EventOutcome {
        if self.store.toggle_complete(id) {
            EventOutcome::Toggled(id)
        } else {
            EventOutcome::Ignored
        }
    }

    /// Removes a task and, in the same step, closes its edit session.
    pub fn delete(&mut self, id: TaskId) -> EventOutcome {
        match self.store.delete(id) {
            Some(_) => {
                self.session.on_task_deleted(id);
                EventOutcome::Deleted(id)
            }
            None => EventOutcome::Ignored,
        }
    }

    /// Opens `id` for editing, seeded with its committed text.
    pub fn start_edit(&mut self, id: TaskId) -> EventOutcome {
        let Some(task) = self.store.get(id) else {
            debug!("event=edit_start module=service status=not_found id={id}");
            return EventOutcome::Ignored;
        };
        let text = task.text.clone();
        self.session.start_edit(id, text);
        EventOutcome::EditStarted(id)
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> EventOutcome {
        self.dispatch(UiEvent::DraftChanged(text.into()))
    }

    pub fn save_edit(&mut self) -> EventOutcome {
        self.session.save_edit(&mut self.store).into()
    }

    pub fn cancel_edit(&mut self) -> EventOutcome {
        if self.session.cancel_edit() {
            EventOutcome::Cancelled
        } else {
            EventOutcome::Ignored
        }
    }

    /// Builds the render snapshot for the current state.
    pub fn view(&self) -> TaskListView {
        let rows = self
            .store
            .iter()
            .map(|task| {
                let editing = self.session.is_editing(task.id);
                TaskRow {
                    task: task.clone(),
                    editing,
                    draft: if editing {
                        self.session.draft().map(str::to_string)
                    } else {
                        None
                    },
                    actions: actions_for(editing, self.platform),
                }
            })
            .collect();

        TaskListView {
            platform: self.platform,
            compose: self.compose.clone(),
            rows,
            total: self.store.len(),
            completed: self.store.completed_count(),
        }
    }

    fn submit_compose(&mut self) -> EventOutcome {
        match self.store.add(&self.compose) {
            Some(id) => {
                self.compose.clear();
                EventOutcome::Added(id)
            }
            None => EventOutcome::Ignored,
        }
    }
}
