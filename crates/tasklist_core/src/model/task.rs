//! Task domain model.
//!
//! # Responsibility
//! - Define the list item shared by touch and pointer renderers.
//! - Validate identity and text before a task enters a store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is trimmed and non-empty once committed.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a task at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one coming back from a renderer.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures for task construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Unchecked wire shape; converted into `Task` through validation.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Self::with_id(value.id, value.text)?;
        task.completed = value.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates a pending task with a generated id.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank after trimming.
    pub fn new(text: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), text)
    }

    /// Creates a pending task with a caller-provided id.
    ///
    /// Used by seeding paths where identity already exists.
    pub fn with_id(id: TaskId, text: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: normalize_text(text.as_ref()).unwrap_or_default(),
            completed: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks identity and text invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Trims user input; returns `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
