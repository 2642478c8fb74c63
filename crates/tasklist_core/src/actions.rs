//! Per-row action sets.
//!
//! Maps (editing state, platform) to the controls a renderer should offer,
//! so view code never branches on the platform itself.

use crate::policy::Platform;
use serde::Serialize;

/// One user-facing control on a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    ToggleComplete,
    /// Tapping the text opens the editor (touch only).
    TapTextToEdit,
    EditButton,
    DeleteButton,
    /// Swipe reveals the delete control (touch only).
    SwipeToDelete,
    SaveButton,
    CancelButton,
}

/// Small ordered set of row actions, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ActionSet(Vec<TaskAction>);

impl ActionSet {
    pub fn contains(&self, action: TaskAction) -> bool {
        self.0.contains(&action)
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskAction> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<TaskAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = TaskAction>>(iter: I) -> Self {
        let mut actions = Vec::new();
        for action in iter {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
        Self(actions)
    }
}

/// Returns the controls for a row.
pub fn actions_for(is_editing: bool, platform: Platform) -> ActionSet {
    use TaskAction::*;

    match (platform, is_editing) {
        (Platform::Touch, false) => [ToggleComplete, TapTextToEdit, SwipeToDelete]
            .into_iter()
            .collect(),
        // Commit goes through submit or blur; there are no row buttons.
        (Platform::Touch, true) => [ToggleComplete, SwipeToDelete].into_iter().collect(),
        (Platform::Pointer, false) => [ToggleComplete, EditButton, DeleteButton]
            .into_iter()
            .collect(),
        (Platform::Pointer, true) => [ToggleComplete, SaveButton, CancelButton, DeleteButton]
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{actions_for, TaskAction};
    use crate::policy::Platform;

    #[test]
    fn pointer_editing_row_offers_save_cancel_and_delete() {
        let actions = actions_for(true, Platform::Pointer);
        let order: Vec<_> = actions.iter().collect();
        assert_eq!(
            order,
            vec![
                TaskAction::ToggleComplete,
                TaskAction::SaveButton,
                TaskAction::CancelButton,
                TaskAction::DeleteButton,
            ]
        );
        assert!(!actions.contains(TaskAction::EditButton));
    }

    #[test]
    fn touch_rows_never_offer_cancel() {
        for editing in [false, true] {
            let actions = actions_for(editing, Platform::Touch);
            assert!(!actions.contains(TaskAction::CancelButton));
            assert!(actions.contains(TaskAction::SwipeToDelete));
        }
    }

    #[test]
    fn toggle_is_always_first() {
        for platform in [Platform::Touch, Platform::Pointer] {
            for editing in [false, true] {
                let first = actions_for(editing, platform).iter().next();
                assert_eq!(first, Some(TaskAction::ToggleComplete));
            }
        }
    }
}
