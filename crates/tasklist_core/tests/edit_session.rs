use tasklist_core::{
    EditPolicy, EditSession, EditState, Platform, SaveOutcome, Task, TaskId, TaskStore,
};
use uuid::Uuid;

fn milk_store() -> (TaskStore, TaskId) {
    let id = TaskId::from_uuid(Uuid::from_u128(1));
    let store = TaskStore::from_tasks(vec![Task::with_id(id, "milk").unwrap()]);
    (store, id)
}

#[test]
fn save_commits_draft_and_returns_to_idle() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();

    session.start_edit(id, "milk");
    assert!(session.update_draft("milk and eggs"));
    assert_eq!(session.save_edit(&mut store), SaveOutcome::Saved(id));

    let tasks: Vec<Task> = store.iter().cloned().collect();
    assert_eq!(tasks, vec![Task::with_id(id, "milk and eggs").unwrap()]);
    assert_eq!(session.state(), &EditState::Idle);
}

#[test]
fn saving_empty_draft_degrades_to_cancel() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();

    session.start_edit(id, "milk");
    session.update_draft("");
    assert_eq!(session.save_edit(&mut store), SaveOutcome::Discarded(id));

    assert_eq!(store.get(id).unwrap().text, "milk");
    assert!(!store.get(id).unwrap().completed);
    assert!(session.is_idle());
}

#[test]
fn switching_targets_discards_previous_draft() {
    let mut store = TaskStore::new();
    let a = store.add("foo").unwrap();
    let b = store.add("bar").unwrap();
    let mut session = EditSession::new();

    session.start_edit(a, "foo");
    session.update_draft("foo edited");
    session.start_edit(b, "bar");

    assert_eq!(store.get(a).unwrap().text, "foo");
    assert_eq!(session.active_task_id(), Some(b));
    assert_eq!(session.draft(), Some("bar"));
}

#[test]
fn double_save_is_idempotent() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();

    session.start_edit(id, "milk");
    session.update_draft("oat milk");
    assert_eq!(session.save_edit(&mut store), SaveOutcome::Saved(id));
    assert_eq!(session.save_edit(&mut store), SaveOutcome::NotEditing);
    assert_eq!(store.get(id).unwrap().text, "oat milk");
}

#[test]
fn cancel_when_idle_is_a_noop() {
    let mut session = EditSession::new();
    assert!(!session.cancel_edit());
    assert!(!session.cancel_edit());
    assert!(session.is_idle());
}

#[test]
fn cancel_discards_draft_without_rename() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();

    session.start_edit(id, "milk");
    session.update_draft("bread");
    assert!(session.cancel_edit());

    assert_eq!(store.get(id).unwrap().text, "milk");
    assert_eq!(session.save_edit(&mut store), SaveOutcome::NotEditing);
}

#[test]
fn submit_saves_on_every_platform() {
    for platform in [Platform::Touch, Platform::Pointer] {
        let (mut store, id) = milk_store();
        let mut session = EditSession::new();
        session.start_edit(id, "milk");
        session.update_draft(format!("milk via {platform}"));

        assert_eq!(session.submit(&mut store), SaveOutcome::Saved(id));
        assert_eq!(store.get(id).unwrap().text, format!("milk via {platform}"));
    }
}

#[test]
fn blur_saves_only_when_policy_allows() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();
    session.start_edit(id, "milk");
    session.update_draft("soy milk");

    let pointer = EditPolicy::for_platform(Platform::Pointer);
    assert_eq!(session.blur(&mut store, pointer), SaveOutcome::Kept(id));
    assert!(session.is_editing(id));

    let touch = EditPolicy::for_platform(Platform::Touch);
    assert_eq!(session.blur(&mut store, touch), SaveOutcome::Saved(id));
    assert_eq!(store.get(id).unwrap().text, "soy milk");
    assert!(session.is_idle());
}

#[test]
fn saving_after_task_vanished_discards() {
    let (mut store, id) = milk_store();
    let mut session = EditSession::new();
    session.start_edit(id, "milk");
    store.delete(id);

    assert_eq!(session.save_edit(&mut store), SaveOutcome::Discarded(id));
    assert!(store.is_empty());
    assert!(session.is_idle());
}
