//! Text commands mapped onto UI events.

use tasklist_core::{TaskId, TaskStore, UiEvent};

pub const HELP: &str = "\
new <text>     type into the new-task field
enter          press return in the new-task field
add            press the Add button
toggle <n>     tap the completion toggle of row n
delete <n>     swipe/trash row n
tap <n>        tap the text of row n (touch)
edit <n>       press the edit icon of row n (pointer)
type <text>    replace the draft in the edit field
submit         press return in the edit field
blur           move focus away from the edit field
save | cancel  press the save/cancel icon (pointer)
show | help | quit";

pub enum Command {
    Event(UiEvent),
    Show,
    Help,
    Quit,
}

/// Parses one input line; blank lines yield `Ok(None)`.
pub fn parse_line(line: &str, store: &TaskStore) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let command = match verb {
        "" => return Ok(None),
        "new" => Command::Event(UiEvent::ComposeChanged(rest.to_string())),
        "enter" => Command::Event(UiEvent::ComposeSubmitted),
        "add" => Command::Event(UiEvent::AddPressed),
        "toggle" => Command::Event(UiEvent::ToggleTapped(row_id(rest, store)?)),
        "delete" => Command::Event(UiEvent::DeleteRequested(row_id(rest, store)?)),
        "tap" => Command::Event(UiEvent::TaskTextTapped(row_id(rest, store)?)),
        "edit" => Command::Event(UiEvent::EditButtonPressed(row_id(rest, store)?)),
        "type" => Command::Event(UiEvent::DraftChanged(rest.to_string())),
        "submit" => Command::Event(UiEvent::EditSubmitted),
        "blur" => Command::Event(UiEvent::EditBlurred),
        "save" => Command::Event(UiEvent::SaveButtonPressed),
        "cancel" => Command::Event(UiEvent::CancelButtonPressed),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`")),
    };
    Ok(Some(command))
}

fn row_id(arg: &str, store: &TaskStore) -> Result<TaskId, String> {
    let row: usize = arg
        .trim()
        .parse()
        .map_err(|_| format!("expected a row number, got `{}`", arg.trim()))?;
    row.checked_sub(1)
        .and_then(|index| store.iter().nth(index))
        .map(|task| task.id)
        .ok_or_else(|| format!("no task at row {row}"))
}
