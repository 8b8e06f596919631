use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::keymap::Action;

fn prev_boundary(buffer: &str, pos: usize) -> usize {
    (0..pos).rev().find(|&i| buffer.is_char_boundary(i)).unwrap_or(0)
}

fn next_boundary(buffer: &str, pos: usize) -> usize {
    (pos + 1..=buffer.len())
        .find(|&i| buffer.is_char_boundary(i))
        .unwrap_or(buffer.len())
}

/// Line editing on a buffer with a UTF-8 aware byte cursor.
pub(crate) fn handle_text_input(buffer: &mut String, cursor: &mut usize, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Left if *cursor > 0 => *cursor = prev_boundary(buffer, *cursor),
        KeyCode::Right if *cursor < buffer.len() => *cursor = next_boundary(buffer, *cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buffer.len(),
        KeyCode::Char('u') if ctrl => {
            buffer.drain(..*cursor);
            *cursor = 0;
        }
        KeyCode::Backspace if *cursor > 0 => {
            let start = prev_boundary(buffer, *cursor);
            buffer.drain(start..*cursor);
            *cursor = start;
        }
        KeyCode::Delete if *cursor < buffer.len() => {
            let end = next_boundary(buffer, *cursor);
            buffer.drain(*cursor..end);
        }
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    if action != Action::Quit {
        app.confirm_quit = false;
    }
    match action {
        Action::Nav(key, mods) => {
            app.status_message.clear();
            app.navigate(key, mods);
        }
        Action::Page(dir) => app.page(dir),
        Action::Cancel => app.cancel(),
        Action::EnterEdit => app.enter_edit_mode(),
        Action::CommitEdit => app.commit_edit(),
        Action::ToggleCell => app.toggle_focused(),
        Action::PromptInsert(mode) => app.open_insert_prompt(mode),
        Action::ConfirmInsert => app.confirm_insert(),
        Action::PromptDelete => app.open_delete_confirm(),
        Action::ConfirmDelete => app.confirm_delete(),
        Action::MoveRow(direction) => app.move_row(direction),
        Action::AppendRow => app.append_row(),
        Action::CopySelection => app.copy_selection(),
        Action::ExportSelection => app.export_selection(),
        Action::ExportLines => app.export_lines(),
        Action::PromptGoto => app.open_goto_prompt(),
        Action::ConfirmGoto => app.confirm_goto(),
        Action::ShowHelp => app.open_help(),
        Action::Quit => {
            if app.request_quit() {
                return ApplyResult::Quit;
            }
        }
    }
    ApplyResult::Continue
}

/// Keys no binding claimed: text for the edit buffer or one of the prompts.
pub fn handle_unbound_key(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Edit => handle_text_input(&mut app.edit_buffer, &mut app.edit_cursor, key),
        Mode::InsertPrompt(_) => {
            if let KeyCode::Char(c) = key.code
                && !c.is_ascii_digit()
            {
                return;
            }
            handle_text_input(&mut app.prompt_buffer, &mut app.prompt_cursor, key);
        }
        Mode::GotoPrompt => handle_text_input(&mut app.prompt_buffer, &mut app.prompt_cursor, key),
        Mode::Normal | Mode::ConfirmDelete => {}
    }
}
