//! Key translation layer.
//!
//! Keeps key handling separate from app behavior: a key press becomes an
//! [`Action`] here and [`super::actions::apply_action`] decides what it does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linegrid_core::editor::{InsertMode, MoveDirection};
use linegrid_core::{Modifiers, NavKey};

use super::app::Mode;

/// Everything a key can ask the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move (or with shift, extend) the selection.
    Nav(NavKey, Modifiers),
    /// Scroll the focus by a page; -1 up, 1 down.
    Page(i32),
    /// Leave the current mode, or clear the selection in Normal mode.
    Cancel,
    EnterEdit,
    CommitEdit,
    /// Keyboard counterpart of ctrl-click on the focused cell.
    ToggleCell,
    /// Ask how many rows to insert.
    PromptInsert(InsertMode),
    ConfirmInsert,
    /// Ask before deleting the selected rows.
    PromptDelete,
    ConfirmDelete,
    MoveRow(MoveDirection),
    AppendRow,
    CopySelection,
    /// Write the selection to a timestamped CSV file.
    ExportSelection,
    /// Write every line to a CSV file next to the input.
    ExportLines,
    /// Ask for a `<line>:<column>` cell to jump to.
    PromptGoto,
    ConfirmGoto,
    ShowHelp,
    Quit,
}

fn mods(key: KeyEvent) -> Modifiers {
    Modifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    }
}

fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Left => Some(NavKey::Left),
        KeyCode::Right => Some(NavKey::Right),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        _ => None,
    }
}

/// Translate a key press in `mode`. `None` means the key is not bound; in
/// text-entry modes it then goes to the text buffer.
pub fn translate(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match mode {
        Mode::Normal => match key.code {
            KeyCode::Up if alt => Some(Action::MoveRow(MoveDirection::Up)),
            KeyCode::Down if alt => Some(Action::MoveRow(MoveDirection::Down)),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => nav_key(key.code).map(|k| Action::Nav(k, mods(key))),

            KeyCode::Char('k') => Some(Action::Nav(NavKey::Up, Modifiers::NONE)),
            KeyCode::Char('j') => Some(Action::Nav(NavKey::Down, Modifiers::NONE)),
            KeyCode::Char('h') => Some(Action::Nav(NavKey::Left, Modifiers::NONE)),
            KeyCode::Char('l') => Some(Action::Nav(NavKey::Right, Modifiers::NONE)),
            KeyCode::Tab => Some(Action::Nav(NavKey::Right, Modifiers::NONE)),
            KeyCode::BackTab => Some(Action::Nav(NavKey::Left, Modifiers::NONE)),
            KeyCode::PageUp => Some(Action::Page(-1)),
            KeyCode::PageDown => Some(Action::Page(1)),

            KeyCode::Char('c') if ctrl => Some(Action::CopySelection),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter | KeyCode::F(2) | KeyCode::Char('i') => Some(Action::EnterEdit),
            KeyCode::Char(' ') => Some(Action::ToggleCell),
            KeyCode::Char('o') => Some(Action::PromptInsert(InsertMode::Below)),
            KeyCode::Char('O') => Some(Action::PromptInsert(InsertMode::Above)),
            KeyCode::Char('K') => Some(Action::MoveRow(MoveDirection::Up)),
            KeyCode::Char('J') => Some(Action::MoveRow(MoveDirection::Down)),
            KeyCode::Char('a') => Some(Action::AppendRow),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::PromptDelete),
            KeyCode::Char('y') => Some(Action::CopySelection),
            KeyCode::Char('e') => Some(Action::ExportSelection),
            KeyCode::Char('E') => Some(Action::ExportLines),
            KeyCode::Char('g') | KeyCode::Char(':') => Some(Action::PromptGoto),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ShowHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        Mode::Edit => match key.code {
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },

        Mode::InsertPrompt(_) => match key.code {
            KeyCode::Enter => Some(Action::ConfirmInsert),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },

        Mode::GotoPrompt => match key.code {
            KeyCode::Enter => Some(Action::ConfirmGoto),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },

        Mode::ConfirmDelete => match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmDelete),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Cancel),
            _ => None,
        },
    }
}

pub fn status_hint() -> &'static str {
    "arrows:move  shift:extend  space:toggle  i:edit  o/O:insert  J/K:move row  d:delete  y:copy  e:export  g:goto  ?:help  q:quit"
}
