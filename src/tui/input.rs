use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use linegrid_core::{Modifiers, NavKey};
use ratatui::prelude::*;
use std::io;

use super::actions::{ApplyResult, apply_action, handle_unbound_key};
use super::app::{App, Mode};
use super::keymap::translate;
use super::ui;

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_help_modal(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_help_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_help_by(-1),
        KeyCode::PageDown => app.scroll_help_by(12),
        KeyCode::PageUp => app.scroll_help_by(-12),
        _ => {}
    }
}

/// Returns true when the key asks the app to exit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if app.help_modal {
        handle_help_key(app, key);
        return false;
    }
    match translate(app.mode, key) {
        Some(action) => apply_action(app, action) == ApplyResult::Quit,
        None => {
            handle_unbound_key(app, key);
            false
        }
    }
}

fn mouse_modifiers(mouse: &MouseEvent) -> Modifiers {
    Modifiers {
        shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: mouse.modifiers.contains(KeyModifiers::CONTROL),
    }
}

/// Pointer gestures: plain press starts a drag, shift/ctrl press is a
/// modified click, movement extends the drag, release ends it.
fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if app.help_modal || app.mode != Mode::Normal {
        return;
    }

    let [_cell_area, grid_area, _summary, _status] = ui::split_main_chunks(terminal_area);
    let cell = ui::grid_cell_at(app, grid_area, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(coord) = cell else {
                return;
            };
            let mods = mouse_modifiers(&mouse);
            if mods.is_none() {
                app.editor.begin_drag(coord);
            } else {
                app.click(coord, mods);
            }
            app.confirm_quit = false;
            app.status_message.clear();
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(coord) = cell
                && app.editor.is_dragging()
            {
                app.editor.drag_to(coord);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.editor.end_drag(),
        MouseEventKind::ScrollDown => app.navigate(NavKey::Down, Modifiers::NONE),
        MouseEventKind::ScrollUp => app.navigate(NavKey::Up, Modifiers::NONE),
        _ => {}
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let terminal_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, terminal_area, mouse);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use linegrid_core::{Catalog, CellCoord, Editor, Layout, LineRecord, MemoryClipboard};

    fn app(rows: usize) -> App {
        let lines = (0..rows).map(|_| LineRecord::blank()).collect();
        let editor = Editor::new(Layout::bom(), Catalog::default(), lines);
        let mut app = App::new(
            editor,
            &Settings::default(),
            Box::new(MemoryClipboard::default()),
        );
        app.visible_cols = 4;
        app.visible_rows = 10;
        app
    }

    fn mouse(kind: MouseEventKind, col: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: col,
            row,
            modifiers,
        }
    }

    fn left_click(col: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), col, row, KeyModifiers::empty())
    }

    /// Terminal point over body cell (row, col) for the first few columns.
    fn cell_point(app: &App, terminal_area: Rect, row: u16, col: usize) -> (u16, u16) {
        let [_cell, grid_area, _summary, _status] = ui::split_main_chunks(terminal_area);
        let x = (0..col).fold(grid_area.x + 1, |x, c| {
            x + app.column_width(c) as u16 + ui::GRID_COLUMN_SPACING
        });
        (x, grid_area.y + 2 + row)
    }

    #[test]
    fn handle_mouse_event_drag_selects_rectangle() {
        let mut app = app(5);
        let area = Rect::new(0, 0, 120, 30);
        let (x0, y0) = cell_point(&app, area, 1, 1);
        let (x1, y1) = cell_point(&app, area, 3, 2);

        handle_mouse_event(&mut app, area, left_click(x0, y0));
        assert!(app.editor.is_dragging());
        handle_mouse_event(
            &mut app,
            area,
            mouse(MouseEventKind::Drag(MouseButton::Left), x1, y1, KeyModifiers::empty()),
        );
        handle_mouse_event(
            &mut app,
            area,
            mouse(MouseEventKind::Up(MouseButton::Left), x1, y1, KeyModifiers::empty()),
        );

        assert!(!app.editor.is_dragging());
        assert_eq!(app.editor.selection().len(), 6);
        assert_eq!(app.editor.selection().anchor(), Some(CellCoord::new(1, 1)));
        assert_eq!(app.editor.selection().focus(), Some(CellCoord::new(3, 2)));
    }

    #[test]
    fn handle_mouse_event_ctrl_click_toggles() {
        let mut app = app(3);
        let area = Rect::new(0, 0, 120, 30);
        let (x0, y0) = cell_point(&app, area, 0, 3);
        let (x1, y1) = cell_point(&app, area, 2, 3);

        handle_mouse_event(&mut app, area, left_click(x0, y0));
        let ctrl_click = mouse(
            MouseEventKind::Down(MouseButton::Left),
            x1,
            y1,
            KeyModifiers::CONTROL,
        );
        handle_mouse_event(&mut app, area, ctrl_click);
        assert_eq!(app.editor.selection().len(), 2);
        handle_mouse_event(&mut app, area, ctrl_click);
        assert_eq!(app.editor.selection().len(), 1);
    }

    #[test]
    fn handle_mouse_event_shift_click_extends() {
        let mut app = app(4);
        let area = Rect::new(0, 0, 120, 30);
        let (x0, y0) = cell_point(&app, area, 0, 3);
        let (x1, y1) = cell_point(&app, area, 2, 3);

        handle_mouse_event(&mut app, area, left_click(x0, y0));
        handle_mouse_event(
            &mut app,
            area,
            mouse(MouseEventKind::Down(MouseButton::Left), x1, y1, KeyModifiers::SHIFT),
        );
        assert_eq!(app.editor.selection().len(), 3);
        assert_eq!(app.editor.selection().anchor(), Some(CellCoord::new(0, 3)));
    }

    #[test]
    fn handle_mouse_event_ignores_clicks_outside_normal_mode() {
        let mut app = app(3);
        app.mode = Mode::ConfirmDelete;
        let area = Rect::new(0, 0, 120, 30);
        let (x, y) = cell_point(&app, area, 0, 1);
        handle_mouse_event(&mut app, area, left_click(x, y));
        assert!(app.editor.selection().is_empty());
    }

    #[test]
    fn handle_mouse_event_ignores_non_cell_clicks() {
        let mut app = app(3);
        let area = Rect::new(0, 0, 120, 30);
        handle_mouse_event(&mut app, area, left_click(0, 0));
        assert!(app.editor.selection().is_empty());
        assert!(!app.editor.is_dragging());
    }

    #[test]
    fn handle_key_event_edits_and_commits() {
        let mut app = app(2);
        app.editor.select_single(CellCoord::new(0, 3));
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert!(!handle_key_event(&mut app, press(KeyCode::Enter)));
        assert_eq!(app.mode, Mode::Edit);
        for c in "4.5".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.editor.lines()[0].qty, Some(4.5));
    }

    #[test]
    fn handle_key_event_insert_prompt_accepts_digits_only() {
        let mut app = app(1);
        app.editor.select_single(CellCoord::new(0, 3));
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        handle_key_event(&mut app, press(KeyCode::Char('O')));
        assert_eq!(app.prompt_buffer, "1");
        handle_key_event(&mut app, press(KeyCode::Backspace));
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        handle_key_event(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.prompt_buffer, "2");
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.editor.row_count(), 3);
        assert_eq!(app.editor.focused_row(), 0);
    }

    #[test]
    fn handle_key_event_goto_selects_typed_cell() {
        let mut app = app(5);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        handle_key_event(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.mode, Mode::GotoPrompt);
        for c in "4:qty".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.editor.selection().len(), 1);
        assert_eq!(app.editor.selection().anchor(), Some(CellCoord::new(3, 3)));
        assert_eq!(app.status_message, "Jumped to 4:qty");
    }

    #[test]
    fn handle_key_event_goto_rejects_bad_reference() {
        let mut app = app(2);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        handle_key_event(&mut app, press(KeyCode::Char(':')));
        for c in "9:qty".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::GotoPrompt);
        assert_eq!(app.status_message, "Line 9 out of range");

        app.prompt_buffer = "1:colour".to_string();
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::GotoPrompt);
        assert!(app.status_message.starts_with("Error"));
        assert!(app.editor.selection().is_empty());

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.prompt_buffer.is_empty());
    }

    #[test]
    fn handle_key_event_help_modal_swallows_keys() {
        let mut app = app(1);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.help_modal);
        assert!(!handle_key_event(&mut app, press(KeyCode::Char('a'))));
        assert_eq!(app.editor.row_count(), 1);
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.help_modal);
        assert!(handle_key_event(&mut app, press(KeyCode::Char('q'))));
    }
}
