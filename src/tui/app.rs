//! Application state and logic.
//!
//! [`App`] wraps one [`Editor`] with what only the terminal needs: the mode,
//! text buffers, the scroll position and the status line. Every change to
//! lines or selection goes through the editor.

use linegrid_core::editor::{InsertMode, MAX_INSERT_ROWS, MoveDirection};
use linegrid_core::storage::{selection_export_filename, write_lines_csv, write_selection_csv};
use linegrid_core::{CellCoord, ClipboardSink, Editor, LineColumn, Modifiers, NavKey};
use std::path::PathBuf;

use crate::config::Settings;

/// Modal state of the front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Move around and select.
    Normal,
    /// Type into the focused cell.
    Edit,
    /// Asking how many rows to insert.
    InsertPrompt(InsertMode),
    /// Asking before deleting rows.
    ConfirmDelete,
    /// Asking for a cell to jump to.
    GotoPrompt,
}

pub struct App {
    pub editor: Editor,
    pub mode: Mode,
    /// Edit buffer for cell editing
    pub edit_buffer: String,
    /// Cursor position within edit buffer (byte offset)
    pub edit_cursor: usize,
    /// Text typed into the insert or goto prompt
    pub prompt_buffer: String,
    pub prompt_cursor: usize,
    pub viewport_row: usize,
    pub viewport_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub status_message: String,
    /// Set after a first quit request with unexported edits
    pub confirm_quit: bool,
    pub help_modal: bool,
    pub help_scroll: usize,
    pub export_dir: PathBuf,
    pub insert_count: usize,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(editor: Editor, settings: &Settings, clipboard: Box<dyn ClipboardSink>) -> Self {
        App {
            editor,
            mode: Mode::Normal,
            edit_buffer: String::new(),
            edit_cursor: 0,
            prompt_buffer: String::new(),
            prompt_cursor: 0,
            viewport_row: 0,
            viewport_col: 0,
            visible_rows: 20,
            visible_cols: 8,
            status_message: String::new(),
            confirm_quit: false,
            help_modal: false,
            help_scroll: 0,
            export_dir: settings.export_dir.clone(),
            insert_count: settings.insert_count,
            clipboard,
        }
    }

    /// Display width of a column.
    pub fn column_width(&self, col: usize) -> usize {
        let base = match self.editor.layout().binding(col) {
            LineColumn::Seq => 4,
            LineColumn::Code => 12,
            LineColumn::Item => 22,
            LineColumn::Qty => 10,
            LineColumn::Unit => 6,
            LineColumn::Wastage => 10,
            LineColumn::Optional => 8,
            LineColumn::Remarks => 24,
        };
        let label = self
            .editor
            .layout()
            .columns()
            .get(col)
            .map_or(0, |c| c.label.chars().count());
        base.max(label)
    }

    /// Scroll so the focused cell is on screen.
    pub fn update_viewport(&mut self) {
        let row = self.editor.focused_row();
        let col = self.editor.focused_col();

        if row < self.viewport_row {
            self.viewport_row = row;
        } else if row >= self.viewport_row + self.visible_rows {
            self.viewport_row = row + 1 - self.visible_rows;
        }
        self.viewport_row = self
            .viewport_row
            .min(self.editor.row_count().saturating_sub(1));

        if col < self.viewport_col {
            self.viewport_col = col;
        } else if col >= self.viewport_col + self.visible_cols {
            self.viewport_col = col + 1 - self.visible_cols;
        }
    }

    pub fn navigate(&mut self, key: NavKey, mods: Modifiers) {
        if self.editor.selection().focus().is_none() && self.editor.selection().anchor().is_none() {
            // Nothing to move from yet; start at the top-left data cell.
            self.editor.select_single(CellCoord::new(0, 1));
        } else {
            self.editor.navigate(key, mods);
        }
        self.update_viewport();
    }

    /// Move the focus a page up or down, collapsing the selection.
    pub fn page(&mut self, dir: i32) {
        let rows = self.visible_rows.max(1);
        let row = self.editor.focused_row();
        let target = if dir < 0 {
            row.saturating_sub(rows)
        } else {
            row.saturating_add(rows)
        };
        let col = self.editor.focused_col();
        self.editor.select_single(CellCoord::new(target, col));
        self.update_viewport();
    }

    pub fn click(&mut self, coord: CellCoord, mods: Modifiers) {
        self.editor.click(coord, mods);
        self.update_viewport();
    }

    pub fn toggle_focused(&mut self) {
        if let Some(focus) = self.editor.selection().focus() {
            self.editor.toggle(focus);
        }
    }

    /// Clear the selection, or leave whatever mode we are in.
    pub fn cancel(&mut self) {
        match self.mode {
            Mode::Normal => self.editor.clear_selection(),
            Mode::Edit => {
                let _ = self.editor.cancel_edit();
                self.status_message = "Edit cancelled".to_string();
            }
            Mode::InsertPrompt(_) | Mode::ConfirmDelete | Mode::GotoPrompt => {}
        }
        self.mode = Mode::Normal;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.prompt_buffer.clear();
        self.prompt_cursor = 0;
    }

    pub fn enter_edit_mode(&mut self) {
        let Some(focus) = self.editor.selection().focus() else {
            self.status_message = "Select a cell to edit".to_string();
            return;
        };
        match self.editor.begin_edit(focus) {
            Ok(()) => {
                self.mode = Mode::Edit;
                self.edit_buffer = self.editor.input_text(focus);
                self.edit_cursor = self.edit_buffer.len();
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    /// Write the edit buffer into the line. A parse error keeps the edit open.
    pub fn commit_edit(&mut self) {
        if let Err(e) = self.editor.apply_input(&self.edit_buffer) {
            self.status_message = format!("Error: {}", e);
            return;
        }
        match self.editor.commit_edit() {
            Ok(coord) => {
                self.status_message = format!(
                    "Updated {}",
                    self.editor.layout().columns().format_coord(coord)
                );
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
        self.mode = Mode::Normal;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
    }

    pub fn open_insert_prompt(&mut self, mode: InsertMode) {
        self.mode = Mode::InsertPrompt(mode);
        self.prompt_buffer = self.insert_count.to_string();
        self.prompt_cursor = self.prompt_buffer.len();
    }

    pub fn confirm_insert(&mut self) {
        let Mode::InsertPrompt(mode) = self.mode else {
            return;
        };
        let count = match self.prompt_buffer.trim().parse::<usize>() {
            Ok(n) if (1..=MAX_INSERT_ROWS).contains(&n) => n,
            _ => {
                self.status_message = format!(
                    "Error: row count must be a number from 1 to {}",
                    MAX_INSERT_ROWS
                );
                return;
            }
        };
        let change = self.editor.insert_at_focus(mode, count);
        self.status_message = format!(
            "Inserted {} row{} at {}",
            change.rows,
            plural(change.rows),
            change.focus_row + 1
        );
        self.mode = Mode::Normal;
        self.prompt_buffer.clear();
        self.prompt_cursor = 0;
        self.update_viewport();
    }

    pub fn open_goto_prompt(&mut self) {
        self.mode = Mode::GotoPrompt;
        self.prompt_buffer.clear();
        self.prompt_cursor = 0;
    }

    /// Jump to the `<line>:<column>` cell typed into the prompt. A bad
    /// reference keeps the prompt open.
    pub fn confirm_goto(&mut self) {
        let columns = self.editor.layout().columns();
        let coord = match columns.parse_coord(&self.prompt_buffer) {
            Ok(coord) => coord,
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                return;
            }
        };
        if coord.row >= self.editor.row_count() {
            self.status_message = format!("Line {} out of range", coord.row + 1);
            return;
        }
        self.status_message = format!("Jumped to {}", columns.format_coord(coord));
        self.editor.select_single(coord);
        self.mode = Mode::Normal;
        self.prompt_buffer.clear();
        self.prompt_cursor = 0;
        self.update_viewport();
    }

    pub fn open_delete_confirm(&mut self) {
        self.mode = Mode::ConfirmDelete;
    }

    pub fn delete_prompt_text(&self) -> String {
        let rows = self.editor.rows_to_delete();
        match rows.as_slice() {
            [row] => format!("Delete line {}? (y/n)", row + 1),
            _ => format!("Delete {} lines? (y/n)", rows.len()),
        }
    }

    pub fn confirm_delete(&mut self) {
        self.mode = Mode::Normal;
        match self.editor.delete_selected() {
            Some(change) => {
                self.status_message =
                    format!("Deleted {} row{}", change.rows, plural(change.rows));
            }
            None => self.status_message = "Nothing to delete".to_string(),
        }
        self.update_viewport();
    }

    pub fn move_row(&mut self, direction: MoveDirection) {
        match self.editor.move_focused(direction) {
            Some(change) => self.status_message = format!("Moved to row {}", change.focus_row + 1),
            None => self.status_message = "Row is already at the edge".to_string(),
        }
        self.update_viewport();
    }

    pub fn append_row(&mut self) {
        let change = self.editor.append_row();
        self.status_message = format!("Added row {}", change.focus_row + 1);
        self.update_viewport();
    }

    pub fn copy_selection(&mut self) {
        match self.editor.copy_selection(self.clipboard.as_mut()) {
            Ok(0) => self.status_message = "Nothing selected".to_string(),
            Ok(n) => self.status_message = format!("Copied {} cell{}", n, plural(n)),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    /// Write the selection to a timestamped CSV file in the export dir.
    pub fn export_selection(&mut self) {
        let payload = self.editor.selection_payload();
        if payload.is_empty() {
            self.status_message = "Nothing selected".to_string();
            return;
        }
        let name = selection_export_filename(chrono::Local::now().naive_local());
        let path = self.export_dir.join(name);
        match write_selection_csv(&path, &payload) {
            Ok(()) => self.status_message = format!("Exported to {}", path.display()),
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    /// Write every line to `<input>.csv`, or `lines.csv` in the export dir.
    pub fn export_lines(&mut self) {
        let path = match self.editor.file_path.as_ref() {
            Some(p) => p.with_extension("csv"),
            None => self.export_dir.join("lines.csv"),
        };
        match write_lines_csv(&path, &self.editor) {
            Ok(()) => {
                self.editor.modified = false;
                self.status_message = format!("Exported to {}", path.display());
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
    }

    /// Returns true when the app should exit. Unexported edits need a second
    /// request.
    pub fn request_quit(&mut self) -> bool {
        if self.editor.modified && !self.confirm_quit {
            self.confirm_quit = true;
            self.status_message =
                "Edits are not exported. Press E to export or q again to quit".to_string();
            return false;
        }
        true
    }

    pub fn open_help(&mut self) {
        self.help_modal = true;
        self.help_scroll = 0;
    }

    pub fn close_help_modal(&mut self) {
        self.help_modal = false;
    }

    pub fn scroll_help_by(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
