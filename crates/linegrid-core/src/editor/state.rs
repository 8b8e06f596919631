use linegrid_engine::CellCoord;
use std::path::PathBuf;

use super::edit::FieldEdit;
use crate::aggregate::{SelectionSummary, summarize};
use crate::clipboard::ClipboardSink;
use crate::error::{LinegridError, Result};
use crate::lines::{Catalog, CellValue, Layout, LineRecord, RowStore};
use crate::selection::{Modifiers, NavKey, SelectionModel, navigate};
use crate::storage::{SelectionEntry, SelectionPayload};

/// One line editor: rows, selection and the gestures in flight.
///
/// Every coordinate handed in is clamped to the current rows and columns, so
/// the selection never points past the end of the store.
#[derive(Clone, Debug)]
pub struct Editor {
    pub(crate) layout: Layout,
    pub(crate) catalog: Catalog,
    pub(crate) store: RowStore,
    pub(crate) selection: SelectionModel,
    /// Anchor of an in-progress pointer drag.
    pub(crate) drag: Option<CellCoord>,
    pub(crate) edit: Option<FieldEdit>,
    /// Where the lines came from, if anywhere
    pub file_path: Option<PathBuf>,
    /// Whether lines were edited since load
    pub modified: bool,
}

impl Editor {
    pub fn new(layout: Layout, catalog: Catalog, lines: Vec<LineRecord>) -> Self {
        Editor {
            layout,
            catalog,
            store: RowStore::from_records(lines),
            selection: SelectionModel::new(),
            drag: None,
            edit: None,
            file_path: None,
            modified: false,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn lines(&self) -> &[LineRecord] {
        self.store.records()
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    pub fn col_count(&self) -> usize {
        self.layout.len()
    }

    pub fn clamp(&self, coord: CellCoord) -> CellCoord {
        coord.clamped(self.row_count(), self.col_count())
    }

    /// Row under keyboard focus, or the first row.
    pub fn focused_row(&self) -> usize {
        self.selection
            .focus()
            .map_or(0, |f| f.row.min(self.store.last_index()))
    }

    pub fn focused_col(&self) -> usize {
        self.selection
            .focus()
            .map_or(0, |f| self.layout.columns().clamp_index(f.col))
    }

    pub fn select_single(&mut self, coord: CellCoord) {
        let coord = self.clamp(coord);
        self.selection.select_single(coord);
    }

    /// Ctrl-click. A row that no longer exists is ignored.
    pub fn toggle(&mut self, coord: CellCoord) {
        if coord.row >= self.row_count() {
            return;
        }
        let coord = self.clamp(coord);
        self.selection.toggle(coord);
    }

    pub fn extend_to(&mut self, coord: CellCoord, additive: bool) {
        let coord = self.clamp(coord);
        self.selection.extend_to(coord, additive);
    }

    pub fn click(&mut self, coord: CellCoord, mods: Modifiers) {
        if mods.ctrl && !mods.shift {
            self.toggle(coord);
        } else {
            let coord = self.clamp(coord);
            self.selection.click(coord, mods);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn navigate(&mut self, key: NavKey, mods: Modifiers) -> bool {
        let (rows, cols) = (self.row_count(), self.col_count());
        navigate(&mut self.selection, key, mods, rows, cols)
    }

    /// Pointer down on a cell: select it and start a drag anchored there.
    pub fn begin_drag(&mut self, coord: CellCoord) {
        let coord = self.clamp(coord);
        self.selection.select_single(coord);
        self.drag = Some(coord);
    }

    /// Pointer moved over a cell during a drag.
    pub fn drag_to(&mut self, coord: CellCoord) {
        if let Some(anchor) = self.drag {
            let coord = self.clamp(coord);
            self.selection.extend_rectangle(anchor, coord, false);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Swap in a freshly loaded line list. Selection members past the new end
    /// are dropped.
    pub fn replace_lines(&mut self, lines: Vec<LineRecord>) {
        self.edit = None;
        self.drag = None;
        self.store.replace_all(lines);
        self.selection.retain_rows(self.store.len());
        self.modified = false;
        log::info!("reloaded {} lines", self.store.len());
    }

    pub fn cell_value(&self, row: usize, col: usize) -> CellValue {
        match self.store.get(row) {
            Some(line) => self.layout.cell_value(row, col, line, &self.catalog),
            None => CellValue::Empty,
        }
    }

    pub fn display_text(&self, row: usize, col: usize) -> String {
        match self.store.get(row) {
            Some(line) => self.layout.display_text(row, col, line, &self.catalog),
            None => String::new(),
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        summarize(
            self.layout.columns(),
            self.row_count(),
            self.selection.selected(),
            |c| self.cell_value(c.row, c.col),
        )
    }

    /// One entry per selected cell, row-major. Values are raw cell values,
    /// so wastage stays a plain percent number.
    pub fn selection_payload(&self) -> SelectionPayload {
        let entries = self
            .selection
            .selected()
            .iter()
            .map(|c| SelectionEntry {
                row: c.row + 1,
                column: self.layout.columns().key(c.col).to_string(),
                value: self.cell_value(c.row, c.col).to_string(),
            })
            .collect();
        SelectionPayload { entries }
    }

    /// Put the selection on a clipboard. Returns how many cells were copied.
    pub fn copy_selection(&self, sink: &mut dyn ClipboardSink) -> Result<usize> {
        let payload = self.selection_payload();
        if payload.is_empty() {
            return Ok(0);
        }
        if !sink.set_text(payload.to_csv()?) {
            return Err(LinegridError::ClipboardUnavailable);
        }
        log::debug!("copied {} cells", payload.len());
        Ok(payload.len())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(Layout::bom(), Catalog::default(), Vec::new())
    }
}
