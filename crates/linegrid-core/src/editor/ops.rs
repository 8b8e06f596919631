//! Structural row edits.
//!
//! Row identity is positional, so every insert, move or delete empties the
//! selection and leaves only the keyboard focus behind.

use linegrid_engine::CellCoord;

use super::Editor;

/// Most rows a single insert adds.
pub const MAX_INSERT_ROWS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertMode {
    Above,
    Below,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Outcome of a structural edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowChange {
    /// Rows inserted, moved or removed.
    pub rows: usize,
    /// Row the focus landed on.
    pub focus_row: usize,
}

impl Editor {
    /// Close any open edit and drag before the rows shift underneath them.
    fn prepare_structural_edit(&mut self) {
        self.close_edit();
        self.drag = None;
    }

    fn settle_focus(&mut self, row: usize) -> usize {
        let row = row.min(self.store.last_index());
        let col = self.focused_col();
        self.selection.reset_to_focus(CellCoord::new(row, col));
        self.modified = true;
        row
    }

    /// Insert `count` blank lines above or below `index`. The count is clamped
    /// to 1..=100. Focus lands on the first new line.
    pub fn insert_rows(&mut self, index: usize, mode: InsertMode, count: usize) -> RowChange {
        self.prepare_structural_edit();
        let count = count.clamp(1, MAX_INSERT_ROWS);
        let index = index.min(self.store.last_index());
        let at = match mode {
            InsertMode::Above => index,
            InsertMode::Below => index + 1,
        };
        let pos = self.store.insert_at(at, count);
        let focus_row = self.settle_focus(pos);
        log::debug!("inserted {} rows at {} ({:?} {})", count, pos, mode, index);
        RowChange {
            rows: count,
            focus_row,
        }
    }

    /// Swap a line with its neighbour. `None` at either end, with nothing
    /// changed.
    pub fn move_row(&mut self, index: usize, direction: MoveDirection) -> Option<RowChange> {
        if index >= self.store.len() {
            return None;
        }
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1)?,
            MoveDirection::Down => Some(index + 1).filter(|&t| t < self.store.len())?,
        };
        self.prepare_structural_edit();
        if !self.store.swap(index, target) {
            return None;
        }
        let focus_row = self.settle_focus(target);
        log::debug!("moved row {} {:?} to {}", index, direction, target);
        Some(RowChange {
            rows: 1,
            focus_row,
        })
    }

    /// Remove lines. Indices past the end are ignored; an empty store is
    /// re-seeded with one blank line. Focus stays near the first removed row.
    pub fn delete_rows(&mut self, indices: &[usize]) -> Option<RowChange> {
        let len = self.store.len();
        let first = indices.iter().copied().filter(|&i| i < len).min()?;
        self.prepare_structural_edit();
        let removed = self.store.remove_at(indices);
        let focus_row = self.settle_focus(first);
        log::debug!("deleted {} rows, {} remain", removed, self.store.len());
        Some(RowChange {
            rows: removed,
            focus_row,
        })
    }

    pub fn insert_at_focus(&mut self, mode: InsertMode, count: usize) -> RowChange {
        self.insert_rows(self.focused_row(), mode, count)
    }

    pub fn move_focused(&mut self, direction: MoveDirection) -> Option<RowChange> {
        self.move_row(self.focused_row(), direction)
    }

    /// Rows a delete command acts on: every selected row, or the focused one.
    pub fn rows_to_delete(&self) -> Vec<usize> {
        if self.selection.is_empty() {
            vec![self.focused_row()]
        } else {
            self.selection.rows()
        }
    }

    pub fn delete_selected(&mut self) -> Option<RowChange> {
        let rows = self.rows_to_delete();
        self.delete_rows(&rows)
    }

    /// Append one blank line and focus it.
    pub fn append_row(&mut self) -> RowChange {
        self.prepare_structural_edit();
        let row = self.store.append();
        let focus_row = self.settle_focus(row);
        RowChange { rows: 1, focus_row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{Catalog, Layout, LineRecord};
    use crate::selection::SelectionState;

    fn editor(rows: usize) -> Editor {
        let lines = (0..rows)
            .map(|i| LineRecord {
                qty: Some(i as f64),
                ..LineRecord::blank()
            })
            .collect();
        Editor::new(Layout::bom(), Catalog::default(), lines)
    }

    fn qtys(ed: &Editor) -> Vec<Option<f64>> {
        ed.lines().iter().map(|l| l.qty).collect()
    }

    #[test]
    fn test_insert_above_and_below() {
        let mut ed = editor(2);
        let change = ed.insert_rows(1, InsertMode::Above, 1);
        assert_eq!(change, RowChange { rows: 1, focus_row: 1 });
        assert_eq!(qtys(&ed), vec![Some(0.0), None, Some(1.0)]);

        let change = ed.insert_rows(2, InsertMode::Below, 2);
        assert_eq!(change.focus_row, 3);
        assert_eq!(ed.row_count(), 5);
        assert_eq!(ed.lines()[4].qty, None);
    }

    #[test]
    fn test_insert_count_is_clamped() {
        let mut ed = editor(1);
        assert_eq!(ed.insert_rows(0, InsertMode::Below, 0).rows, 1);
        assert_eq!(ed.insert_rows(0, InsertMode::Below, 500).rows, MAX_INSERT_ROWS);
        assert_eq!(ed.row_count(), 2 + MAX_INSERT_ROWS);
    }

    #[test]
    fn test_insert_keeps_focus_column() {
        let mut ed = editor(3);
        ed.select_single(CellCoord::new(2, 5));
        ed.insert_rows(2, InsertMode::Above, 1);
        assert_eq!(ed.selection().state(), SelectionState::Empty);
        assert_eq!(ed.selection().anchor(), None);
        assert_eq!(ed.selection().focus(), Some(CellCoord::new(2, 5)));
        assert!(ed.modified);
    }

    #[test]
    fn test_move_row_follows_focus() {
        let mut ed = editor(3);
        ed.select_single(CellCoord::new(0, 3));
        let change = ed.move_row(0, MoveDirection::Down).unwrap();
        assert_eq!(change.focus_row, 1);
        assert_eq!(qtys(&ed), vec![Some(1.0), Some(0.0), Some(2.0)]);
        assert_eq!(ed.selection().focus(), Some(CellCoord::new(1, 3)));
        assert!(ed.selection().is_empty());
    }

    #[test]
    fn test_move_at_boundary_is_noop() {
        let mut ed = editor(2);
        ed.select_single(CellCoord::new(1, 3));
        assert_eq!(ed.move_row(1, MoveDirection::Down), None);
        assert_eq!(ed.move_row(9, MoveDirection::Up), None);
        assert_eq!(ed.selection().len(), 1);
        assert!(!ed.modified);
    }

    #[test]
    fn test_delete_rows_focus_clamps() {
        let mut ed = editor(4);
        let change = ed.delete_rows(&[3, 2]).unwrap();
        assert_eq!(change, RowChange { rows: 2, focus_row: 1 });
        assert_eq!(qtys(&ed), vec![Some(0.0), Some(1.0)]);
    }

    #[test]
    fn test_delete_ignores_out_of_range() {
        let mut ed = editor(2);
        assert_eq!(ed.delete_rows(&[]), None);
        assert_eq!(ed.delete_rows(&[7]), None);
        let change = ed.delete_rows(&[7, 0]).unwrap();
        assert_eq!(change.rows, 1);
        assert_eq!(ed.row_count(), 1);
    }

    #[test]
    fn test_delete_selected_uses_selection_rows() {
        let mut ed = editor(5);
        ed.select_single(CellCoord::new(1, 3));
        ed.extend_to(CellCoord::new(3, 4), false);
        let change = ed.delete_selected().unwrap();
        assert_eq!(change.rows, 3);
        assert_eq!(qtys(&ed), vec![Some(0.0), Some(4.0)]);
        assert_eq!(ed.selection().focus(), Some(CellCoord::new(1, 4)));
    }

    #[test]
    fn test_row_commands_without_focus_use_first_row() {
        let mut ed = editor(2);
        let change = ed.insert_at_focus(InsertMode::Above, 1);
        assert_eq!(change.focus_row, 0);
        assert_eq!(ed.lines()[0].qty, None);
    }

    #[test]
    fn test_structural_edit_abandons_drag() {
        let mut ed = editor(3);
        ed.begin_drag(CellCoord::new(0, 3));
        ed.move_row(0, MoveDirection::Down);
        assert!(!ed.is_dragging());
    }

    #[test]
    fn test_append_row() {
        let mut ed = editor(1);
        let change = ed.append_row();
        assert_eq!(change.focus_row, 1);
        assert_eq!(ed.row_count(), 2);
    }
}
