//! Keyboard navigation over the grid.

use linegrid_engine::CellCoord;

use super::{Modifiers, SelectionModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Where `key` leads from `from` in a `rows` x `cols` grid.
///
/// Ctrl turns a step into a jump to the edge of the grid.
pub fn nav_target(from: CellCoord, key: NavKey, ctrl: bool, rows: usize, cols: usize) -> CellCoord {
    let last_row = rows.saturating_sub(1);
    let last_col = cols.saturating_sub(1);
    let from = from.clamped(rows, cols);
    match (key, ctrl) {
        (NavKey::Up, false) => CellCoord::new(from.row.saturating_sub(1), from.col),
        (NavKey::Up, true) => CellCoord::new(0, from.col),
        (NavKey::Down, false) => CellCoord::new((from.row + 1).min(last_row), from.col),
        (NavKey::Down, true) => CellCoord::new(last_row, from.col),
        (NavKey::Left, false) => CellCoord::new(from.row, from.col.saturating_sub(1)),
        (NavKey::Left, true) => CellCoord::new(from.row, 0),
        (NavKey::Right, false) => CellCoord::new(from.row, (from.col + 1).min(last_col)),
        (NavKey::Right, true) => CellCoord::new(from.row, last_col),
        (NavKey::Home, false) => CellCoord::new(from.row, 0),
        (NavKey::Home, true) => CellCoord::new(0, 0),
        (NavKey::End, false) => CellCoord::new(from.row, last_col),
        (NavKey::End, true) => CellCoord::new(last_row, last_col),
    }
}

/// Apply a navigation key. Returns false when there is nowhere to start from.
///
/// With shift the rectangle from the anchor (or focus) to the target is
/// selected, added to the selection when ctrl is also held. Without shift the
/// selection collapses onto the target, ctrl jumps included.
pub fn navigate(
    selection: &mut SelectionModel,
    key: NavKey,
    mods: Modifiers,
    rows: usize,
    cols: usize,
) -> bool {
    let Some(from) = selection.focus().or(selection.anchor()) else {
        return false;
    };
    let target = nav_target(from, key, mods.ctrl, rows, cols);
    if mods.shift {
        let base = selection.anchor().unwrap_or(from);
        selection.extend_rectangle(base, target, mods.ctrl);
    } else {
        selection.select_single(target);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> CellCoord {
        CellCoord::new(row, col)
    }

    #[test]
    fn test_steps_clamp_at_edges() {
        assert_eq!(nav_target(c(0, 0), NavKey::Up, false, 5, 8), c(0, 0));
        assert_eq!(nav_target(c(0, 0), NavKey::Left, false, 5, 8), c(0, 0));
        assert_eq!(nav_target(c(4, 7), NavKey::Down, false, 5, 8), c(4, 7));
        assert_eq!(nav_target(c(4, 7), NavKey::Right, false, 5, 8), c(4, 7));
        assert_eq!(nav_target(c(2, 3), NavKey::Down, false, 5, 8), c(3, 3));
    }

    #[test]
    fn test_ctrl_jumps() {
        assert_eq!(nav_target(c(2, 3), NavKey::Up, true, 5, 8), c(0, 3));
        assert_eq!(nav_target(c(2, 3), NavKey::Down, true, 5, 8), c(4, 3));
        assert_eq!(nav_target(c(2, 3), NavKey::Left, true, 5, 8), c(2, 0));
        assert_eq!(nav_target(c(2, 3), NavKey::Right, true, 5, 8), c(2, 7));
        assert_eq!(nav_target(c(2, 3), NavKey::Home, false, 5, 8), c(2, 0));
        assert_eq!(nav_target(c(2, 3), NavKey::End, false, 5, 8), c(2, 7));
        assert_eq!(nav_target(c(2, 3), NavKey::Home, true, 5, 8), c(0, 0));
        assert_eq!(nav_target(c(2, 3), NavKey::End, true, 5, 8), c(4, 7));
    }

    #[test]
    fn test_stale_origin_is_clamped() {
        assert_eq!(nav_target(c(9, 9), NavKey::Up, false, 3, 4), c(1, 3));
    }

    #[test]
    fn test_navigate_without_focus_is_noop() {
        let mut sel = SelectionModel::new();
        assert!(!navigate(&mut sel, NavKey::Down, Modifiers::NONE, 3, 3));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_shift_arrow_extends_from_anchor() {
        let mut sel = SelectionModel::new();
        sel.select_single(c(1, 1));
        navigate(&mut sel, NavKey::Down, Modifiers::SHIFT, 5, 5);
        navigate(&mut sel, NavKey::Right, Modifiers::SHIFT, 5, 5);
        assert_eq!(sel.len(), 4);
        assert_eq!(sel.anchor(), Some(c(1, 1)));
        assert_eq!(sel.focus(), Some(c(2, 2)));
    }

    #[test]
    fn test_ctrl_arrow_collapses_multi_selection() {
        let mut sel = SelectionModel::new();
        sel.extend_rectangle(c(0, 0), c(2, 2), false);
        navigate(&mut sel, NavKey::Down, Modifiers::CTRL, 5, 5);
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.focus(), Some(c(4, 2)));
    }

    #[test]
    fn test_shift_ctrl_arrow_is_additive() {
        let mut sel = SelectionModel::new();
        sel.select_single(c(0, 0));
        sel.toggle(c(3, 3));
        navigate(&mut sel, NavKey::Right, Modifiers::SHIFT | Modifiers::CTRL, 5, 5);
        // Anchor (0,0) to row end, keeping (3,3).
        assert!(sel.contains(c(3, 3)));
        assert!(sel.contains(c(0, 4)));
    }

    #[test]
    fn test_plain_arrow_moves_single_cell() {
        let mut sel = SelectionModel::new();
        sel.select_single(c(1, 1));
        navigate(&mut sel, NavKey::Left, Modifiers::NONE, 5, 5);
        assert_eq!(sel.selected().len(), 1);
        assert_eq!(sel.anchor(), Some(c(1, 0)));
    }
}
