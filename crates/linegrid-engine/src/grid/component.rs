//! Connected components of a selection.
//!
//! After a ctrl-click punches a hole in a rectangle, the focus has to land on
//! a cell that still reads as "the end" of the block the anchor belongs to.
//! This module finds that block with a breadth-first search over orthogonal
//! neighbours that are themselves selected.

use std::collections::{BTreeSet, VecDeque};

use super::CellCoord;

/// Cells of `selected` reachable from `start` through up/down/left/right steps
/// that stay inside `selected`.
///
/// A `start` outside the selection yields just `{start}`.
pub fn connected_component(start: CellCoord, selected: &BTreeSet<CellCoord>) -> BTreeSet<CellCoord> {
    if !selected.contains(&start) {
        return BTreeSet::from([start]);
    }

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for next in current.neighbors() {
            if selected.contains(&next) && !visited.contains(&next) {
                queue.push_back(next);
            }
        }
    }
    visited
}

/// The cell with the greatest row, ties broken by the greatest column index.
pub fn bottom_right_of<'a>(cells: impl IntoIterator<Item = &'a CellCoord>) -> Option<CellCoord> {
    cells.into_iter().copied().max_by_key(|c| (c.row, c.col))
}

/// Which sides of a selected cell border an unselected cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Outline edges for `coord` within `selected`. Unselected cells have none.
pub fn selection_edges(coord: CellCoord, selected: &BTreeSet<CellCoord>) -> Edges {
    if !selected.contains(&coord) {
        return Edges::default();
    }
    let has = |row: Option<usize>, col: Option<usize>| match (row, col) {
        (Some(r), Some(c)) => selected.contains(&CellCoord::new(r, c)),
        _ => false,
    };
    Edges {
        top: !has(coord.row.checked_sub(1), Some(coord.col)),
        bottom: !has(coord.row.checked_add(1), Some(coord.col)),
        left: !has(Some(coord.row), coord.col.checked_sub(1)),
        right: !has(Some(coord.row), coord.col.checked_add(1)),
    }
}
