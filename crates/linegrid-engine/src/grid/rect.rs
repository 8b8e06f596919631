//! Rectangle selection.
//!
//! A rectangle is the inclusive bounding box of two corner cells. Columns are
//! compared by their column-order index, so the result only depends on the
//! layout order, never on column keys.

use std::collections::BTreeSet;

use super::CellCoord;

/// Inclusive bounds of a rectangular block of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRect {
    /// The bounding box of two corners, in either order.
    pub fn spanning(a: CellCoord, b: CellCoord) -> CellRect {
        CellRect {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    /// Every cell in the rectangle, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + use<> {
        let CellRect {
            top,
            left,
            bottom,
            right,
        } = *self;
        (top..=bottom).flat_map(move |row| (left..=right).map(move |col| CellCoord::new(row, col)))
    }
}

/// All cells in the inclusive rectangle spanned by `a` and `b`.
///
/// `rectangle(a, b) == rectangle(b, a)` and `rectangle(a, a) == {a}`.
pub fn rectangle(a: CellCoord, b: CellCoord) -> BTreeSet<CellCoord> {
    CellRect::spanning(a, b).cells().collect()
}
