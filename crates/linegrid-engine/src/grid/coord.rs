//! Cell coordinates.
//!
//! A coordinate addresses one editable cell by row index and column-order
//! index. Coordinates order row-major, so a `BTreeSet<CellCoord>` iterates
//! top-to-bottom, left-to-right and its last element is the bottom-right cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a cell by row and column-order index (0-indexed).
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> CellCoord {
        CellCoord { row, col }
    }

    /// The orthogonal neighbours that exist on the non-negative quadrant:
    /// up, down, previous column, next column.
    pub fn neighbors(&self) -> impl Iterator<Item = CellCoord> + use<> {
        let CellCoord { row, col } = *self;
        let up = row.checked_sub(1).map(|r| CellCoord::new(r, col));
        let down = row.checked_add(1).map(|r| CellCoord::new(r, col));
        let left = col.checked_sub(1).map(|c| CellCoord::new(row, c));
        let right = col.checked_add(1).map(|c| CellCoord::new(row, c));
        [up, down, left, right].into_iter().flatten()
    }

    /// Clamp into a grid of `rows` x `cols`. Both must be non-zero.
    pub fn clamped(&self, rows: usize, cols: usize) -> CellCoord {
        CellCoord::new(
            self.row.min(rows.saturating_sub(1)),
            self.col.min(cols.saturating_sub(1)),
        )
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
