//! Selection geometry API.
//!
//! This module provides the layout-independent math behind grid selection:
//!
//! - [`ColumnSet`], [`ColumnSpec`], [`ColumnKind`] - Ordered column metadata
//! - [`CellCoord`] - Row / column-order index pair
//! - [`rectangle`], [`CellRect`] - Inclusive rectangle selection
//! - [`connected_component`], [`bottom_right_of`] - Focus recovery after a toggle
//! - [`selection_edges`] - Outline edges for rendering a selection

mod column;
mod component;
mod coord;
mod rect;

pub use column::{ColumnKind, ColumnSet, ColumnSpec};
pub use component::{Edges, bottom_right_of, connected_component, selection_edges};
pub use coord::CellCoord;
pub use rect::{CellRect, rectangle};
