//! linegrid_engine - Selection geometry for line-item grids.

pub mod error;
pub mod grid;

pub use error::EngineError;
pub use grid::{
    CellCoord, CellRect, ColumnKind, ColumnSet, ColumnSpec, Edges, bottom_right_of,
    connected_component, rectangle, selection_edges,
};
