//! linegrid-core - UI-agnostic line editor model + storage.

pub mod aggregate;
pub mod clipboard;
pub mod editor;
pub mod error;
pub mod lines;
pub mod selection;
pub mod storage;

pub use aggregate::{Pill, SelectionSummary, SummaryDetail};
pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use editor::{Editor, GridRenderer, GridView, InsertMode, MoveDirection, RowChange, TextRenderer};
pub use error::{LinegridError, Result};
pub use lines::{Catalog, CellValue, Layout, LineColumn, LineRecord, RowStore};
pub use selection::{Modifiers, NavKey, SelectionModel, SelectionState};

pub use linegrid_engine::{CellCoord, ColumnKind, ColumnSet, ColumnSpec};
