//! The editor session (UI-agnostic).

mod edit;
mod ops;
mod state;
mod view;

pub use edit::FieldEdit;
pub use ops::{InsertMode, MAX_INSERT_ROWS, MoveDirection, RowChange};
pub use state::Editor;
pub use view::{GridRenderer, GridView, TextRenderer, ViewCell, ViewRow};
