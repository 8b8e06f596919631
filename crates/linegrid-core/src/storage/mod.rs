//! Loading line lists and catalogs, exporting CSV.

pub mod csv;
pub mod json;

pub use self::csv::{
    SelectionEntry, SelectionPayload, lines_to_csv, selection_export_filename, write_lines_csv,
    write_selection_csv,
};
pub use self::json::{load_catalog, load_lines, parse_catalog, parse_lines};
