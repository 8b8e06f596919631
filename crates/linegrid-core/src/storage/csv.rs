//! CSV export of selections and whole line lists.

use crate::editor::Editor;
use crate::error::Result;
use chrono::NaiveDateTime;
use std::path::Path;

/// Header row of a serialized selection.
pub const SELECTION_HEADER: [&str; 3] = ["Row", "Column", "Value"];

/// One selected cell: 1-based row number, column key and display value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionEntry {
    pub row: usize,
    pub column: String,
    pub value: String,
}

/// Selected cells in row-major order, ready for a clipboard or a file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPayload {
    pub entries: Vec<SelectionEntry>,
}

impl SelectionPayload {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Row,Column,Value` CSV text.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv_writer(Vec::new());
        writer.write_record(SELECTION_HEADER)?;
        for entry in &self.entries {
            writer.write_record([
                entry.row.to_string(),
                entry.column.clone(),
                guard_formula(&entry.value),
            ])?;
        }
        finish(writer)
    }
}

fn csv_writer<W: std::io::Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes).map_err(std::io::Error::other)?)
}

/// Guard against CSV formula injection in spreadsheet apps. Plain numbers
/// pass through.
fn guard_formula(field: &str) -> String {
    let first_non_space = field.trim_start_matches([' ', '\t']).chars().next();
    if matches!(first_non_space, Some('=' | '+' | '-' | '@')) && field.trim().parse::<f64>().is_err() {
        format!("'{}", field)
    } else {
        field.to_string()
    }
}

/// `selection_<YYYY-MM-DD_HH_MM_SS>.csv`
pub fn selection_export_filename(at: NaiveDateTime) -> String {
    format!("selection_{}.csv", at.format("%Y-%m-%d_%H_%M_%S"))
}

pub fn write_selection_csv(path: &Path, payload: &SelectionPayload) -> Result<()> {
    std::fs::write(path, payload.to_csv()?)?;
    log::info!("exported {} selected cells to {}", payload.len(), path.display());
    Ok(())
}

/// The whole line list: a header of column labels, then one row per line.
pub fn lines_to_csv(editor: &Editor) -> Result<String> {
    let layout = editor.layout();
    let mut writer = csv_writer(Vec::new());
    writer.write_record(layout.labels())?;
    for row in 0..editor.row_count() {
        let record: Vec<String> = (0..layout.len())
            .map(|col| guard_formula(&editor.display_text(row, col)))
            .collect();
        writer.write_record(&record)?;
    }
    finish(writer)
}

pub fn write_lines_csv(path: &Path, editor: &Editor) -> Result<()> {
    std::fs::write(path, lines_to_csv(editor)?)?;
    log::info!("exported {} lines to {}", editor.row_count(), path.display());
    Ok(())
}
