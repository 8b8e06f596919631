//! Single-field editing with revert on cancel.

use linegrid_engine::CellCoord;

use super::Editor;
use crate::error::{LinegridError, Result};
use crate::lines::{Catalog, FieldValue, LineColumn, LineField, LineRecord};

/// An edit in progress: the cell, the field it writes and the value to
/// restore on cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldEdit {
    pub coord: CellCoord,
    pub column: LineColumn,
    pub field: LineField,
    original: FieldValue,
}

fn invalid(column: LineColumn, message: impl Into<String>) -> LinegridError {
    LinegridError::InvalidInput {
        column: column.key().to_string(),
        message: message.into(),
    }
}

fn parse_number(column: LineColumn, text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(invalid(column, format!("not a number: {}", text))),
    }
}

fn parse_flag(column: LineColumn, text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "n" | "false" | "0" => Ok(false),
        "yes" | "y" | "true" | "1" => Ok(true),
        other => Err(invalid(column, format!("expected yes or no, got {}", other))),
    }
}

/// Parse typed text for `column` and write it into `line`.
fn apply_to_line(line: &mut LineRecord, column: LineColumn, text: &str, catalog: &Catalog) -> Result<()> {
    let blank = text.trim().is_empty();
    match column {
        LineColumn::Seq => return Err(LinegridError::NotEditable(column.key().to_string())),
        LineColumn::Code | LineColumn::Item => {
            let item = if blank {
                None
            } else {
                Some(
                    catalog
                        .find_item(text)
                        .ok_or_else(|| invalid(column, format!("unknown item: {}", text.trim())))?,
                )
            };
            line.set_item(item);
        }
        LineColumn::Unit => {
            let unit = if blank {
                None
            } else {
                Some(
                    catalog
                        .find_unit(text)
                        .ok_or_else(|| invalid(column, format!("unknown unit: {}", text.trim())))?,
                )
            };
            line.set_unit(unit);
        }
        LineColumn::Qty => line.set_qty(parse_number(column, text)?),
        LineColumn::Wastage => {
            let percent = parse_number(column, text.trim().trim_end_matches('%'))?;
            if let Some(p) = percent
                && !(0.0..=100.0).contains(&p)
            {
                return Err(invalid(column, format!("wastage must be 0-100%: {}", p)));
            }
            line.set_wastage(percent.map(|p| p / 100.0));
        }
        LineColumn::Optional => line.set_optional(parse_flag(column, text)?),
        LineColumn::Remarks => line.set_remarks(text),
    }
    Ok(())
}

impl Editor {
    /// The cell being edited, if any.
    pub fn editing(&self) -> Option<CellCoord> {
        self.edit.as_ref().map(|e| e.coord)
    }

    /// Start editing a cell. Any open edit is committed first.
    pub fn begin_edit(&mut self, coord: CellCoord) -> Result<()> {
        self.close_edit();
        let coord = self.clamp(coord);
        let column = self.layout.binding(coord.col);
        let field = column
            .field()
            .ok_or_else(|| LinegridError::NotEditable(column.key().to_string()))?;
        let original = match self.store.get(coord.row) {
            Some(line) => line.field(field),
            None => return Err(LinegridError::NoEditInProgress),
        };
        self.edit = Some(FieldEdit {
            coord,
            column,
            field,
            original,
        });
        Ok(())
    }

    /// Write typed text into the field being edited. A parse failure leaves
    /// the field as it was.
    pub fn apply_input(&mut self, text: &str) -> Result<()> {
        let Some(edit) = self.edit.as_ref() else {
            return Err(LinegridError::NoEditInProgress);
        };
        let (row, column) = (edit.coord.row, edit.column);
        let line = self
            .store
            .get_mut(row)
            .ok_or(LinegridError::NoEditInProgress)?;
        apply_to_line(line, column, text, &self.catalog)?;
        self.modified = true;
        Ok(())
    }

    /// Keep the edited value.
    pub fn commit_edit(&mut self) -> Result<CellCoord> {
        let edit = self.edit.take().ok_or(LinegridError::NoEditInProgress)?;
        log::debug!("committed edit of {}", self.layout.columns().format_coord(edit.coord));
        Ok(edit.coord)
    }

    /// Put the field back the way it was when the edit began.
    pub fn cancel_edit(&mut self) -> Result<CellCoord> {
        let edit = self.edit.take().ok_or(LinegridError::NoEditInProgress)?;
        if let Some(line) = self.store.get_mut(edit.coord.row) {
            line.restore_field(edit.field, edit.original);
        }
        log::debug!("cancelled edit of {}", self.layout.columns().format_coord(edit.coord));
        Ok(edit.coord)
    }

    pub(crate) fn close_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            log::debug!("committed edit of {}", self.layout.columns().format_coord(edit.coord));
        }
    }

    /// Text to seed an edit buffer with: what the user would type to get the
    /// current value back.
    pub fn input_text(&self, coord: CellCoord) -> String {
        let coord = self.clamp(coord);
        let Some(line) = self.store.get(coord.row) else {
            return String::new();
        };
        let fmt_num = |n: Option<f64>| n.map(|v| v.to_string()).unwrap_or_default();
        match self.layout.binding(coord.col) {
            LineColumn::Seq => (coord.row + 1).to_string(),
            LineColumn::Code | LineColumn::Item => line
                .item_id
                .map(|id| {
                    self.catalog
                        .item_code(id)
                        .map_or_else(|| id.to_string(), str::to_string)
                })
                .unwrap_or_default(),
            LineColumn::Unit => line
                .unit_id
                .map(|id| {
                    self.catalog
                        .unit_code(id)
                        .map_or_else(|| id.to_string(), str::to_string)
                })
                .unwrap_or_default(),
            LineColumn::Qty => fmt_num(line.qty),
            LineColumn::Wastage => fmt_num(line.wastage_percent()),
            LineColumn::Optional => (if line.optional { "Yes" } else { "No" }).to_string(),
            LineColumn::Remarks => line.remarks.clone(),
        }
    }
}
