//! Read-only grid snapshots for renderers.

use linegrid_engine::{CellCoord, Edges};
use std::ops::Range;

use super::Editor;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewCell {
    pub text: String,
    pub selected: bool,
    pub focused: bool,
    pub editing: bool,
    /// Sides of the cell on the outline of the selection.
    pub edges: Edges,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewRow {
    pub index: usize,
    pub cells: Vec<ViewCell>,
}

/// What a renderer needs to draw the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridView {
    pub headers: Vec<String>,
    pub rows: Vec<ViewRow>,
    pub edit_mode: bool,
    pub total_rows: usize,
}

/// Turns a [`GridView`] into something displayable.
pub trait GridRenderer {
    type Output;

    fn render(&self, view: &GridView) -> Self::Output;
}

impl Editor {
    pub fn view(&self, edit_mode: bool) -> GridView {
        self.view_rows(0..self.row_count(), edit_mode)
    }

    /// Snapshot of a window of rows, clamped to the store.
    pub fn view_rows(&self, rows: Range<usize>, edit_mode: bool) -> GridView {
        let end = rows.end.min(self.row_count());
        let start = rows.start.min(end);
        let focus = self.selection.focus();
        let editing = self.editing();
        let rows = (start..end)
            .map(|row| ViewRow {
                index: row,
                cells: (0..self.col_count())
                    .map(|col| {
                        let coord = CellCoord::new(row, col);
                        ViewCell {
                            text: self.display_text(row, col),
                            selected: self.selection.contains(coord),
                            focused: focus == Some(coord),
                            editing: editing == Some(coord),
                            edges: self.selection.edges(coord),
                        }
                    })
                    .collect(),
            })
            .collect();
        GridView {
            headers: self.layout.labels().into_iter().map(String::from).collect(),
            rows,
            edit_mode,
            total_rows: self.row_count(),
        }
    }
}

/// Fixed-width text table. Selected cells are bracketed, the focused cell is
/// marked with `>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn decorate(cell: &ViewCell) -> String {
        let mark = if cell.focused { ">" } else { " " };
        if cell.selected {
            format!("{}[{}]", mark, cell.text)
        } else {
            format!("{} {} ", mark, cell.text)
        }
    }
}

impl GridRenderer for TextRenderer {
    type Output = String;

    fn render(&self, view: &GridView) -> String {
        let body: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|r| r.cells.iter().map(Self::decorate).collect())
            .collect();
        let headers: Vec<String> = view.headers.iter().map(|h| format!("  {} ", h)).collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|col| {
                body.iter()
                    .filter_map(|r| r.get(col))
                    .chain(std::iter::once(&headers[col]))
                    .map(|s| s.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for line in std::iter::once(&headers).chain(body.iter()) {
            let padded: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(s, w)| format!("{:<w$}", s, w = *w))
                .collect();
            out.push_str(padded.join("|").trim_end());
            out.push('\n');
        }
        out
    }
}
