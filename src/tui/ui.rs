//! UI rendering

use super::app::{App, Mode};
use super::help::help_text;
use super::keymap::status_hint;
use linegrid_core::CellCoord;
use linegrid_core::editor::{InsertMode, ViewCell};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

pub(crate) const CELL_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 6;
pub(crate) const SUMMARY_BAR_HEIGHT: u16 = 1;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

/// Cell bar, grid, summary pills, status line.
pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(SUMMARY_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// How many columns starting at `start` fit in `width`.
fn columns_fitting(app: &App, start: usize, width: u16) -> usize {
    let mut used: u16 = 0;
    let mut count = 0;
    for col in start..app.editor.col_count() {
        let w = app.column_width(col) as u16;
        let needed = if count == 0 { w } else { w + GRID_COLUMN_SPACING };
        if count > 0 && used.saturating_add(needed) > width {
            break;
        }
        used = used.saturating_add(needed);
        count += 1;
    }
    count.max(1)
}

/// Map a terminal position to the data cell under it.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<CellCoord> {
    if grid_area.width < 3 || grid_area.height < 4 {
        return None;
    }

    let inner_x = grid_area.x.saturating_add(1);
    let inner_y = grid_area.y.saturating_add(1);
    let inner_right = inner_x.saturating_add(grid_area.width.saturating_sub(2));
    let inner_bottom = inner_y.saturating_add(grid_area.height.saturating_sub(2));

    if mouse_col < inner_x
        || mouse_col >= inner_right
        || mouse_row < inner_y
        || mouse_row >= inner_bottom
    {
        return None;
    }

    // Header row holds labels, not data cells.
    if mouse_row == inner_y {
        return None;
    }

    let rel_row = (mouse_row - inner_y - 1) as usize;
    if rel_row >= app.visible_rows {
        return None;
    }
    let row = app.viewport_row.saturating_add(rel_row);
    if row >= app.editor.row_count() {
        return None;
    }

    let mut x = inner_x;
    for offset in 0..app.visible_cols {
        let col = app.viewport_col + offset;
        if col >= app.editor.col_count() {
            break;
        }

        let cell_end = x.saturating_add(app.column_width(col) as u16);
        if mouse_col >= x && mouse_col < cell_end {
            return Some(CellCoord::new(row, col));
        }

        x = cell_end.saturating_add(GRID_COLUMN_SPACING);
        if mouse_col < x || x >= inner_right {
            break;
        }
    }

    None
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let [cell_area, grid_area, summary_area, status_area] = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    let available_width = grid_area.width.saturating_sub(2);
    let available_height = grid_area.height.saturating_sub(3) as usize; // header + borders
    app.visible_rows = available_height.max(1);
    app.visible_cols = columns_fitting(app, app.viewport_col, available_width);
    app.update_viewport();
    app.visible_cols = columns_fitting(app, app.viewport_col, available_width);
    let focus_col = app.editor.focused_col();
    while focus_col >= app.viewport_col + app.visible_cols && app.viewport_col < focus_col {
        app.viewport_col += 1;
        app.visible_cols = columns_fitting(app, app.viewport_col, available_width);
    }

    draw_cell_bar(f, app, cell_area);
    draw_grid(f, app, grid_area);
    draw_summary_bar(f, app, summary_area);
    draw_status_bar(f, app, status_area);

    if app.help_modal {
        draw_help_modal(f, app);
    }
}

fn with_cursor(buffer: &str, cursor: usize) -> String {
    let (before, after) = buffer.split_at(cursor.min(buffer.len()));
    format!("{}│{}", before, after)
}

fn draw_cell_bar(f: &mut Frame, app: &App, area: Rect) {
    let focus = app.editor.selection().focus();
    let cell_name = focus.map(|c| {
        let label = app
            .editor
            .layout()
            .columns()
            .get(c.col)
            .map_or("", |spec| spec.label.as_str());
        format!("Line {} {}", c.row + 1, label)
    });

    let content = match app.mode {
        Mode::Edit => format!(
            "{}: {}",
            cell_name.unwrap_or_default(),
            with_cursor(&app.edit_buffer, app.edit_cursor)
        ),
        Mode::InsertPrompt(mode) => {
            let side = match mode {
                InsertMode::Above => "above",
                InsertMode::Below => "below",
            };
            format!(
                "Rows to insert {} line {}: {}",
                side,
                app.editor.focused_row() + 1,
                with_cursor(&app.prompt_buffer, app.prompt_cursor)
            )
        }
        Mode::ConfirmDelete => app.delete_prompt_text(),
        Mode::GotoPrompt => format!(
            "Go to (line:column): {}",
            with_cursor(&app.prompt_buffer, app.prompt_cursor)
        ),
        Mode::Normal => match (cell_name, focus) {
            (Some(name), Some(c)) => {
                format!("{}: {}", name, app.editor.display_text(c.row, c.col))
            }
            _ => "(no selection)".to_string(),
        },
    };

    let title = match app.mode {
        Mode::Edit => " Edit ",
        Mode::InsertPrompt(_) => " Insert ",
        Mode::ConfirmDelete => " Delete ",
        Mode::GotoPrompt => " Go to ",
        Mode::Normal => " Cell ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(match app.mode {
            Mode::Edit => Color::Yellow,
            Mode::InsertPrompt(_) => Color::Cyan,
            Mode::ConfirmDelete => Color::Red,
            Mode::GotoPrompt => Color::Cyan,
            Mode::Normal => Color::White,
        }));

    let paragraph = Paragraph::new(content).block(block);
    f.render_widget(paragraph, area);
}

fn cell_style(cell: &ViewCell) -> Style {
    let style = if cell.editing {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if cell.focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if cell.selected {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default()
    };
    // Underline the bottom outline of a selected block.
    if cell.selected && cell.edges.bottom {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let edit_mode = app.mode == Mode::Edit;
    let view = app.editor.view_rows(
        app.viewport_row..app.viewport_row + app.visible_rows,
        edit_mode,
    );
    let cols: Vec<usize> = (app.viewport_col..app.viewport_col + app.visible_cols)
        .take_while(|&c| c < app.editor.col_count())
        .collect();
    let focus_col = app.editor.selection().focus().map(|f| f.col);
    let columns = app.editor.layout().columns();

    let header_cells = cols.iter().map(|&col| {
        let style = if Some(col) == focus_col {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Cell::from(view.headers[col].clone()).style(style)
    });
    let header = Row::new(header_cells).height(1);

    let rows = view.rows.iter().map(|row| {
        let cells = cols.iter().map(|&col| {
            let cell = &row.cells[col];
            let text = if cell.editing {
                app.edit_buffer.clone()
            } else {
                cell.text.clone()
            };
            let alignment = if columns.is_numeric(col) {
                Alignment::Right
            } else {
                Alignment::Left
            };
            Cell::from(Line::from(text).alignment(alignment)).style(cell_style(cell))
        });
        Row::new(cells)
    });

    let widths: Vec<Constraint> = cols
        .iter()
        .map(|&col| Constraint::Length(app.column_width(col) as u16))
        .collect();

    let title = match app.editor.file_path.as_ref().and_then(|p| p.file_name()) {
        Some(name) => format!(" {} ", name.to_string_lossy()),
        None => " Lines ".to_string(),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(GRID_COLUMN_SPACING);

    f.render_widget(table, area);
}

fn draw_summary_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for pill in app.editor.summary().pills() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!(" {} ", pill.label),
            Style::default().fg(Color::Black).bg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!(" {}", pill.value),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let file_info = match app.editor.file_path.as_ref() {
        Some(path) => {
            let modified_indicator = if app.editor.modified { " [+]" } else { "" };
            format!("{}{}", path.display(), modified_indicator)
        }
        None if app.editor.modified => "[New] [+]".to_string(),
        None => "[New]".to_string(),
    };

    let status = if !app.status_message.is_empty() {
        app.status_message.clone()
    } else {
        format!("{}  |  {}", file_info, status_hint())
    };

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if !app.status_message.is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    f.render_widget(Paragraph::new(Line::from(Span::styled(status, style))), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());
    let modal_style = Style::default().fg(Color::White).bg(Color::Black);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .border_style(Style::default().fg(Color::Green))
        .style(modal_style);

    let lines: Vec<Line> = help_text()
        .into_iter()
        .map(|text| {
            let style = if text.starts_with("  ") {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let viewport_height = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(viewport_height);
    let scroll_y = u16::try_from(app.help_scroll.min(max_scroll)).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(modal_style)
        .scroll((scroll_y, 0))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use linegrid_core::{Catalog, Editor, Layout, LineRecord, MemoryClipboard};

    fn app(rows: usize) -> App {
        let lines = (0..rows).map(|_| LineRecord::blank()).collect();
        let editor = Editor::new(Layout::bom(), Catalog::default(), lines);
        App::new(
            editor,
            &Settings::default(),
            Box::new(MemoryClipboard::default()),
        )
    }

    fn first_body_cell_point(grid_area: Rect) -> (u16, u16) {
        (grid_area.x + 1, grid_area.y + 2)
    }

    #[test]
    fn grid_cell_at_maps_first_visible_cell_to_viewport_origin() {
        let mut app = app(20);
        app.viewport_col = 2;
        app.viewport_row = 7;
        app.visible_cols = 3;
        app.visible_rows = 4;

        let grid_area = Rect::new(0, 0, 80, 20);
        let (x, y) = first_body_cell_point(grid_area);

        assert_eq!(grid_cell_at(&app, grid_area, x, y), Some(CellCoord::new(7, 2)));
    }

    #[test]
    fn grid_cell_at_maps_second_column_after_spacing() {
        let mut app = app(5);
        app.visible_cols = 3;
        app.visible_rows = 3;

        let grid_area = Rect::new(0, 0, 80, 20);
        let (first_x, y) = first_body_cell_point(grid_area);
        let second_col_start = first_x + app.column_width(0) as u16 + GRID_COLUMN_SPACING;

        assert_eq!(
            grid_cell_at(&app, grid_area, second_col_start + 1, y + 1),
            Some(CellCoord::new(1, 1))
        );
    }

    #[test]
    fn grid_cell_at_ignores_headers_borders_and_spacing() {
        let mut app = app(5);
        app.visible_cols = 3;
        app.visible_rows = 3;

        let grid_area = Rect::new(0, 0, 80, 20);
        let (x, y) = first_body_cell_point(grid_area);
        let spacing_x = x + app.column_width(0) as u16;

        assert_eq!(grid_cell_at(&app, grid_area, x, grid_area.y + 1), None);
        assert_eq!(grid_cell_at(&app, grid_area, grid_area.x, y), None);
        assert_eq!(grid_cell_at(&app, grid_area, spacing_x, y), None);
    }

    #[test]
    fn grid_cell_at_stops_at_last_row() {
        let mut app = app(2);
        app.visible_cols = 3;
        app.visible_rows = 10;

        let grid_area = Rect::new(0, 0, 80, 20);
        let (x, y) = first_body_cell_point(grid_area);

        assert_eq!(grid_cell_at(&app, grid_area, x, y + 1), Some(CellCoord::new(1, 0)));
        assert_eq!(grid_cell_at(&app, grid_area, x, y + 2), None);
    }

    #[test]
    fn columns_fitting_counts_spacing() {
        let app = app(1);
        let first_two = app.column_width(0) + app.column_width(1) + 1;
        assert_eq!(columns_fitting(&app, 0, first_two as u16), 2);
        assert_eq!(columns_fitting(&app, 0, first_two as u16 - 1), 1);
        assert_eq!(columns_fitting(&app, 0, 1), 1);
    }
}
