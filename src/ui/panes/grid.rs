//! Memory grid pane rendering
//!
//! Renders the 16 cells as a 4 x 4 board. Each cell shows its address,
//! its content (value, pointer target, or nothing), and the transient
//! highlight/error feedback the engine set on it.

use crate::memory::cell::{Cell, CellKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLUMNS: usize = 4;

/// Render the memory grid pane
///
/// `cursor` is the selected cell index; `pending_source` is the cell armed
/// as the source of an in-progress connect, if any.
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    cells: &[Cell],
    cursor: usize,
    pending_source: Option<usize>,
) {
    let rows = cells.len().div_ceil(COLUMNS);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let index = row * COLUMNS + col;
            if let Some(cell) = cells.get(index) {
                render_cell(
                    frame,
                    *col_area,
                    cell,
                    index == cursor,
                    pending_source == Some(index),
                );
            }
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &Cell, is_cursor: bool, is_source: bool) {
    let border_style = if cell.errored {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else if is_cursor {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else if is_source {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if cell.locked {
        format!(" {} 🔒 ", cell.address)
    } else {
        format!(" {} ", cell.address)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = cell_content(cell, is_source);

    let mut style = Style::default();
    if cell.highlighted {
        style = style.bg(DEFAULT_THEME.highlight_bg);
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn cell_content(cell: &Cell, is_source: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match cell.kind {
        CellKind::Empty => {
            lines.push(Line::from(Span::styled(
                "·",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
        CellKind::Value => {
            let value = cell.value.map_or(String::from("?"), |v| v.to_string());
            lines.push(Line::from(Span::styled(
                value,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "int",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
        CellKind::Pointer => {
            let target = match &cell.points_to {
                Some(address) => format!("→ {}", address),
                None => String::from("→ ????"),
            };
            lines.push(Line::from(Span::styled(
                target,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "int *",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
    }

    if is_source {
        lines.push(Line::from(Span::styled(
            "drag…",
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    }

    lines
}
