//! Mission pane rendering: the active level's card

use crate::level::catalog::Level;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the mission pane
pub fn render_mission_pane(frame: &mut Frame, area: Rect, level: &Level, solved: bool) {
    let block = Block::default()
        .title(format!(" Mission: {} ", level.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if solved {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.border_normal
        }))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Level {} · {}", level.id, level.icon),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(""),
    ];
    for text_line in level.description.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }
    lines.push(Line::from(""));
    if solved {
        lines.push(Line::from(Span::styled(
            "✓ SOLVED",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    } else if level.goal.is_some() {
        lines.push(Line::from(Span::styled(
            "…in progress",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "free play",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
