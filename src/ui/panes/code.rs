//! Code log pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the generated-code pane beneath the grid
pub fn render_code_pane(frame: &mut Frame, area: Rect, code_log: &str) {
    let block = Block::default()
        .title(" Generated C ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let lines: Vec<Line> = code_log
        .lines()
        .map(|line| {
            // Comment-only lines are rendered muted, like an editor would.
            let style = if line.trim_start().starts_with("//") {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.code)
            };
            Line::styled(line.to_string(), style)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
