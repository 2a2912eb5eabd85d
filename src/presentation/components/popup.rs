use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use textwrap::wrap;

use super::super::view::AlertRender;
use super::layout::centered_rect;

const ALERT_WIDTH: u16 = 44;

pub fn render_alert(frame: &mut Frame<'_>, alert: AlertRender<'_>) {
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = ALERT_WIDTH.min(width_limit);
    let text_width = width.saturating_sub(4).max(1) as usize;

    let mut lines: Vec<Line<'static>> = wrap(alert.message, text_width)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", alert.button),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let height = (lines.len() as u16)
        .saturating_add(2)
        .min(frame.area().height.max(3));
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(alert.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(body, area);
}
