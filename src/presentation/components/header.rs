use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::screen::{HeaderItem, HeaderOptions};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, header: &HeaderOptions) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let save = save_label(&header.save);
    let save_width = save.chars().count() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(save_width)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        header.title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, columns[0]);

    let save = Paragraph::new(Span::styled(save, Style::default().fg(Color::Green)));
    frame.render_widget(save, columns[1]);
}

fn save_label(item: &HeaderItem) -> String {
    let glyph = match item.icon_name {
        "ios-checkmark" => "✓",
        _ => "✔",
    };
    format!("{glyph} {} (Ctrl+S)", item.title)
}
