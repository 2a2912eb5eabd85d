use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    form::FieldName,
    screen::{EditMode, EditProductScreen},
};

const VALUE_PREFIX: &str = "» ";

pub fn render_fields(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: &EditProductScreen,
    enable_cursor: bool,
) {
    let title = match screen.mode() {
        EditMode::Create => "New product",
        EditMode::Edit => "Product details",
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);

    let focused = screen.focused_field();
    let mut lines = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    for field in screen.fields().iter().copied() {
        let is_focused = field == focused;
        lines.push(label_line(screen, field, is_focused));

        let value = screen.form_state().value(field);
        if is_focused {
            let column = (VALUE_PREFIX.width() + value.width()) as u16;
            cursor = Some((column, lines.len() as u16));
        }
        lines.push(value_line(value, is_focused));

        if let Some(hint) = screen.error_hint(field) {
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if enable_cursor
        && let Some((column, row)) = cursor
        && row < inner.height
    {
        let x = inner
            .x
            .saturating_add(column)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y + row));
    }
}

fn label_line(screen: &EditProductScreen, field: FieldName, is_focused: bool) -> Line<'static> {
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if is_focused {
        style = style.fg(Color::Yellow);
    }
    let mut spans = vec![Span::styled(field.label(), style)];
    if field == FieldName::Price && screen.mode() == EditMode::Edit {
        spans.push(Span::styled(
            " (not changed by saving)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn value_line(value: &str, is_focused: bool) -> Line<'static> {
    let style = if is_focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    Line::from(vec![
        Span::raw(VALUE_PREFIX),
        Span::styled(value.to_string(), style),
    ])
}
