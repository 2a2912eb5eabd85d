use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::screen::{EditProductScreen, HeaderOptions};

use super::components::{render_alert, render_fields, render_footer, render_header};

pub struct UiContext<'a> {
    pub header: &'a HeaderOptions,
    pub screen: &'a EditProductScreen,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub alert: Option<AlertRender<'a>>,
}

pub struct AlertRender<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub button: &'a str,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let cursor_enabled = ctx.alert.is_none();
    render_header(frame, chunks[0], ctx.header);
    render_fields(frame, chunks[1], ctx.screen, cursor_enabled);
    render_footer(frame, chunks[2], &ctx);

    if let Some(alert) = ctx.alert {
        render_alert(frame, alert);
    }
}
