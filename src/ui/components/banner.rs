//! Inline message banner shown above a form

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const BANNER_HEIGHT: u16 = 3;

pub fn render_banner(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let line = Line::from(vec![
        Span::styled(format!(" {message} "), Style::default().fg(color)),
        Span::styled(" Esc:dismiss", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
