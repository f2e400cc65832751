//! Generated document preview pane

use crate::state::Preview;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_preview(frame: &mut Frame, area: Rect, preview: &Preview, scroll: usize) {
    let title = format!(
        " Preview · generated at {} ",
        preview.generated_at.format("%H:%M:%S")
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(preview.text.as_str())
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
