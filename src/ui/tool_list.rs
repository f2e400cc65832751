//! Document tool catalogue

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .registry
        .tools()
        .iter()
        .enumerate()
        .map(|(idx, tool)| {
            let is_selected = idx == app.state.selected_index;
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let marker = if is_selected { "▸ " } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(tool.title.as_str(), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", tool.subtitle),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Legal Documents ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    render_scrollable_list(
        frame,
        area,
        List::new(items).block(block),
        app.state.selected_index,
    );
}
