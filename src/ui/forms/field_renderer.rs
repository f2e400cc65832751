//! Field rendering utilities for forms

use crate::state::{ChoiceStyle, Control, InputKind, SELECT_PLACEHOLDER};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line control or a choice
pub const FIELD_HEIGHT: u16 = 3;
/// Rows taken by a textarea
pub const MULTILINE_FIELD_HEIGHT: u16 = 5;

const CURSOR: &str = "▌";

pub fn control_height(control: &Control) -> u16 {
    match control {
        Control::Multiline { .. } => MULTILINE_FIELD_HEIGHT,
        _ => FIELD_HEIGHT,
    }
}

/// Draw one field control inside a titled border
pub fn draw_control(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    control: &Control,
    placeholder: Option<&str>,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match control {
        Control::SingleLine { kind, value } => {
            Paragraph::new(text_line(value, placeholder.or(kind_hint(*kind)), is_active))
        }
        Control::Multiline { value } => {
            Paragraph::new(multiline(value, placeholder, is_active)).wrap(Wrap { trim: false })
        }
        Control::Choice {
            style: ChoiceStyle::Dropdown,
            options,
            selected,
        } => {
            let current = selected
                .and_then(|i| options.get(i))
                .map(|o| o.label.as_str())
                .unwrap_or(SELECT_PLACEHOLDER);
            let arrows = Style::default().fg(if is_active {
                Color::Cyan
            } else {
                Color::DarkGray
            });
            let value_style = if selected.is_some_and(|i| i > 0) {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Paragraph::new(Line::from(vec![
                Span::styled("‹ ", arrows),
                Span::styled(current, value_style),
                Span::styled(" ›", arrows),
                Span::styled(
                    format!("  ({} options)", options.len().saturating_sub(1)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        }
        Control::Choice {
            style: ChoiceStyle::Radio,
            options,
            selected,
        } => {
            let mut spans = Vec::new();
            for (i, option) in options.iter().enumerate() {
                let checked = *selected == Some(i);
                let mark = if checked { "(•) " } else { "( ) " };
                let style = if checked && is_active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if checked {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("{mark}{}", option.label), style));
                spans.push(Span::raw("   "));
            }
            Paragraph::new(Line::from(spans))
        }
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

fn kind_hint(kind: InputKind) -> Option<&'static str> {
    match kind {
        InputKind::Date => Some("YYYY-MM-DD"),
        InputKind::Number => Some("0"),
        InputKind::Text => None,
    }
}

fn text_line<'a>(value: &'a str, placeholder: Option<&'a str>, is_active: bool) -> Line<'a> {
    let cursor = if is_active { CURSOR } else { "" };
    if value.is_empty() {
        let hint = placeholder.unwrap_or(if is_active { "" } else { "(empty)" });
        return Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]);
    }
    Line::from(vec![
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn multiline<'a>(value: &'a str, placeholder: Option<&'a str>, is_active: bool) -> Vec<Line<'a>> {
    if value.is_empty() {
        return vec![text_line(value, placeholder, is_active)];
    }
    let mut lines: Vec<Line> = value.split('\n').map(Line::from).collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
    }
    lines
}
