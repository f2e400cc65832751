//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, COPY_SHORTCUT, DOWNLOAD_SHORTCUT, GENERATE_SHORTCUT};
use crate::state::{View, WorkflowPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let phase = app
        .state
        .form
        .as_ref()
        .filter(|_| app.state.current_view == View::ToolForm)
        .map(|form| form.workflow.phase());

    let mut spans = vec![];

    if let Some(phase) = phase {
        let color = match phase {
            WorkflowPhase::Editing => Color::Gray,
            WorkflowPhase::Submitting | WorkflowPhase::Downloading => Color::Yellow,
            WorkflowPhase::Previewing => Color::Green,
        };
        spans.push(Span::styled(
            format!(" {} ", phase.label()),
            Style::default().fg(color),
        ));
    }

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view, phase),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Blue)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, phase: Option<WorkflowPhase>) -> String {
    match (view, phase) {
        (View::ToolList, _) => " j/k:nav  Enter:open  q:quit".to_string(),
        (View::NotFound(_), _) => " Enter/Esc:back to documents".to_string(),
        (View::ToolForm, Some(WorkflowPhase::Previewing)) => format!(
            " j/k:scroll  {GENERATE_SHORTCUT}:regenerate  {DOWNLOAD_SHORTCUT}:download  \
             {COPY_SHORTCUT}:copy  {CLEAR_SHORTCUT}:edit"
        ),
        (View::ToolForm, Some(phase)) if phase.is_in_flight() => " Please wait…".to_string(),
        (View::ToolForm, _) => format!(
            " Tab:next  PgUp/PgDn:tab  ←/→:choose  Enter:activate  \
             {GENERATE_SHORTCUT}:generate  Esc:back"
        ),
    }
}
