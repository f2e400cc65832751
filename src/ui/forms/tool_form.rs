//! Tool form page: header, tab bar, section body and action footer

use super::field_renderer::{control_height, draw_control, FIELD_HEIGHT, MULTILINE_FIELD_HEIGHT};
use super::preview::draw_preview;
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, DOWNLOAD_SHORTCUT, GENERATE_SHORTCUT};
use crate::state::{FieldConfig, FieldSpan, FocusTarget, FormState, SectionBody, WorkflowPhase};
use crate::ui::components::{render_banner, render_button, BANNER_HEIGHT, BUTTON_HEIGHT};
use crate::ui::widgets::scroll_to_show;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Width units in one body row
const ROW_UNITS: u16 = 6;

/// One drawable piece of the form body
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    SectionTitle(String),
    ItemTitle(String),
    Note(String),
    Field { target: FocusTarget, units: u16 },
    Action { target: FocusTarget, label: String },
}

impl Cell {
    fn target(&self) -> Option<FocusTarget> {
        match self {
            Cell::Field { target, .. } | Cell::Action { target, .. } => Some(*target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    height: u16,
    cells: Vec<Cell>,
}

impl Row {
    fn single(height: u16, cell: Cell) -> Self {
        Self {
            height,
            cells: vec![cell],
        }
    }
}

fn span_units(span: FieldSpan) -> u16 {
    match span {
        FieldSpan::Half => 3,
        FieldSpan::Third => 2,
        FieldSpan::Full => ROW_UNITS,
    }
}

fn field_height(field: &FieldConfig) -> u16 {
    if field.kind.is_multiline() {
        MULTILINE_FIELD_HEIGHT
    } else {
        FIELD_HEIGHT
    }
}

/// Pack fields left to right into rows by their span
fn push_field_rows(
    rows: &mut Vec<Row>,
    fields: &[FieldConfig],
    target: impl Fn(usize) -> FocusTarget,
) {
    let mut current = Row {
        height: 0,
        cells: Vec::new(),
    };
    let mut used = 0;
    for (index, field) in fields.iter().enumerate() {
        let units = span_units(field.span);
        if used + units > ROW_UNITS && !current.cells.is_empty() {
            rows.push(std::mem::replace(
                &mut current,
                Row {
                    height: 0,
                    cells: Vec::new(),
                },
            ));
            used = 0;
        }
        used += units;
        current.height = current.height.max(field_height(field));
        current.cells.push(Cell::Field {
            target: target(index),
            units,
        });
    }
    if !current.cells.is_empty() {
        rows.push(current);
    }
}

/// Lay out every visible section of the active tab
fn build_rows(form: &FormState) -> Vec<Row> {
    let mut rows = Vec::new();
    for section in form.visible_sections() {
        let config = &form.tool.sections[section];
        rows.push(Row::single(1, Cell::SectionTitle(config.title.clone())));

        match &config.body {
            SectionBody::Form { fields } => {
                push_field_rows(&mut rows, fields, |field| FocusTarget::Field {
                    section,
                    item: None,
                    field,
                });
            }
            SectionBody::DynamicList(list) => {
                let count = list.items(&form.values).len();
                if count == 0 {
                    let note = if list.required {
                        "Nothing added yet (at least one required)"
                    } else {
                        "Nothing added yet"
                    };
                    rows.push(Row::single(1, Cell::Note(note.to_string())));
                }
                for item in 0..count {
                    rows.push(Row::single(
                        1,
                        Cell::ItemTitle(format!("{} {}", list.item_title, item + 1)),
                    ));
                    push_field_rows(&mut rows, &list.fields, |field| FocusTarget::Field {
                        section,
                        item: Some(item),
                        field,
                    });
                    rows.push(Row::single(
                        BUTTON_HEIGHT,
                        Cell::Action {
                            target: FocusTarget::RemoveItem { section, item },
                            label: format!("Remove {}", list.item_title),
                        },
                    ));
                }
                rows.push(Row::single(
                    BUTTON_HEIGHT,
                    Cell::Action {
                        target: FocusTarget::AddItem { section },
                        label: format!("+ Add {}", list.item_title),
                    },
                ));
            }
        }

        rows.push(Row {
            height: 1,
            cells: Vec::new(),
        });
    }
    rows
}

/// Draw the form page for the open tool
pub fn draw_tool_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };
    let workflow = &form.workflow;
    let banner_height = if workflow.error().is_some() {
        BANNER_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Tabs
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(0),                // Body
            Constraint::Length(BUTTON_HEIGHT), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], form);
    draw_tabs(frame, chunks[1], form);
    if let Some(message) = workflow.error() {
        render_banner(frame, chunks[2], message, Color::Red);
    }

    match workflow.preview() {
        Some(preview) => draw_preview(frame, chunks[3], preview, app.state.scroll_offset),
        None => draw_body(frame, chunks[3], form, app.state.scroll_offset),
    }

    draw_footer(frame, chunks[4], form);
}

fn draw_header(frame: &mut Frame, area: Rect, form: &FormState) {
    let line = Line::from(vec![
        Span::styled(
            form.tool.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", form.tool.subtitle),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, form: &FormState) {
    let locked = form.workflow.tabs_locked();
    let titles: Vec<Line> = form
        .tool
        .tabs
        .iter()
        .map(|tab| Line::from(tab.label.as_str()))
        .collect();

    let (title, style, highlight) = if locked {
        (
            format!(" Sections (locked, {CLEAR_SHORTCUT} to edit) "),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    } else {
        (
            " Sections ".to_string(),
            Style::default(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let tabs = Tabs::new(titles)
        .select(form.active_tab)
        .style(style)
        .highlight_style(highlight)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame, area: Rect, form: &FormState, scroll_offset: usize) {
    let rows = build_rows(form);
    let focused = form.focused();

    // Keep the focused row on screen
    let mut top = 0usize;
    let mut offset = scroll_offset;
    for row in &rows {
        if row.cells.iter().any(|c| c.target().is_some() && c.target() == focused) {
            offset = scroll_to_show(offset, top, row.height as usize, area.height as usize);
            break;
        }
        top += row.height as usize;
    }

    let bottom = area.y + area.height;
    let mut skipped = 0usize;
    let mut y = area.y;
    for row in &rows {
        if skipped < offset {
            skipped += row.height as usize;
            continue;
        }
        if y + row.height > bottom {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: row.height,
        };
        draw_row(frame, row_area, row, form, focused);
        y += row.height;
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    row: &Row,
    form: &FormState,
    focused: Option<FocusTarget>,
) {
    let mut constraints: Vec<Constraint> = row
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Field { units, .. } => {
                Constraint::Ratio(u32::from(*units), u32::from(ROW_UNITS))
            }
            Cell::Action { .. } => Constraint::Length(30),
            _ => Constraint::Min(0),
        })
        .collect();
    constraints.push(Constraint::Min(0));
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (cell, cell_area) in row.cells.iter().zip(areas.iter()) {
        let is_active = cell.target().is_some() && cell.target() == focused;
        match cell {
            Cell::SectionTitle(title) => frame.render_widget(
                Paragraph::new(Span::styled(
                    title.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                *cell_area,
            ),
            Cell::ItemTitle(title) => frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {title}"),
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
                *cell_area,
            ),
            Cell::Note(note) => frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {note}"),
                    Style::default().fg(Color::DarkGray),
                )),
                *cell_area,
            ),
            Cell::Field { target, .. } => {
                if let Some((config, control)) = form.control_at(*target) {
                    let height = control_height(&control).min(cell_area.height);
                    draw_control(
                        frame,
                        Rect {
                            height,
                            ..*cell_area
                        },
                        &config.display_label(),
                        &control,
                        config.placeholder.as_deref(),
                        is_active,
                    );
                }
            }
            Cell::Action { label, .. } => {
                render_button(frame, *cell_area, label, is_active, true, None)
            }
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, form: &FormState) {
    let phase = form.workflow.phase();
    let (label, enabled, selected) = match phase {
        WorkflowPhase::Editing => (
            format!("Generate Document ({GENERATE_SHORTCUT})"),
            form.is_valid(),
            form.focused() == Some(FocusTarget::Generate),
        ),
        WorkflowPhase::Submitting => ("Generating…".to_string(), false, false),
        WorkflowPhase::Previewing => (
            format!("Download .docx ({DOWNLOAD_SHORTCUT})"),
            true,
            true,
        ),
        WorkflowPhase::Downloading => ("Downloading…".to_string(), false, false),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(area);

    render_button(frame, chunks[0], &label, selected, enabled, Some(Color::Green));

    let note = match (phase, form.workflow.last_download()) {
        (WorkflowPhase::Editing, _) if !enabled => Span::styled(
            " Complete all required (*) fields",
            Style::default().fg(Color::DarkGray),
        ),
        (_, Some(path)) => Span::styled(
            format!(" Saved to {}", path.display()),
            Style::default().fg(Color::Green),
        ),
        _ => Span::raw(""),
    };
    let note_area = Rect {
        y: chunks[1].y + 1,
        height: 1,
        ..chunks[1]
    };
    frame.render_widget(Paragraph::new(note), note_area);
}
