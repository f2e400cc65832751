//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod not_found;
mod tool_list;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::ToolList => tool_list::draw(frame, main_area, app),
        View::ToolForm => forms::draw_tool_form(frame, main_area, app),
        View::NotFound(id) => not_found::draw(frame, main_area, id),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog goes on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.queued_errors());
    }
}
