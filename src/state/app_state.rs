//! Application state definitions

use super::forms::FormState;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Catalogue of document tools
    #[default]
    ToolList,
    /// Form for the tool in `AppState::form`
    ToolForm,
    /// Requested tool id does not exist
    NotFound(String),
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ToolList => "Documents",
            Self::ToolForm => "Document",
            Self::NotFound(_) => "Not Found",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Tool list
    pub selected_index: usize,

    // Open form, if any
    pub form: Option<FormState>,

    // UI state
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue a message for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::error!("{}", message);
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message currently shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Number of errors still queued behind the current one
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
