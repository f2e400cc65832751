//! Application state and core logic

use crate::config::TuiConfig;
use crate::generation::{GenerationClientTrait, GenerationError};
use crate::platform::is_shortcut;
use crate::registry::ToolRegistry;
use crate::state::{
    AppState, FocusTarget, FormAction, FormState, RequestTicket, View,
    INCOMPLETE_FORM_MESSAGE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Outcome of a spawned generation request
#[derive(Debug)]
pub enum GenerationOutcome {
    Preview {
        ticket: RequestTicket,
        result: Result<String, String>,
    },
    Download {
        ticket: RequestTicket,
        result: Result<PathBuf, String>,
    },
}

/// Message sent back from a generation task to the event loop
#[derive(Debug)]
pub struct GenerationEvent {
    /// Which opened form the request belongs to
    pub form_epoch: u64,
    pub outcome: GenerationOutcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Built-in document tools
    pub registry: ToolRegistry,
    /// Generation service client
    client: Arc<dyn GenerationClientTrait>,
    config: TuiConfig,
    events_tx: UnboundedSender<GenerationEvent>,
    events_rx: UnboundedReceiver<GenerationEvent>,
    /// Bumped every time a form is opened
    form_epoch: u64,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, client: Arc<dyn GenerationClientTrait>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let registry = ToolRegistry::builtin();
        let mut state = AppState::default();
        if let Some(last) = config.last_tool.as_deref() {
            if let Some(index) = registry.tools().iter().position(|t| t.id == last) {
                state.selected_index = index;
            }
        }
        Self {
            state,
            registry,
            client,
            config,
            events_tx,
            events_rx,
            form_epoch: 0,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match self.state.current_view {
            View::ToolList => self.handle_tool_list_key(key)?,
            View::ToolForm => self.handle_tool_form_key(key)?,
            View::NotFound(_) => self.handle_not_found_key(key)?,
        }

        Ok(())
    }

    /// Handle mouse wheel scrolling
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            _ => {}
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state
            .view_history
            .push(self.state.current_view.clone());
        self.state.current_view = view;
        self.state.scroll_offset = 0;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        let view = self.state.view_history.pop().unwrap_or_default();
        if !matches!(view, View::ToolForm) {
            self.state.form = None;
        }
        self.state.current_view = view;
        self.state.scroll_offset = 0;
        self.state.status_message = None;
    }

    /// Open a tool by id, or show the not-found page
    pub fn open_tool(&mut self, id: &str) {
        match self.registry.lookup(id) {
            Ok(tool) => {
                tracing::info!("Opening tool {}", tool.id);
                self.state.form = Some(FormState::new(tool.clone()));
                self.state.status_message = None;
                self.form_epoch += 1;
                self.config.last_tool = Some(tool.id.clone());
                self.navigate(View::ToolForm);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.navigate(View::NotFound(id.to_string()));
            }
        }
    }

    /// Handle keys in the tool list
    fn handle_tool_list_key(&mut self, key: KeyEvent) -> Result<()> {
        let count = self.registry.tools().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => {
                if let Some(tool) = self.registry.tools().get(self.state.selected_index) {
                    let id = tool.id.clone();
                    self.open_tool(&id);
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_not_found_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
                self.go_back()
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on a tool form
    fn handle_tool_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('g') => self.submit(),
                KeyCode::Char('d') => self.download(),
                KeyCode::Char('r') => self.clear_preview(),
                KeyCode::Char('y') => self.copy_preview(),
                _ => {}
            }
            return Ok(());
        }

        let Some(form) = self.state.form.as_mut() else {
            self.go_back();
            return Ok(());
        };

        if form.workflow.preview().is_some() {
            match key.code {
                KeyCode::Esc if form.workflow.error().is_some() => form.workflow.dismiss_error(),
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
                KeyCode::PageDown => {
                    self.state.scroll_offset = self.state.scroll_offset.saturating_add(10)
                }
                KeyCode::PageUp => {
                    self.state.scroll_offset = self.state.scroll_offset.saturating_sub(10)
                }
                _ => {}
            }
            return Ok(());
        }

        let focused_choice = form
            .focused()
            .and_then(|target| form.field_at(target))
            .is_some_and(|(field, _)| field.kind.is_choice());

        match key.code {
            KeyCode::Esc => {
                if form.workflow.error().is_some() {
                    form.workflow.dismiss_error();
                } else {
                    self.go_back();
                }
            }
            KeyCode::Tab | KeyCode::Down => form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => form.prev_focus(),
            KeyCode::PageDown => {
                if form.next_tab() {
                    self.state.scroll_offset = 0;
                }
            }
            KeyCode::PageUp => {
                if form.prev_tab() {
                    self.state.scroll_offset = 0;
                }
            }
            KeyCode::Left if focused_choice => form.cycle_choice(false),
            KeyCode::Right if focused_choice => form.cycle_choice(true),
            KeyCode::Char(' ') if focused_choice => form.cycle_choice(true),
            KeyCode::Enter => {
                if form.activate() == FormAction::Generate {
                    self.submit();
                }
            }
            KeyCode::Delete => {
                if let Some(FocusTarget::RemoveItem { section, item }) = form.focused() {
                    form.remove_item(section, item);
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Validate and, if complete, request a preview
    pub fn submit(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        if !form.is_valid() {
            tracing::info!(
                "Submission of {} blocked: {} issue(s)",
                form.tool.id,
                form.validation_issues().len()
            );
            form.workflow.set_error(INCOMPLETE_FORM_MESSAGE);
            return;
        }

        let ticket = match form.workflow.begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                form.workflow.set_error(e.to_string());
                return;
            }
        };

        let payload = form.payload();
        let endpoint = form.tool.api_endpoint.clone();
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let form_epoch = self.form_epoch;

        tracing::info!("Requesting preview for {}", form.tool.id);
        tokio::spawn(async move {
            let result = client
                .preview(&endpoint, &payload)
                .await
                .map_err(|e| report_failure("Preview", e));
            let _ = tx.send(GenerationEvent {
                form_epoch,
                outcome: GenerationOutcome::Preview { ticket, result },
            });
        });
    }

    /// Download the document for the current preview
    pub fn download(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        let ticket = match form.workflow.begin_download() {
            Ok(ticket) => ticket,
            Err(e) => {
                form.workflow.set_error(e.to_string());
                return;
            }
        };

        let payload = form.payload();
        let endpoint = form.tool.download_endpoint.clone();
        let path = self.config.output_dir().join(form.tool.download_filename());
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        let form_epoch = self.form_epoch;

        tracing::info!("Requesting download for {}", form.tool.id);
        tokio::spawn(async move {
            let result = save_download(client.as_ref(), &endpoint, &payload, path)
                .await
                .map_err(|e| report_failure("Download", e));
            let _ = tx.send(GenerationEvent {
                form_epoch,
                outcome: GenerationOutcome::Download { ticket, result },
            });
        });
    }

    /// Drop the preview and return to editing
    pub fn clear_preview(&mut self) {
        if let Some(form) = self.state.form.as_mut() {
            match form.workflow.clear_preview() {
                Ok(()) => {
                    self.state.scroll_offset = 0;
                    self.state.status_message = None;
                }
                Err(e) => form.workflow.set_error(e.to_string()),
            }
        }
    }

    fn copy_preview(&mut self) {
        let Some(text) = self
            .state
            .form
            .as_ref()
            .and_then(|form| form.workflow.preview())
            .map(|preview| preview.text.clone())
        else {
            return;
        };
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some("Preview copied to clipboard".to_string()),
            Err(e) => self.push_error(format!("Failed to copy: {}", e)),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Apply every generation result that has arrived since the last tick
    pub fn poll_generation_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_generation_event(event);
        }
    }

    fn apply_generation_event(&mut self, event: GenerationEvent) {
        if event.form_epoch != self.form_epoch {
            tracing::debug!("Dropping result for a form that is no longer open");
            return;
        }
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        match event.outcome {
            GenerationOutcome::Preview { ticket, result } => {
                if form.workflow.complete_submit(ticket, result) && form.workflow.preview().is_some()
                {
                    self.state.scroll_offset = 0;
                }
            }
            GenerationOutcome::Download { ticket, result } => {
                if form.workflow.complete_download(ticket, result) {
                    if let Some(path) = form.workflow.last_download() {
                        self.state.status_message = Some(format!("Saved {}", path.display()));
                    }
                }
            }
        }
    }
}

async fn save_download(
    client: &dyn GenerationClientTrait,
    endpoint: &str,
    payload: &serde_json::Value,
    path: PathBuf,
) -> Result<PathBuf, GenerationError> {
    let bytes = client.download(endpoint, payload).await?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;
    tracing::info!("Document saved to {}", path.display());
    Ok(path)
}

fn report_failure(what: &str, err: GenerationError) -> String {
    tracing::warn!("{} failed: {}", what, err);
    err.user_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::MockGenerationClientTrait;
    use crate::state::WorkflowPhase;
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    fn app_with(mock: MockGenerationClientTrait) -> App {
        App::new(TuiConfig::default(), Arc::new(mock))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn fill_nda(app: &mut App) {
        let form = app.state.form.as_mut().unwrap();
        let v = &mut form.values;
        v["effective_date"] = json!("2025-01-01");
        v["party_a"]["name"] = json!("Acme Ltd");
        v["party_a"]["address"] = json!("1 Acme Way");
        v["party_b"]["name"] = json!("Widgets Inc");
        v["party_b"]["address"] = json!("9 Widget Rd");
        v["purpose"] = json!("Evaluating a partnership");
        v["term_years"] = json!("2");
        v["governing_law"] = json!("Scotland");
    }

    impl App {
        /// Wait for one spawned request to report back
        async fn next_generation_event(&mut self) {
            let event = self.events_rx.recv().await.unwrap();
            self.apply_generation_event(event);
        }

        fn form(&self) -> &FormState {
            self.state.form.as_ref().unwrap()
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_open_known_tool() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.open_tool("nda");
            assert_eq!(app.state.current_view, View::ToolForm);
            assert_eq!(app.form().tool.id, "nda");
            assert_eq!(app.config().last_tool.as_deref(), Some("nda"));
        }

        #[tokio::test]
        async fn test_unknown_tool_shows_not_found() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.open_tool("prenup");
            assert_eq!(app.state.current_view, View::NotFound("prenup".to_string()));
            assert!(app.state.form.is_none());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::ToolList);
        }

        #[tokio::test]
        async fn test_enter_opens_selected_tool() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.form().tool.id, app.registry.tools()[1].id);
        }

        #[tokio::test]
        async fn test_escape_from_form_returns_to_list() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.open_tool("will");
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::ToolList);
            assert!(app.state.form.is_none());
        }

        #[tokio::test]
        async fn test_last_tool_is_preselected() {
            let config = TuiConfig {
                last_tool: Some("rental-agreement".to_string()),
                ..Default::default()
            };
            let mut app = App::new(config, Arc::new(MockGenerationClientTrait::new()));
            let expected = app
                .registry
                .tools()
                .iter()
                .position(|t| t.id == "rental-agreement");
            assert_eq!(Some(app.state.selected_index), expected);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.form().tool.id, "rental-agreement");
        }

        #[tokio::test]
        async fn test_unknown_last_tool_keeps_first_selected() {
            let config = TuiConfig {
                last_tool: Some("prenup".to_string()),
                ..Default::default()
            };
            let app = App::new(config, Arc::new(MockGenerationClientTrait::new()));
            assert_eq!(app.state.selected_index, 0);
        }

        #[tokio::test]
        async fn test_quit_from_list() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.push_error("boom");
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_typing_goes_to_focused_field() {
            let mut app = app_with(MockGenerationClientTrait::new());
            app.open_tool("will");
            for c in "Jane".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.form().values["testator"]["full_name"], json!("Jane"));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_incomplete_form_makes_no_request() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview().times(0);
            let mut app = app_with(mock);
            app.open_tool("nda");

            app.handle_key(ctrl('g')).await.unwrap();

            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Editing);
            assert_eq!(app.form().workflow.error(), Some(INCOMPLETE_FORM_MESSAGE));
        }

        #[tokio::test]
        async fn test_valid_submit_shows_preview() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .withf(|endpoint, payload| {
                    endpoint.ends_with("/nda/preview") && payload["term_years"] == json!(2)
                })
                .times(1)
                .returning(|_, _| Ok("MUTUAL NON-DISCLOSURE AGREEMENT".to_string()));
            let mut app = app_with(mock);
            app.open_tool("nda");
            fill_nda(&mut app);

            app.submit();
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Submitting);
            assert!(app.form().workflow.tabs_locked());

            app.next_generation_event().await;
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Previewing);
            assert_eq!(
                app.form().workflow.preview().unwrap().text,
                "MUTUAL NON-DISCLOSURE AGREEMENT"
            );
        }

        #[tokio::test]
        async fn test_server_failure_rolls_back_with_detail() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview().times(1).returning(|_, _| {
                Err(GenerationError::Server {
                    status: 422,
                    detail: Some("Governing law not supported".to_string()),
                })
            });
            let mut app = app_with(mock);
            app.open_tool("nda");
            fill_nda(&mut app);

            app.submit();
            app.next_generation_event().await;

            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Editing);
            assert_eq!(app.form().workflow.error(), Some("Governing law not supported"));
            assert!(app.form().workflow.preview().is_none());
        }

        #[tokio::test]
        async fn test_result_for_closed_form_is_dropped() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .returning(|_, _| Ok("stale".to_string()));
            let mut app = app_with(mock);
            app.open_tool("nda");
            fill_nda(&mut app);
            app.submit();

            app.go_back();
            app.open_tool("nda");
            app.next_generation_event().await;

            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Editing);
            assert!(app.form().workflow.preview().is_none());
        }

        #[tokio::test]
        async fn test_clear_preview_unlocks_editing() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .returning(|_, _| Ok("text".to_string()));
            let mut app = app_with(mock);
            app.open_tool("nda");
            fill_nda(&mut app);
            app.submit();
            app.next_generation_event().await;

            app.handle_key(ctrl('r')).await.unwrap();
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Editing);
            assert!(app.form().workflow.preview().is_none());
        }
    }

    mod download {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_download_requires_preview() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_download().times(0);
            let mut app = app_with(mock);
            app.open_tool("nda");

            app.download();
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Editing);
            assert!(app.form().workflow.error().is_some());
        }

        #[tokio::test]
        async fn test_download_saves_docx() {
            let dir = tempfile::tempdir().unwrap();
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .returning(|_, _| Ok("text".to_string()));
            mock.expect_download()
                .withf(|endpoint, _| endpoint.ends_with("/nda/download"))
                .times(1)
                .returning(|_, _| Ok(b"PK\x03\x04".to_vec()));
            let config = TuiConfig {
                output_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            };
            let mut app = App::new(config, Arc::new(mock));
            app.open_tool("nda");
            fill_nda(&mut app);
            app.submit();
            app.next_generation_event().await;

            app.download();
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Downloading);
            app.next_generation_event().await;

            let expected = dir.path().join("Non-Disclosure_Agreement.docx");
            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Previewing);
            assert_eq!(app.form().workflow.last_download(), Some(&expected));
            assert_eq!(std::fs::read(&expected).unwrap(), b"PK\x03\x04".to_vec());
            assert!(app.state.status_message.is_some());
        }

        async fn downloaded_app(dir: &std::path::Path) -> App {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .returning(|_, _| Ok("text".to_string()));
            mock.expect_download()
                .returning(|_, _| Ok(b"PK".to_vec()));
            let config = TuiConfig {
                output_dir: Some(dir.to_path_buf()),
                ..Default::default()
            };
            let mut app = App::new(config, Arc::new(mock));
            app.open_tool("nda");
            fill_nda(&mut app);
            app.submit();
            app.next_generation_event().await;
            app.download();
            app.next_generation_event().await;
            assert!(app.state.status_message.is_some());
            app
        }

        #[tokio::test]
        async fn test_saved_message_cleared_by_clear_preview() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = downloaded_app(dir.path()).await;
            app.clear_preview();
            assert_eq!(app.state.status_message, None);
        }

        #[tokio::test]
        async fn test_saved_message_cleared_when_leaving_form() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = downloaded_app(dir.path()).await;
            app.go_back();
            assert_eq!(app.state.status_message, None);
        }

        #[tokio::test]
        async fn test_saved_message_cleared_when_opening_tool() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = downloaded_app(dir.path()).await;
            app.open_tool("will");
            assert_eq!(app.state.status_message, None);
        }

        #[tokio::test]
        async fn test_download_failure_keeps_preview() {
            let mut mock = MockGenerationClientTrait::new();
            mock.expect_preview()
                .returning(|_, _| Ok("text".to_string()));
            mock.expect_download().returning(|_, _| {
                Err(GenerationError::Server {
                    status: 500,
                    detail: None,
                })
            });
            let mut app = app_with(mock);
            app.open_tool("nda");
            fill_nda(&mut app);
            app.submit();
            app.next_generation_event().await;

            app.download();
            app.next_generation_event().await;

            assert_eq!(app.form().workflow.phase(), WorkflowPhase::Previewing);
            assert!(app.form().workflow.preview().is_some());
            assert_eq!(
                app.form().workflow.error(),
                Some(crate::generation::GENERIC_FAILURE_MESSAGE)
            );
        }
    }
}
