//! Preview/download state machine for one form instance

use chrono::{DateTime, Local};
use std::path::PathBuf;
use thiserror::Error;

/// Where the document workflow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    /// No document text yet
    #[default]
    Editing,
    /// Preview request in flight
    Submitting,
    /// Preview text available
    Previewing,
    /// Download request in flight
    Downloading,
}

impl WorkflowPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitting => "Generating…",
            Self::Previewing => "Preview",
            Self::Downloading => "Downloading…",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting | Self::Downloading)
    }
}

/// Identifies one issued request; only the latest one is accepted back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Illegal workflow transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("a request is already in progress")]
    RequestInFlight,
    #[error("generate a preview before downloading")]
    NoPreview,
}

/// Generated preview text
#[derive(Debug, Clone)]
pub struct Preview {
    pub text: String,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentWorkflow {
    phase: WorkflowPhase,
    preview: Option<Preview>,
    /// Phase to return to if the in-flight request fails
    resume_phase: WorkflowPhase,
    last_sequence: u64,
    pending: Option<RequestTicket>,
    error: Option<String>,
    last_download: Option<PathBuf>,
}

impl DocumentWorkflow {
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_download(&self) -> Option<&PathBuf> {
        self.last_download.as_ref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Tab navigation is only possible while editing without a preview
    pub fn tabs_locked(&self) -> bool {
        self.phase != WorkflowPhase::Editing
    }

    /// Field edits are only accepted while editing
    pub fn editing_allowed(&self) -> bool {
        self.phase == WorkflowPhase::Editing
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.last_sequence += 1;
        let ticket = RequestTicket(self.last_sequence);
        self.pending = Some(ticket);
        ticket
    }

    /// Start a preview request from Editing or Previewing
    pub fn begin_submit(&mut self) -> Result<RequestTicket, WorkflowError> {
        if self.phase.is_in_flight() {
            return Err(WorkflowError::RequestInFlight);
        }
        self.resume_phase = self.phase;
        self.phase = WorkflowPhase::Submitting;
        self.error = None;
        let ticket = self.issue_ticket();
        tracing::debug!("Preview request {} issued", ticket.sequence());
        Ok(ticket)
    }

    /// Apply a preview response. Returns false if the ticket is stale.
    pub fn complete_submit(&mut self, ticket: RequestTicket, result: Result<String, String>) -> bool {
        if self.pending != Some(ticket) || self.phase != WorkflowPhase::Submitting {
            tracing::warn!("Discarding stale preview response {}", ticket.sequence());
            return false;
        }
        self.pending = None;
        match result {
            Ok(text) => {
                self.preview = Some(Preview {
                    text,
                    generated_at: Local::now(),
                });
                self.phase = WorkflowPhase::Previewing;
            }
            Err(message) => {
                self.phase = self.resume_phase;
                self.error = Some(message);
            }
        }
        true
    }

    /// Start a download request; only valid while previewing
    pub fn begin_download(&mut self) -> Result<RequestTicket, WorkflowError> {
        if self.phase.is_in_flight() {
            return Err(WorkflowError::RequestInFlight);
        }
        if self.phase != WorkflowPhase::Previewing {
            return Err(WorkflowError::NoPreview);
        }
        self.phase = WorkflowPhase::Downloading;
        self.error = None;
        let ticket = self.issue_ticket();
        tracing::debug!("Download request {} issued", ticket.sequence());
        Ok(ticket)
    }

    /// Apply a download outcome. Returns false if the ticket is stale.
    pub fn complete_download(
        &mut self,
        ticket: RequestTicket,
        result: Result<PathBuf, String>,
    ) -> bool {
        if self.pending != Some(ticket) || self.phase != WorkflowPhase::Downloading {
            tracing::warn!("Discarding stale download response {}", ticket.sequence());
            return false;
        }
        self.pending = None;
        self.phase = WorkflowPhase::Previewing;
        match result {
            Ok(path) => self.last_download = Some(path),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Drop the preview and go back to editing
    pub fn clear_preview(&mut self) -> Result<(), WorkflowError> {
        if self.phase.is_in_flight() {
            return Err(WorkflowError::RequestInFlight);
        }
        self.preview = None;
        self.last_download = None;
        self.error = None;
        self.phase = WorkflowPhase::Editing;
        Ok(())
    }
}
