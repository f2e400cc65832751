//! Errors from the document generation service

use thiserror::Error;

/// Shown when the server gives no usable detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Document generation failed. Please try again.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("could not save document: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    /// Text for the form banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Server { detail: None, .. } | Self::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::Timeout => "The document service took too long to respond.".to_string(),
            Self::Network(_) => {
                "Could not reach the document service. Check your connection.".to_string()
            }
            Self::Io(e) => format!("Could not save document: {e}"),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Timeout
        } else if err.is_decode() {
            GenerationError::Decode(err.to_string())
        } else if err.is_connect() {
            GenerationError::Network(format!("Connection error: {}", err))
        } else {
            GenerationError::Network(err.to_string())
        }
    }
}
