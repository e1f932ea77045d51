//! Error types for the gridwatch client

/// Fallback message for a `success: false` envelope that carries no message
pub const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

/// Errors that can occur in the gridwatch client and console
#[derive(Debug, thiserror::Error)]
pub enum GridwatchError {
    /// Connection failure, unreadable body or a body that is not JSON
    #[error("Transport error: {0}")]
    Transport(String),

    /// A well-formed envelope with `success: false`
    #[error("{message}")]
    Application { message: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridwatchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, GridwatchError::Transport(_))
    }

    pub fn is_application(&self) -> bool {
        matches!(self, GridwatchError::Application { .. })
    }
}

/// Result type alias for gridwatch operations
pub type Result<T> = std::result::Result<T, GridwatchError>;
