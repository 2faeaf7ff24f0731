use thiserror::Error;

/// Failure of a backend call.
///
/// Every endpoint answers `{ success, message? }`; anything that does not reach
/// that point (network error, non-2xx status, malformed JSON) is `Transport`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("backend rejected the request: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },

    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: Some(message.into()),
        }
    }

    /// Server-provided message, if the backend sent a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref().filter(|m| !m.trim().is_empty()),
            Self::Transport(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_server_message_counts_as_missing() {
        assert_eq!(ApiError::rejected("  ").server_message(), None);
        assert_eq!(ApiError::rejected("Invalid code").server_message(), Some("Invalid code"));
        assert_eq!(ApiError::Transport("reset".into()).server_message(), None);
    }
}
