// src/backend/error.rs
use thiserror::Error;

/// Failure taxonomy for the analysis call. Every variant is terminal for the
/// interaction it occurred in; nothing is retried. The Display strings are
/// the exact messages shown to the user.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request timed out. The analysis might be taking too long or the server is slow.")]
    Timeout,

    #[error("Could not connect to the backend service. Is it running?")]
    Connection,

    /// HTTP 400 with a `{"message": ...}` body.
    #[error("Backend error: {message}")]
    Rejected { message: String },

    /// Any other non-200 status; `body` is pre-truncated for display.
    #[error("Backend returned status {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Analysis failed: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_text() {
        assert_eq!(
            BackendError::Timeout.to_string(),
            "Request timed out. The analysis might be taking too long or the server is slow."
        );
        assert_eq!(
            BackendError::Connection.to_string(),
            "Could not connect to the backend service. Is it running?"
        );
        assert_eq!(
            BackendError::Rejected { message: "corrupt file".to_string() }.to_string(),
            "Backend error: corrupt file"
        );
        assert_eq!(
            BackendError::UnexpectedStatus { status: 503, body: String::new() }.to_string(),
            "Backend returned status 503"
        );
    }
}
