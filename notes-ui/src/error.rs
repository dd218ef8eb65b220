use thiserror::Error;

/// Every failure the notes client can surface to the user.
///
/// None of these are fatal: callers log them and show a transient
/// notification, then leave the UI usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotesError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status; nothing was persisted
    #[error("HTTP error: {status}{suffix}", suffix = detail_suffix(.detail))]
    Request { status: u16, detail: Option<String> },

    /// The request body could not be encoded; nothing was sent
    #[error("failed to serialize request: {0}")]
    Encode(String),

    /// A success response whose body could not be decoded
    #[error("failed to parse JSON: {0}")]
    InvalidResponse(String),

    /// A required form field was empty after trimming
    #[error("{0}")]
    Validation(String),
}

impl NotesError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({detail})"),
        None => String::new(),
    }
}
