//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Error Types** - typed failure taxonomy for the upload pipeline
//! - **Status Types** - the single user-visible status line

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every failure of the upload pipeline is one of these four kinds; nothing
/// is thrown or silently swallowed. All failures are terminal for the current
/// submission and require explicit user action to proceed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Selected/dropped file is not a PDF. Recovered locally: the user is
    /// re-prompted and the workflow state does not change.
    #[error("Please select a PDF file")]
    InvalidFileType(String),

    /// Network failure or non-2xx HTTP status.
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body is not the expected JSON envelope.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),

    /// Well-formed envelope with `success: false`; carries the
    /// server-supplied message.
    #[error("{0}")]
    Application(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Status Types
// =============================================================================

/// Severity of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
    Warning,
}

impl StatusLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Error => "status-error",
            StatusLevel::Warning => "status-warning",
        }
    }
}

/// The current user-visible status message.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusEntry {
    pub level: StatusLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl StatusEntry {
    /// Build a status line stamped with the local wall clock.
    pub fn now(level: StatusLevel, message: impl Into<String>) -> Self {
        StatusEntry {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_visible_text() {
        let err = AppError::InvalidFileType("image/png".to_string());
        assert_eq!(err.to_string(), "Please select a PDF file");

        let err = AppError::Transport("API Error: 502 Bad Gateway".to_string());
        assert_eq!(err.to_string(), "API Error: 502 Bad Gateway");

        let err = AppError::MalformedResponse("expected value at line 1".to_string());
        assert!(err.to_string().starts_with("Failed to parse response"));

        let err = AppError::Application("PDF parsing failed".to_string());
        assert_eq!(err.to_string(), "PDF parsing failed");
    }
}
