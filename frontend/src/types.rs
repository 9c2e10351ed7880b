//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Log Types** - On-page activity log
//! - **Error Types** - Workflow error taxonomy

use thiserror::Error;

use crate::config::MAX_LOG_ENTRIES;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single activity log entry shown under the testing widget.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Position in the log, assigned by [`push_log`]; increases monotonically
    pub id: u64,
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append an entry, dropping the oldest once the log is full.
///
/// The entry gets the id following the newest one, so ids stay unique
/// while old entries are drained from the front.
pub fn push_log(logs: &mut Vec<LogEntry>, mut entry: LogEntry) {
    entry.id = logs.last().map_or(1, |last| last.id + 1);
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let overflow = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..overflow);
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised by the upload/enhance workflow.
///
/// The three network-related kinds share one recovery path: notice shown,
/// session returned to `Idle`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Declared MIME type does not start with `image/`.
    #[error("Invalid file type '{0}'. Please upload an image.")]
    InvalidFileType(String),

    /// File exceeds the drop surface limit.
    #[error("File is too large ({size} bytes, limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// Request could not complete.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// Endpoint answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body is not a decodable image.
    #[error("Could not decode the enhanced image: {0}")]
    DecodeFailure(String),
}

impl WorkflowError {
    /// True for failures that happen after the request left the page.
    pub fn is_network_related(&self) -> bool {
        matches!(
            self,
            WorkflowError::NetworkFailure(_)
                | WorkflowError::ServerError { .. }
                | WorkflowError::DecodeFailure(_)
        )
    }

    /// Short label used for logs and the notice banner.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::InvalidFileType(_) => "InvalidFileType",
            WorkflowError::FileTooLarge { .. } => "FileTooLarge",
            WorkflowError::NetworkFailure(_) => "NetworkFailure",
            WorkflowError::ServerError { .. } => "ServerError",
            WorkflowError::DecodeFailure(_) => "DecodeFailure",
        }
    }
}

/// Result type alias for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_related_kinds() {
        assert!(WorkflowError::NetworkFailure("timeout".into()).is_network_related());
        assert!(WorkflowError::ServerError { status: 500, message: "boom".into() }.is_network_related());
        assert!(WorkflowError::DecodeFailure("bad magic".into()).is_network_related());
        assert!(!WorkflowError::InvalidFileType("text/plain".into()).is_network_related());
    }

    #[test]
    fn test_server_error_format() {
        let err = WorkflowError::ServerError { status: 502, message: "Bad Gateway".into() };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("Bad Gateway"));
    }

    #[test]
    fn test_push_log_is_bounded() {
        let mut logs = Vec::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            push_log(&mut logs, LogEntry::new(LogLevel::Info, format!("entry {}", i)));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }

    #[test]
    fn test_log_ids_survive_draining() {
        let mut logs = Vec::new();
        for i in 0..(MAX_LOG_ENTRIES * 2) {
            push_log(&mut logs, LogEntry::new(LogLevel::Info, format!("entry {}", i)));
        }
        assert_eq!(logs[0].id, MAX_LOG_ENTRIES as u64 + 1);
        assert!(logs.windows(2).all(|w| w[1].id == w[0].id + 1));
        assert_eq!(logs.last().map(|e| e.id), Some(2 * MAX_LOG_ENTRIES as u64));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(WorkflowError::InvalidFileType("text/plain".into()).kind(), "InvalidFileType");
        assert_eq!(WorkflowError::FileTooLarge { size: 2, limit: 1 }.kind(), "FileTooLarge");
        assert_eq!(WorkflowError::DecodeFailure("x".into()).kind(), "DecodeFailure");
    }
}
