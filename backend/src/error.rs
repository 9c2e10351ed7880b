//! Error types for the ClearX enhancement service.
//!
//! - [`EnhanceError`] - Image decoding, sizing and encoding errors
//! - [`ConfigError`] - Environment/CLI configuration errors
//! - [`ServerError`] - HTTP-facing errors, mapped to status codes
//! - [`ClientError`] - Errors of the native enhancement client
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::http::StatusCode;
use thiserror::Error;

// =============================================================================
// Enhancement Errors
// =============================================================================

/// Errors while enhancing one image.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Input bytes are not a decodable image.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Input decoded to an image without pixels.
    #[error("Image has no pixels")]
    EmptyInput,

    /// Output would exceed the configured pixel budget.
    #[error("Output of {width}x{height} exceeds the limit of {limit} pixels")]
    TooLarge { width: u64, height: u64, limit: u64 },

    /// Scale factor outside the supported range.
    #[error("Unsupported scale factor {0} (expected 1-8)")]
    InvalidScale(u32),

    /// PNG encoding failed.
    #[error("Failed to encode result: {0}")]
    Encode(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not parseable.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Parsed but rejected value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Enhancement error.
    #[error("{0}")]
    Enhance(#[from] EnhanceError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Multipart body rejected by axum (size limit, malformed stream).
    #[error("Upload rejected: {message}")]
    Upload { status: StatusCode, message: String },

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status returned for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Enhance(EnhanceError::Decode(_) | EnhanceError::EmptyInput) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::Enhance(EnhanceError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Enhance(EnhanceError::InvalidScale(_) | EnhanceError::Encode(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Upload { status, .. } => *status,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// Client Errors
// =============================================================================

/// Errors of the native enhancement client (`clearx request`).
///
/// Mirrors the page's taxonomy: invalid input, network, server, decode.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local file is not an image.
    #[error("Invalid file type '{0}'. Please upload an image.")]
    InvalidFileType(String),

    /// Could not read the local file.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Request could not complete.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body is not a decodable image.
    #[error("Could not decode the enhanced image: {0}")]
    Decode(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for enhancement operations.
pub type EnhanceResult<T> = Result<T, EnhanceError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_error_status_mapping() {
        let err: ServerError = EnhanceError::Decode("bad header".into()).into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: ServerError = EnhanceError::TooLarge { width: 10, height: 10, limit: 50 }.into();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let err: ServerError = EnhanceError::Encode("disk full".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_too_large_format() {
        let err = EnhanceError::TooLarge { width: 4000, height: 4000, limit: 1_000_000 };
        let msg = err.to_string();
        assert!(msg.contains("4000x4000"));
        assert!(msg.contains("1000000"));
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ServerError::BadRequest("No file provided".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
