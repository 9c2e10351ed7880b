//! Classification of enhancement endpoint replies.
//!
//! Success is a 2xx status with a body the `image` crate can decode.
//! Everything else maps onto the workflow error taxonomy.

use serde::Deserialize;

use crate::types::{WorkflowError, WorkflowResult};

use super::session::ResultImage;

/// Raw reply as received from the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turn a reply into the result image, or the matching error.
pub fn classify_reply(reply: HttpReply) -> WorkflowResult<ResultImage> {
    if !reply.is_success() {
        return Err(WorkflowError::ServerError {
            status: reply.status,
            message: server_error_message(&reply.body),
        });
    }

    if reply.body.is_empty() {
        return Err(WorkflowError::DecodeFailure("empty response body".to_string()));
    }

    let format = image::guess_format(&reply.body)
        .map_err(|e| WorkflowError::DecodeFailure(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(&reply.body, format)
        .map_err(|e| WorkflowError::DecodeFailure(e.to_string()))?;

    // The bytes decoded as `format`; a declared content type is only logged.
    let mime = format.to_mime_type().to_string();
    if let Some(declared) = reply.content_type.as_deref() {
        if !declared.starts_with(&mime) {
            log::warn!("Model Testing: reply declared {} but contains {}", declared, mime);
        }
    }

    Ok(ResultImage {
        width: decoded.width(),
        height: decoded.height(),
        bytes: reply.body,
        mime,
    })
}

/// JSON error body of the endpoint (`requestId` and `status` are not needed here).
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract a readable message from an error body.
///
/// The endpoint answers with `{"error": "..."}`; anything else is shown as text.
fn server_error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return parsed.error;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "Unknown error".to_string()
    } else {
        text.chars().take(200).collect()
    }
}
