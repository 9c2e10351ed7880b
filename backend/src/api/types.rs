//! REST API types for frontend integration.
//!
//! Successful enhancements answer with raw PNG bytes; everything else is JSON.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::enhance::EnhanceOptions;

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,

    /// Upscaling factor applied by `/enhance`
    pub scale: u32,

    /// Largest output accepted, in pixels
    pub max_output_pixels: u64,

    /// Multipart upload limit, in bytes
    pub max_upload_bytes: usize,
}

impl HealthResponse {
    pub fn new(options: &EnhanceOptions, max_upload_bytes: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: "clearx".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            scale: options.scale,
            max_output_pixels: options.max_output_pixels,
            max_upload_bytes,
        }
    }
}

/// Create an error response
pub fn error_response(request_id: &Uuid, error: &str) -> Value {
    json!({
        "requestId": request_id.to_string(),
        "status": "error",
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let id = Uuid::new_v4();
        let body = error_response(&id, "No file provided");
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "No file provided");
        assert_eq!(body["requestId"], id.to_string());
    }

    #[test]
    fn test_health_serializes_camel_case() {
        let health = HealthResponse::new(&EnhanceOptions::default(), 1024);
        let value = serde_json::to_value(&health).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["scale"], 4);
        assert_eq!(value["maxUploadBytes"], 1024);
    }
}
