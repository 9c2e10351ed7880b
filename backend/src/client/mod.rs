//! Native enhancement client.
//!
//! Same contract as the page's upload widget, without a browser: one
//! multipart `POST {endpoint}/enhance` with field `file`, success only for a
//! 2xx reply whose body decodes as an image.
//!
//! ```rust,ignore
//! use clearx::client::EnhanceClient;
//!
//! let client = EnhanceClient::new("http://localhost:8000");
//! let result = client.enhance_file(Path::new("tile.png")).await?;
//! std::fs::write(result.file_name(), &result.bytes)?;
//! ```

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Stem of the saved result, shared with the page's download button.
pub const DOWNLOAD_FILE_STEM: &str = "ClearX_enhanced_satellite";

/// Enhanced image received from the endpoint.
#[derive(Debug, Clone)]
pub struct EnhancedDownload {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub width: u32,
    pub height: u32,
}

impl EnhancedDownload {
    /// Product-branded file name for this result.
    pub fn file_name(&self) -> String {
        download_file_name(&self.mime)
    }
}

/// `ClearX_enhanced_satellite.<ext>`, extension from the MIME type.
///
/// Same table as the page's download button.
pub fn download_file_name(mime: &str) -> String {
    let ext = match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/gif" => "gif",
        "image/tiff" => "tiff",
        _ => "png",
    };
    format!("{}.{}", DOWNLOAD_FILE_STEM, ext)
}

/// HTTP client for an enhancement endpoint.
#[derive(Clone)]
pub struct EnhanceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EnhanceClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn enhance_url(&self) -> String {
        format!("{}/enhance", self.endpoint)
    }

    /// Upload a local file.
    ///
    /// Files whose guessed MIME type is not `image/*` are rejected before any
    /// request is made.
    pub async fn enhance_file(&self, path: &Path) -> ClientResult<EnhancedDownload> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(ClientError::InvalidFileType(mime.essence_str().to_string()));
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        self.enhance_bytes(bytes, &name, mime.essence_str()).await
    }

    /// Upload in-memory bytes under the given file name and MIME type.
    pub async fn enhance_bytes(&self, bytes: Vec<u8>, name: &str, mime: &str) -> ClientResult<EnhancedDownload> {
        let part = Part::bytes(bytes).file_name(name.to_string()).mime_str(mime)?;
        let form = Form::new().part("file", part);

        log::info!("📤 POST {} ({})", self.enhance_url(), name);
        let response = self.http.post(self.enhance_url()).multipart(form).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());
        let body = response.bytes().await?.to_vec();

        classify_reply(status.as_u16(), content_type.as_deref(), body)
    }
}

/// Turn a raw reply into a result or the matching error.
pub fn classify_reply(status: u16, content_type: Option<&str>, body: Vec<u8>) -> ClientResult<EnhancedDownload> {
    if !(200..300).contains(&status) {
        return Err(ClientError::Server {
            status,
            message: error_message(&body),
        });
    }

    let format = image::guess_format(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(&body, format)
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    // The bytes decoded as `format`; a declared content type is only logged.
    let mime = format.to_mime_type().to_string();
    if let Some(declared) = content_type {
        if !declared.starts_with(&mime) {
            log::warn!("Reply declared {} but contains {}", declared, mime);
        }
    }

    Ok(EnhancedDownload {
        width: decoded.width(),
        height: decoded.height(),
        bytes: body,
        mime,
    })
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(|s| s.to_string()))
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                "Unknown error".to_string()
            } else {
                text
            }
        })
}
