//! HTTP service uploading an image to the enhancement endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{WorkflowError, WorkflowResult};
use crate::workflow::HttpReply;

/// Build the `/enhance` URL for an endpoint base.
pub fn enhance_url(endpoint: &str) -> String {
    format!("{}/enhance", endpoint.trim_end_matches('/'))
}

/// Upload `file` as multipart field `file` and collect the raw reply.
///
/// Any status is returned as a reply; only transport failures are errors.
/// Classifying the reply is the workflow's job.
pub async fn request_enhancement(file: &File, endpoint: &str) -> WorkflowResult<HttpReply> {
    let form_data = FormData::new()
        .map_err(|e| WorkflowError::NetworkFailure(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| WorkflowError::NetworkFailure(format!("Failed to append file: {:?}", e)))?;

    let url = enhance_url(endpoint);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| WorkflowError::NetworkFailure(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| WorkflowError::NetworkFailure(format!("HTTP request failed: {}", e)))?;

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .binary()
        .await
        .map_err(|e| WorkflowError::NetworkFailure(format!("Failed to read response body: {}", e)))?;

    Ok(HttpReply::new(status, content_type, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_url() {
        assert_eq!(enhance_url("http://localhost:8000"), "http://localhost:8000/enhance");
        assert_eq!(enhance_url("https://api.clearx.dev/"), "https://api.clearx.dev/enhance");
    }
}
