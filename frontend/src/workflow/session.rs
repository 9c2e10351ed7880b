//! Upload session data model.

use std::fmt;

use super::preview::data_url;

/// Identifier attached to every asynchronous operation of a session.
///
/// Issued in increasing order; a completion carrying an id other than the
/// current session's is stale and gets discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Previewing,
    Enhancing,
    Ready,
    /// Transient: the failure transition resets straight back to `Idle`.
    Failed,
}

impl SessionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Previewing => "previewing",
            SessionStatus::Enhancing => "enhancing",
            SessionStatus::Ready => "ready",
            SessionStatus::Failed => "failed",
        }
    }
}

/// Declared metadata of the file picked or dropped by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// MIME type as declared by the browser
    pub mime: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// Enhanced image returned by the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultImage {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub width: u32,
    pub height: u32,
}

impl ResultImage {
    /// Displayable URL for the output slot.
    pub fn result_url(&self) -> String {
        data_url(&self.mime, &self.bytes)
    }
}

/// One user attempt to upload and enhance a single image.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSession {
    pub id: SessionId,
    pub file: SelectedFile,
    pub status: SessionStatus,
    /// Local `data:` URL of the input, once the preview read completes
    pub input_preview_url: Option<String>,
    /// Set only while `status == Ready`
    pub result: Option<ResultImage>,
    /// Whether the single enhancement request has been dispatched
    pub request_issued: bool,
}

impl UploadSession {
    pub(crate) fn new(id: SessionId, file: SelectedFile) -> Self {
        Self {
            id,
            file,
            status: SessionStatus::Previewing,
            input_preview_url: None,
            result: None,
            request_issued: false,
        }
    }

    pub fn result_url(&self) -> Option<String> {
        self.result.as_ref().map(ResultImage::result_url)
    }
}
