//! DOM-free upload/enhance workflow.
//!
//! # Modules
//!
//! - [`session`] - Session data model (ids, status, selected file, result)
//! - [`machine`] - The state machine and its effects
//! - [`drop_surface`] - File acceptance rules
//! - [`preview`] - Local `data:` URL representation
//! - [`response`] - Endpoint reply classification
//! - [`download`] - Download artifact naming

pub mod download;
pub mod drop_surface;
pub mod machine;
pub mod preview;
pub mod response;
pub mod session;

pub use download::{download_file_name, DownloadArtifact};
pub use drop_surface::{accepts_mime, validate_selection};
pub use machine::{Effect, Notice, Outcome, UploadWorkflow};
pub use preview::data_url;
pub use response::{classify_reply, HttpReply};
pub use session::{ResultImage, SelectedFile, SessionId, SessionStatus, UploadSession};
