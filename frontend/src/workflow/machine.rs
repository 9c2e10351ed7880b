//! The upload/enhance state machine.
//!
//! ```text
//! Idle --select--> Previewing --request_sent--> Enhancing --success--> Ready --reset--> Idle
//!                                               Enhancing --failure--> Idle (+ notice)
//! ```
//!
//! The machine never touches the DOM or the network. Each transition returns
//! the [`Effect`]s the driver has to run, and every asynchronous completion is
//! reported back with the [`SessionId`] it was started for. Completions for a
//! session that is no longer current are discarded.
//!
//! A new selection while a request is pending abandons the current session:
//! the request is not aborted, its reply is simply dropped when it arrives.

use crate::types::{WorkflowError, WorkflowResult};

use super::download::DownloadArtifact;
use super::drop_surface::validate_selection;
use super::preview::data_url;
use super::response::{classify_reply, HttpReply};
use super::session::{SelectedFile, SessionId, SessionStatus, UploadSession};

/// Work the driver must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Read the selected file locally and report `preview_loaded`.
    ReadPreview { session: SessionId },
    /// Upload the selected file to the endpoint (exactly once per session).
    SendEnhanceRequest { session: SessionId },
    /// Result is available; show the output slot and action bar.
    PresentResult { session: SessionId },
    /// Surface a user-visible error notice.
    ShowNotice(Notice),
    /// Clear the file input so the same file can be picked again.
    ClearFileInput,
}

/// User-visible error notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub error: WorkflowError,
}

impl Notice {
    pub fn message(&self) -> String {
        format!("Enhancement failed: {}", self.error)
    }

    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }
}

/// What happened to an asynchronous completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Applied to the current session.
    Applied(Vec<Effect>),
    /// Belongs to an abandoned session; dropped.
    Stale,
    /// Current session, but not valid in its present state (e.g. a duplicate).
    Ignored,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn into_effects(self) -> Vec<Effect> {
        match self {
            Outcome::Applied(effects) => effects,
            Outcome::Stale | Outcome::Ignored => Vec::new(),
        }
    }
}

/// Controller owning the (at most one) live upload session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadWorkflow {
    next_id: u64,
    session: Option<UploadSession>,
    notice: Option<Notice>,
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map(|s| s.status)
            .unwrap_or(SessionStatus::Idle)
    }

    pub fn session(&self) -> Option<&UploadSession> {
        self.session.as_ref()
    }

    pub fn current_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// The drop surface accepts input only while idle.
    pub fn drop_surface_armed(&self) -> bool {
        self.status() == SessionStatus::Idle
    }

    /// Reset is offered whenever a session exists, including while a
    /// request is still outstanding.
    pub fn can_reset(&self) -> bool {
        self.session.is_some()
    }

    /// Download is offered only for a ready result.
    pub fn can_download(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.status == SessionStatus::Ready && s.result.is_some())
    }

    pub fn input_preview_url(&self) -> Option<&str> {
        self.session.as_ref()?.input_preview_url.as_deref()
    }

    pub fn result_url(&self) -> Option<String> {
        self.session.as_ref()?.result_url()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Accept a file from the picker or a drop.
    ///
    /// Rejected files leave the workflow untouched.
    pub fn select(&mut self, file: SelectedFile) -> WorkflowResult<(SessionId, Vec<Effect>)> {
        if let Err(e) = validate_selection(&file) {
            log::error!("Model Testing: {} ({})", e, file.name);
            return Err(e);
        }

        if let Some(previous) = self.session.take() {
            log::warn!(
                "Model Testing: abandoning session {} ({}) for a new selection",
                previous.id,
                previous.status.label()
            );
        }

        self.next_id += 1;
        let id = SessionId(self.next_id);
        log::info!(
            "Model Testing: session {} handling \"{}\" ({} bytes, {})",
            id,
            file.name,
            file.size,
            file.mime
        );

        self.session = Some(UploadSession::new(id, file));
        self.notice = None;

        Ok((
            id,
            vec![
                Effect::ReadPreview { session: id },
                Effect::SendEnhanceRequest { session: id },
            ],
        ))
    }

    /// The driver dispatched the upload for `id`.
    pub fn request_sent(&mut self, id: SessionId) -> Outcome {
        let Some(session) = self.current_mut(id) else {
            return Outcome::Stale;
        };
        if session.request_issued || session.status != SessionStatus::Previewing {
            return Outcome::Ignored;
        }
        session.request_issued = true;
        session.status = SessionStatus::Enhancing;
        log::info!("Model Testing: session {} request sent", id);
        Outcome::Applied(Vec::new())
    }

    /// Local read of the input completed.
    pub fn preview_loaded(&mut self, id: SessionId, bytes: &[u8]) -> Outcome {
        let Some(session) = self.current_mut(id) else {
            log::debug!("Model Testing: dropping preview for stale session {}", id);
            return Outcome::Stale;
        };
        session.input_preview_url = Some(data_url(&session.file.mime, bytes));
        log::info!("Model Testing: session {} preview ready", id);
        Outcome::Applied(Vec::new())
    }

    /// Local read failed. The enhancement does not depend on it, so only log.
    pub fn preview_failed(&mut self, id: SessionId, reason: &str) -> Outcome {
        if self.current_mut(id).is_none() {
            return Outcome::Stale;
        }
        log::warn!("Model Testing: session {} preview unavailable: {}", id, reason);
        Outcome::Applied(Vec::new())
    }

    /// The endpoint answered.
    pub fn enhancement_replied(&mut self, id: SessionId, reply: HttpReply) -> Outcome {
        match self.awaiting_reply(id) {
            Some(true) => {}
            Some(false) => return Outcome::Ignored,
            None => {
                log::debug!("Model Testing: dropping reply for stale session {}", id);
                return Outcome::Stale;
            }
        }

        match classify_reply(reply) {
            Ok(result) => {
                log::info!(
                    "Model Testing: session {} enhanced ({}x{}, {} bytes)",
                    id,
                    result.width,
                    result.height,
                    result.bytes.len()
                );
                if let Some(session) = self.current_mut(id) {
                    session.result = Some(result);
                    session.status = SessionStatus::Ready;
                }
                Outcome::Applied(vec![Effect::PresentResult { session: id }])
            }
            Err(e) => Outcome::Applied(self.fail(id, e)),
        }
    }

    /// The request never produced a reply.
    pub fn enhancement_failed(&mut self, id: SessionId, error: WorkflowError) -> Outcome {
        match self.awaiting_reply(id) {
            Some(true) => Outcome::Applied(self.fail(id, error)),
            Some(false) => Outcome::Ignored,
            None => Outcome::Stale,
        }
    }

    /// Discard all session state and re-arm the drop surface.
    pub fn reset(&mut self) -> Vec<Effect> {
        if let Some(session) = self.session.take() {
            log::info!(
                "Model Testing: resetting session {} ({})",
                session.id,
                session.status.label()
            );
        }
        self.notice = None;
        vec![Effect::ClearFileInput]
    }

    /// Result bytes packaged for saving; only available when `Ready`.
    pub fn download(&self) -> Option<DownloadArtifact> {
        let session = self.session.as_ref()?;
        if session.status != SessionStatus::Ready {
            return None;
        }
        let artifact = DownloadArtifact::from_result(session.result.as_ref()?);
        log::info!("Model Testing: download prepared as {}", artifact.file_name);
        Some(artifact)
    }

    fn current_mut(&mut self, id: SessionId) -> Option<&mut UploadSession> {
        self.session.as_mut().filter(|s| s.id == id)
    }

    /// `None` when stale, otherwise whether a reply is expected.
    fn awaiting_reply(&self, id: SessionId) -> Option<bool> {
        let session = self.session.as_ref().filter(|s| s.id == id)?;
        Some(matches!(
            session.status,
            SessionStatus::Previewing | SessionStatus::Enhancing
        ))
    }

    /// Enhancing --failure--> Failed, then the same path as an explicit reset.
    fn fail(&mut self, id: SessionId, error: WorkflowError) -> Vec<Effect> {
        debug_assert!(error.is_network_related(), "selection errors never reach a session");
        if let Some(session) = self.current_mut(id) {
            session.status = SessionStatus::Failed;
            session.result = None;
        }
        log::error!("Model Testing: session {} failed [{}]: {}", id, error.kind(), error);

        let notice = Notice { error };
        let mut effects = vec![Effect::ShowNotice(notice.clone())];
        effects.extend(self.reset());
        self.notice = Some(notice);
        effects
    }
}
