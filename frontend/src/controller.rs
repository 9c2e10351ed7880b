//! Browser driver for the upload/enhance workflow.
//!
//! Owns the [`UploadWorkflow`] in a signal, feeds it DOM events and async
//! completions, and runs the [`Effect`]s it returns.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::config::ENHANCE_ENDPOINT;
use crate::services::{read_file_bytes, request_enhancement, selected_file, trigger_download};
use crate::types::{push_log, LogEntry, LogLevel};
use crate::workflow::{Effect, Outcome, SessionId, UploadWorkflow};

/// DOM id of the hidden file input behind the drop surface.
pub const FILE_INPUT_ID: &str = "file-input";

#[derive(Clone, Copy)]
pub struct WorkflowController {
    pub workflow: RwSignal<UploadWorkflow>,
    pub logs: RwSignal<Vec<LogEntry>>,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self {
            workflow: create_rw_signal(UploadWorkflow::new()),
            logs: create_rw_signal(Vec::new()),
        }
    }

    /// Entry point for both the file picker and drops.
    pub fn handle_file(&self, file: Option<File>) {
        let Some(file) = file else {
            self.log(LogLevel::Warning, "No file selected");
            return;
        };

        let selection = selected_file(&file);
        let name = selection.name.clone();
        let started = self.workflow.try_update(|wf| wf.select(selection));

        match started {
            Some(Ok((id, effects))) => {
                self.log(LogLevel::Info, format!("📤 Enhancing \"{}\" (session {})", name, id));
                self.run(effects, Some(&file));
            }
            Some(Err(e)) => self.log(LogLevel::Warning, format!("⚠️ {}", e)),
            None => {}
        }
    }

    pub fn reset(&self) {
        let effects = self.workflow.try_update(|wf| wf.reset()).unwrap_or_default();
        self.log(LogLevel::Info, "Resetting test area");
        self.run(effects, None);
    }

    pub fn download(&self) {
        let Some(artifact) = self.workflow.with_untracked(|wf| wf.download()) else {
            self.log(LogLevel::Warning, "Nothing to download yet");
            return;
        };
        match trigger_download(&artifact) {
            Ok(()) => self.log(LogLevel::Success, format!("💾 Saved {}", artifact.file_name)),
            Err(e) => self.log(LogLevel::Error, format!("❌ Download failed: {}", e)),
        }
    }

    fn run(&self, effects: Vec<Effect>, file: Option<&File>) {
        for effect in effects {
            match effect {
                Effect::ReadPreview { session } => {
                    if let Some(file) = file {
                        self.read_preview(session, file.clone());
                    }
                }
                Effect::SendEnhanceRequest { session } => {
                    if let Some(file) = file {
                        self.send_request(session, file.clone());
                    }
                }
                Effect::PresentResult { session } => {
                    self.log(LogLevel::Success, format!("✅ Session {} enhanced", session));
                }
                Effect::ShowNotice(notice) => {
                    self.log(LogLevel::Error, format!("❌ [{}] {}", notice.kind(), notice.message()));
                }
                Effect::ClearFileInput => clear_file_input(),
            }
        }
    }

    fn read_preview(&self, session: SessionId, file: File) {
        let this = *self;
        spawn_local(async move {
            let outcome = match read_file_bytes(&file).await {
                Ok(bytes) => this.workflow.try_update(|wf| wf.preview_loaded(session, &bytes)),
                Err(e) => this.workflow.try_update(|wf| wf.preview_failed(session, &e)),
            };
            this.settle(session, outcome);
        });
    }

    fn send_request(&self, session: SessionId, file: File) {
        let this = *self;
        if !matches!(this.workflow.try_update(|wf| wf.request_sent(session)), Some(Outcome::Applied(_))) {
            return;
        }

        spawn_local(async move {
            let reply = request_enhancement(&file, ENHANCE_ENDPOINT).await;
            let outcome = this.workflow.try_update(|wf| match reply {
                Ok(reply) => wf.enhancement_replied(session, reply),
                Err(e) => wf.enhancement_failed(session, e),
            });
            this.settle(session, outcome);
        });
    }

    fn settle(&self, session: SessionId, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Applied(effects)) => self.run(effects, None),
            Some(Outcome::Stale) => {
                self.log(LogLevel::Info, format!("Discarded late result for session {}", session))
            }
            Some(Outcome::Ignored) | None => {}
        }
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::new(level, message);
        log::info!("{}", entry.message);
        self.logs.update(|logs| push_log(logs, entry));
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new()
    }
}

fn clear_file_input() {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}
