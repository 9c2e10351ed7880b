//! Input/output slots, loader and result actions of the testing widget.

use leptos::*;

use crate::controller::WorkflowController;
use crate::workflow::SessionStatus;

/// Side-by-side input preview and enhanced output.
#[component]
pub fn TestingGrid(controller: WorkflowController) -> impl IntoView {
    let workflow = controller.workflow;

    let status = move || workflow.with(|wf| wf.status());
    let is_enhancing = move || matches!(status(), SessionStatus::Previewing | SessionStatus::Enhancing);
    let is_ready = move || status() == SessionStatus::Ready;
    let can_reset = move || workflow.with(|wf| wf.can_reset());
    let can_download = move || workflow.with(|wf| wf.can_download());

    let input_style = move || {
        workflow.with(|wf| match wf.input_preview_url() {
            Some(url) => {
                // Blurred until the enhanced output arrives
                let filter = if is_ready() { "none" } else { "blur(4px) contrast(0.8)" };
                format!("background-image: url({}); filter: {};", url, filter)
            }
            None => "background-image: none;".to_string(),
        })
    };

    let output_style = move || {
        workflow.with(|wf| match wf.result_url() {
            Some(url) => format!("background-image: url({});", url),
            None => "background-image: none;".to_string(),
        })
    };

    let dimensions = move || {
        workflow.with(|wf| {
            wf.session()
                .and_then(|s| s.result.as_ref())
                .map(|r| format!("{} × {} px", r.width, r.height))
        })
    };

    let file_label = move || {
        workflow.with(|wf| {
            wf.session()
                .map(|s| s.file.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="testing-grid" id="testing-grid">
            <div class="preview-card">
                <div class="preview-label">"Input • " {file_label}</div>
                <div class="preview-image" id="input-preview" style=input_style></div>
            </div>
            <div class="preview-card">
                <div class="preview-label">"ClearX output"</div>
                <div class="preview-image" id="output-preview" style=output_style>
                    <Show when=is_enhancing fallback=|| view! { }>
                        <div class="model-loader" id="model-loader">
                            <div class="spinner"></div>
                            <span>"Enhancing…"</span>
                        </div>
                    </Show>
                </div>
                <div class="preview-meta">{move || dimensions().unwrap_or_default()}</div>
            </div>
        </div>

        <Show when=can_reset fallback=|| view! { }>
            <div class="test-actions" id="test-actions">
                <button class="btn btn-secondary" id="reset-test" on:click=move |_| controller.reset()>
                    {move || if is_ready() { "Try another image" } else { "Cancel" }}
                </button>
                <Show when=can_download fallback=|| view! { }>
                    <button class="btn btn-primary" id="download-result" on:click=move |_| controller.download()>
                        "Download result"
                    </button>
                </Show>
            </div>
        </Show>
    }
}

/// Error banner shown after a failed enhancement.
#[component]
pub fn NoticeBanner(controller: WorkflowController) -> impl IntoView {
    let workflow = controller.workflow;
    let message = move || workflow.with(|wf| wf.notice().map(|n| n.message()));
    let kind = move || workflow.with(|wf| wf.notice().map(|n| n.kind()).unwrap_or_default());

    view! {
        <Show when=move || message().is_some() fallback=|| view! { }>
            <div class="error-message" role="alert" data-kind=kind>
                <span class="error-kind">{kind}</span>
                " "
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
