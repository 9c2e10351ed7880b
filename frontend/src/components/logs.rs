//! Activity log of the testing widget.

use leptos::*;

use crate::types::LogEntry;

/// Activity panel listing what the workflow did, newest last.
#[component]
pub fn ActivityLog(
    /// Log entries
    logs: RwSignal<Vec<LogEntry>>,
) -> impl IntoView {
    view! {
        <Show when=move || logs.with(|l| !l.is_empty()) fallback=|| view! { }>
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button class="logs-clear" on:click=move |_| logs.set(vec![])>
                        "Clear"
                    </button>
                </div>
                <div class="logs-content">
                    <For
                        each=move || logs.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
