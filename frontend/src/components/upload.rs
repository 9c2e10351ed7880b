//! Drop surface: click-to-browse and drag & drop image selection.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::controller::{WorkflowController, FILE_INPUT_ID};

#[component]
pub fn DropSurface(controller: WorkflowController) -> impl IntoView {
    let (dragover, set_dragover) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        controller.handle_file(file);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragover.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        controller.handle_file(file);
    };

    // Clicking anywhere on the zone opens the picker
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            id="drop-zone"
            class:dragover=move || dragover.get()
            on:click=trigger_file_input
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_dragover.set(true);
            }
            on:dragleave=move |_| set_dragover.set(false)
            on:drop=on_drop
        >
            <div class="upload-icon">"🛰️"</div>
            <div class="upload-text">"Drop a satellite image here"</div>
            <div class="upload-hint">"or click to browse • PNG, JPEG, WebP, TIFF"</div>
        </div>
        // Kept outside the zone so its click does not bubble back into the zone
        <input
            type="file"
            id=FILE_INPUT_ID
            accept="image/*"
            style="display:none"
            on:change=on_file_change
        />
    }
}
