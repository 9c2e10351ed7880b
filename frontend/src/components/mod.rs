//! UI Components for the ClearX demo page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Main title and call to action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`TestSection`] - The "try the model" widget
//! - [`DropSurface`] - Image selection with drag & drop
//! - [`TestingGrid`] - Input preview, enhanced output, download/reset
//! - [`NoticeBanner`] - Error notice after a failed enhancement
//! - [`ActivityLog`] - What the widget did

mod header;
mod hero;
mod upload;
mod preview;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use footer::*;
pub use logs::*;

use leptos::*;
use crate::controller::WorkflowController;

/// Drop surface while idle, testing grid once a session is running.
#[component]
pub fn TestSection(controller: WorkflowController) -> impl IntoView {
    let armed = move || controller.workflow.with(|wf| wf.drop_surface_armed());

    view! {
        <section class="test-container" id="try">
            <div class="section-header">
                <h2>"Test the model"</h2>
                <p>"Upload a tile to the enhancement endpoint. The result stays in this tab."</p>
            </div>

            <NoticeBanner controller=controller/>

            <Show
                when=armed
                fallback=move || view! { <TestingGrid controller=controller/> }
            >
                <DropSurface controller=controller/>
            </Show>

            <ActivityLog logs=controller.logs/>
        </section>
    }
}
