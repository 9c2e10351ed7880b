//! Hero section component

use leptos::*;

use crate::PRODUCT_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{PRODUCT_NAME} ": Satellite Super-Resolution"</h1>
            <p class="subtitle">
                "Sharper satellite imagery, four times the resolution. "
                "Drop a tile below and see the model at work."
            </p>
            <a href="#try" class="btn btn-primary">"Try the model"</a>
        </section>
    }
}
