use leptos::*;

use crate::PRODUCT_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{PRODUCT_NAME}</a>
                <span class="badge">"×4 ESRGAN"</span>
            </div>
            <nav class="header-right">
                <a href="#try" class="nav-link">"Try it"</a>
            </nav>
        </header>
    }
}
