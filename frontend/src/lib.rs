//! ClearX - Frontend Rust/Leptos Application
//!
//! A WebAssembly demo page for the ClearX satellite super-resolution model.
//! Visitors drop an image, see it previewed locally, and get the enhanced
//! version back from the enhancement endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, call to action)                           │
//! │  └── TestSection                                             │
//! │      ├── NoticeBanner (after a failure)                     │
//! │      ├── DropSurface (idle) or TestingGrid (session)        │
//! │      └── ActivityLog                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`workflow`] - DOM-free upload/enhance state machine
//! - [`controller`] - Browser driver running the workflow's effects
//! - [`types`] - Common types (LogEntry, WorkflowError)
//! - [`components`] - UI components
//! - [`services`] - Endpoint communication and browser file I/O

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod workflow;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{LogEntry, LogLevel, WorkflowError, WorkflowResult};

// Workflow
pub use workflow::{Effect, Outcome, SelectedFile, SessionId, SessionStatus, UploadWorkflow};

pub use controller::WorkflowController;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛰️ ClearX Webstore - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} | Satellite Super-Resolution", PRODUCT_NAME)/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The page owns the one workflow; components get it by value (Copy signals)
    let controller = WorkflowController::new();

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <TestSection controller=controller/>
        </div>

        <Footer/>
    }
}
