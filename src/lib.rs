//! Driveline - Driver Application Review Frontend
//!
//! A WebAssembly frontend for submitting driver-application PDFs to the
//! external parsing service and reviewing the structured result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (product badges)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drag & drop, submit, status line)       │
//! │  └── ResultsSection (summary + category tabs) or empty state│
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`record`] - Data contract for the parsed driver application
//! - [`workflow`] - Upload state machine (pure, host-testable)
//! - [`risk`] - Risk-level classification
//! - [`export`] - Single-record CSV flattening and browser download
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Parsing-service HTTP client

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod export;
pub mod record;
pub mod risk;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, StatusEntry, StatusLevel};

// Data contract
pub use record::{DriverApplicationRecord, EmploymentRecord, ExtractionMetadata, TriState};

// Core operations
pub use export::{export_record, save_csv, CsvExport};
pub use risk::{classify, RiskLevel};
pub use workflow::{Outcome, SelectedFile, UploadEvent, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

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

    log::info!("🦀 Driveline PDF Parser - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
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
    // Global state: the workflow position, the single current record, and
    // the user-visible status line.
    let (upload_state, set_upload_state) = create_signal(UploadState::Idle);
    let (record, set_record) = create_signal(None::<DriverApplicationRecord>);
    let (status, set_status) = create_signal(None::<StatusEntry>);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <div class="layout-grid">
                <UploadSection
                    state=upload_state
                    set_state=set_upload_state
                    set_record=set_record
                    status=status
                    set_status=set_status
                />

                <Show
                    when=move || record.get().is_some()
                    fallback=|| view! { <EmptyResults/> }
                >
                    <ResultsSection record=record set_status=set_status/>
                </Show>
            </div>
        </div>

        <Footer/>
    }
}
