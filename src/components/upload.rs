//! PDF upload component with drag & drop support.
//!
//! Drag-and-drop and click-to-browse both feed the same workflow guard, so
//! the two input paths apply identical type checking. The component owns the
//! `web_sys::File` handle; all transition decisions come from the pure
//! [`UploadState`] machine.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::api_base;
use crate::record::DriverApplicationRecord;
use crate::services::parse_pdf;
use crate::types::{StatusEntry, StatusLevel};
use crate::workflow::{Outcome, SelectedFile, UploadEvent, UploadState};

#[component]
pub fn UploadSection(
    state: ReadSignal<UploadState>,
    set_state: WriteSignal<UploadState>,
    set_record: WriteSignal<Option<DriverApplicationRecord>>,
    status: ReadSignal<Option<StatusEntry>>,
    set_status: WriteSignal<Option<StatusEntry>>,
) -> impl IntoView {
    // The actual file handle lives beside the state machine, which only
    // tracks metadata.
    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (drag_active, set_drag_active) = create_signal(false);

    // Single entry point for both input paths.
    let handle_candidate = move |file: File| {
        let meta = SelectedFile {
            name: file.name(),
            mime: file.type_(),
            size_bytes: file.size(),
        };
        match state.get_untracked().on(UploadEvent::FilePicked(meta.clone())) {
            Outcome::Next(next) => {
                set_selected_file.set(Some(file));
                set_status.set(Some(StatusEntry::now(
                    StatusLevel::Info,
                    format!("Selected: {} ({:.2} MB)", meta.name, meta.size_mb()),
                )));
                set_state.set(next);
            }
            Outcome::Rejected(err) => {
                log::warn!("Rejected file {} ({})", meta.name, meta.mime);
                set_status.set(Some(StatusEntry::now(StatusLevel::Error, err.to_string())));
            }
            Outcome::Ignored => {}
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                handle_candidate(file);
            }
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0)) {
            handle_candidate(file);
        }
    };

    // Handler for submitting the selected file to the parsing service.
    // Exactly one network call per Submitting entry; stale responses are
    // dropped by the state machine.
    let on_submit = move |_| {
        if let Outcome::Next(next) = state.get_untracked().on(UploadEvent::Submit) {
            let Some(file) = selected_file.get_untracked() else {
                return;
            };
            set_state.set(next);
            set_status.set(Some(StatusEntry::now(
                StatusLevel::Info,
                "Uploading and parsing PDF...",
            )));

            spawn_local(async move {
                match parse_pdf(file, &api_base()).await {
                    Ok(record) => match state.get_untracked().on(UploadEvent::ParseSucceeded) {
                        Outcome::Next(next) => {
                            let confidence = record.parsing_confidence.unwrap_or(0.0);
                            set_status.set(Some(StatusEntry::now(
                                StatusLevel::Success,
                                format!(
                                    "✅ PDF parsed successfully with {}% confidence",
                                    confidence
                                ),
                            )));
                            set_record.set(Some(record));
                            set_state.set(next);
                        }
                        _ => log::warn!("Dropping stale parse response"),
                    },
                    Err(err) => match state.get_untracked().on(UploadEvent::ParseFailed) {
                        Outcome::Next(next) => {
                            log::error!("Upload error: {}", err);
                            set_status.set(Some(StatusEntry::now(
                                StatusLevel::Error,
                                format!("❌ Error: {}", err),
                            )));
                            set_state.set(next);
                        }
                        _ => log::warn!("Dropping stale parse failure"),
                    },
                }
            });
        }
    };

    // Clicking anywhere in the drop zone opens the file browser.
    let trigger_file_input = move |_| {
        let document = gloo_utils::document();
        if let Some(input) = document.get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div class="upload-section">
            <h2 class="panel-title">"Upload PDF"</h2>
            <p class="panel-subtitle">
                "Upload a Tenstreet driver application PDF for comprehensive data extraction"
            </p>

            <div
                class="drop-zone"
                class=("drag-active", move || drag_active.get())
                on:click=trigger_file_input
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drop your PDF here"</div>
                <div class="upload-hint">"or click to browse files"</div>
                <input
                    type="file"
                    id="fileInput"
                    accept=".pdf"
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <Show
                when=move || state.get().selected().is_some()
                fallback=|| view! { }
            >
                <div class="file-info">
                    <span class="file-icon">"📄"</span>
                    <div class="file-meta">
                        <div class="file-name">
                            {move || state.get().selected().map(|f| f.name.clone())}
                        </div>
                        <div class="file-size">
                            {move || state.get().selected().map(|f| format!("{:.2} MB", f.size_mb()))}
                        </div>
                    </div>
                </div>
            </Show>

            <button
                class="btn btn-primary upload-button"
                on:click=on_submit
                disabled=move || !state.get().can_submit()
            >
                {move || if state.get().is_submitting() {
                    "⏳ Processing..."
                } else {
                    "Parse PDF"
                }}
            </button>

            <Show
                when=move || status.get().is_some()
                fallback=|| view! { }
            >
                <div class=move || {
                    let level = status.get().map(|s| s.level.css_class()).unwrap_or_default();
                    format!("status-line {}", level)
                }>
                    <span class="status-timestamp">
                        {move || status.get().map(|s| s.timestamp)}
                    </span>
                    {move || status.get().map(|s| s.message)}
                </div>
            </Show>

            <div class="feature-list">
                <h4>"Enhanced Features:"</h4>
                <ul>
                    <li>"Criminal record detection"</li>
                    <li>"Accident history parsing"</li>
                    <li>"Employment history extraction"</li>
                    <li>"FMCSR compliance checking"</li>
                    <li>"Traffic violation tracking"</li>
                </ul>
            </div>
        </div>
    }
}
