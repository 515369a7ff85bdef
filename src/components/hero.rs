//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Driver Application Review"</h1>
            <p class="subtitle">
                "Upload a driver-application PDF to extract structured applicant data, "
                "triage it by risk level, and export the result to CSV."
            </p>
        </div>
    }
}
