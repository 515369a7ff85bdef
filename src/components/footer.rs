//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Driveline PDF Parser v2.0 - Enhanced with comprehensive data extraction"</div>
            <div class="footer-subline">
                "Extracts 91+ fields including criminal history, safety records, and employment details"
            </div>
        </footer>
    }
}
