//! Top navigation bar with the product badges.

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo-mark">"📄"</span>
                <div>
                    <a href="#" class="logo">"Driveline PDF Parser"</a>
                    <p class="logo-subtitle">"Professional Driver Application Data Extraction"</p>
                </div>
            </div>
            <div class="header-right">
                <span class="badge badge-outline">"⚡ Enhanced v2.0"</span>
                <span class="badge badge-outline">"🗄 91+ Fields"</span>
            </div>
        </header>
    }
}
