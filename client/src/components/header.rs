//! Top-right links and account buttons.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <a href="#" class="header__link">"Gmail"</a>
            <a href="#" class="header__link">"Images"</a>
            <button class="header__settings" aria-label="Settings">
                <svg viewBox="0 0 24 24" width="18" height="18" aria-hidden="true">
                    <circle cx="12" cy="12" r="3" fill="none" stroke="currentColor" stroke-width="2"/>
                    <circle cx="12" cy="12" r="8" fill="none" stroke="currentColor" stroke-width="2" stroke-dasharray="3 2"/>
                </svg>
            </button>
            <button class="header__user" aria-label="User">
                <svg viewBox="0 0 24 24" width="18" height="18" aria-hidden="true">
                    <circle cx="12" cy="8" r="4" fill="none" stroke="currentColor" stroke-width="2"/>
                    <path d="M4 21c0-4 4-6 8-6s8 2 8 6" fill="none" stroke="currentColor" stroke-width="2"/>
                </svg>
            </button>
        </header>
    }
}
