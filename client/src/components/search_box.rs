//! Search input and the two inert search buttons.

use leptos::prelude::*;

/// Rounded search field with search, microphone, and camera affordances.
///
/// Nothing is submitted; typing only edits the input.
#[component]
pub fn SearchBox() -> impl IntoView {
    view! {
        <div class="search-box">
            <div class="search-box__field">
                <svg class="search-box__icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
                    <circle cx="11" cy="11" r="7" fill="none" stroke="currentColor" stroke-width="2"/>
                    <path d="M20 20l-4-4" stroke="currentColor" stroke-width="2"/>
                </svg>
                <input
                    class="search-box__input"
                    aria-label="Search"
                    placeholder="Search Google or type a URL"
                />
                <div class="search-box__tools">
                    <svg viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
                        <rect x="9" y="3" width="6" height="11" rx="3" fill="none" stroke="currentColor" stroke-width="2"/>
                        <path d="M5 11a7 7 0 0 0 14 0M12 18v3" fill="none" stroke="currentColor" stroke-width="2"/>
                    </svg>
                    <svg viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
                        <rect x="3" y="7" width="18" height="13" rx="2" fill="none" stroke="currentColor" stroke-width="2"/>
                        <circle cx="12" cy="13" r="3" fill="none" stroke="currentColor" stroke-width="2"/>
                        <path d="M8 7l2-3h4l2 3" fill="none" stroke="currentColor" stroke-width="2"/>
                    </svg>
                </div>
            </div>
            <div class="search-box__buttons">
                <button class="search-box__button">"Google Search"</button>
                <button class="search-box__button">"I'm Feeling Lucky"</button>
            </div>
        </div>
    }
}
