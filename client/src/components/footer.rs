//! Bottom link bar.

use leptos::prelude::*;

const LEFT_LINKS: [&str; 4] = ["Advertising", "Business", "About", "How Search works"];
const RIGHT_LINKS: [&str; 3] = ["Privacy", "Terms", "Settings"];

fn links(labels: &'static [&'static str]) -> impl IntoView {
    labels
        .iter()
        .map(|label| view! { <a href="#" class="footer__link">{*label}</a> })
        .collect_view()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__bar">
                <div class="footer__group">{links(&LEFT_LINKS)}</div>
                <div class="footer__group">{links(&RIGHT_LINKS)}</div>
            </div>
        </footer>
    }
}
