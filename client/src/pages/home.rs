//! The search homepage: header, logo, search box, footer.

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header, logo_section::LogoSection, search_box::SearchBox};

/// Full-viewport column of header, main content, and footer.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Header/>
            <main class="home__main">
                <LogoSection/>
                <SearchBox/>
            </main>
            <Footer/>
        </div>
    }
}
