//! Top navigation bar with the logo and route links.

use leptos::prelude::*;

use crate::components::logo::DdpoLogo;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">
                <DdpoLogo size=28/>
                <span class="nav-bar__title">"DDPO Studio"</span>
            </a>
            <nav class="nav-bar__links">
                <a href="/" class="nav-bar__link">"Home"</a>
                <a href="/inference" class="nav-bar__link">"Generate"</a>
                <a href="/about" class="nav-bar__link">"About"</a>
            </nav>
        </header>
    }
}
