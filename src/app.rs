//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::splash::SplashScreen;
use crate::pages::{about::AboutPage, home::HomePage, inference::InferencePage};
use crate::state::{health::HealthState, history::HistoryState, session::SessionState};
use crate::storage::{HistoryStore, LocalHistoryStore};

/// How long the splash intro stays up before the shell mounts.
pub const SPLASH_DURATION_MS: u64 = 2800;

/// Root application component.
///
/// Provides the shared state contexts, loads persisted history once, shows
/// the timed splash, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let health = RwSignal::new(HealthState::default());
    let history = RwSignal::new(HistoryState::from_entries(LocalHistoryStore.load()));

    provide_context(session);
    provide_context(health);
    provide_context(history);

    let splash_done = RwSignal::new(false);
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SPLASH_DURATION_MS)).await;
            splash_done.set(true);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        splash_done.set(true);
    }

    view! {
        <Title text="DDPO Studio"/>

        <Show when=move || splash_done.get() fallback=|| view! { <SplashScreen/> }>
            <Router>
                <div class="shell">
                    <NavBar/>
                    <main class="shell__main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("inference") view=InferencePage/>
                            <Route path=StaticSegment("about") view=AboutPage/>
                        </Routes>
                    </main>
                </div>
            </Router>
        </Show>
    }
}
