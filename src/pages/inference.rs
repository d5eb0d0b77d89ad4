//! Inference workspace: parameters and prompt on the left, gallery and
//! history on the right.
//!
//! On mount this page fetches the checkpoint list once and starts the
//! 10-second health poll. The poll is an explicit async loop whose liveness
//! flag is a signal owned by this component: unmounting disposes the flag,
//! the next loop iteration observes that, and the timer dies with the view.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::health_chip::HealthChip;
use crate::components::history_panel::HistoryPanel;
use crate::components::logo::DdpoLogo;
use crate::components::parameter_panel::ParameterPanel;
use crate::components::prompt_panel::PromptPanel;
use crate::state::session::SessionState;

#[cfg(feature = "csr")]
use crate::state::health::HealthState;

/// Cadence of the background health poll.
#[cfg(feature = "csr")]
const HEALTH_POLL_SECS: u64 = 10;

#[component]
pub fn InferencePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "csr")]
    {
        let health = expect_context::<RwSignal<HealthState>>();

        let alive = RwSignal::new(true);
        on_cleanup(move || alive.set(false));

        // Checkpoint list: fetched once; failure just leaves the built-ins.
        leptos::task::spawn_local(async move {
            let listed = crate::net::api::list_checkpoints().await;
            let _ = session.try_update(|s| s.set_listed_checkpoints(listed));
        });

        // Health poll: immediately on mount, then every HEALTH_POLL_SECS.
        leptos::task::spawn_local(async move {
            loop {
                let snapshot = crate::net::api::check_health().await;
                if health.try_update(|h| h.update(snapshot)).is_none() {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_secs(HEALTH_POLL_SECS))
                    .await;
                if alive.try_get_untracked() != Some(true) {
                    break;
                }
            }
        });
    }

    let error = move || session.with(|s| s.error.clone());

    view! {
        <div class="inference-page">
            <header class="inference-page__header">
                <div class="inference-page__brand">
                    <DdpoLogo size=40/>
                    <h1 class="inference-page__title">"Generation Studio"</h1>
                </div>
                <p class="inference-page__subtitle">
                    "Create stunning images with advanced DDPO technology"
                </p>
                <HealthChip/>
            </header>

            {move || {
                error()
                    .map(|message| {
                        view! {
                            <div class="alert alert--error" role="alert">
                                <span class="alert__message">{message}</span>
                                <button
                                    class="alert__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| session.update(SessionState::dismiss_error)
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
            }}

            <div class="inference-page__columns">
                <div class="inference-page__controls">
                    <ParameterPanel/>
                    <PromptPanel/>
                </div>
                <div class="inference-page__results">
                    <Gallery/>
                    <HistoryPanel/>
                </div>
            </div>
        </div>
    }
}
