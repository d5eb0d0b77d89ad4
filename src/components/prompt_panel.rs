//! Prompt editing and the generate action.
//!
//! Submitting issues one `/generate` request and starts a 100 ms cosmetic
//! elapsed-time ticker that stops as soon as the request settles. The
//! submit button is disabled while a generation or checkpoint load is
//! pending, which is the only concurrency guard the session needs.

use leptos::prelude::*;

use crate::state::session::{PRESET_PROMPTS, Phase, SessionState};
use crate::util::format::{format_elapsed, preset_label};

#[cfg(feature = "csr")]
use crate::components::health_chip::refresh_health_once;
#[cfg(feature = "csr")]
use crate::state::health::HealthState;
#[cfg(feature = "csr")]
use crate::state::history::HistoryState;
#[cfg(feature = "csr")]
use crate::storage::{HistoryStore, LocalHistoryStore};

#[component]
pub fn PromptPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "csr")]
    let health = expect_context::<RwSignal<HealthState>>();
    #[cfg(feature = "csr")]
    let history = expect_context::<RwSignal<HistoryState>>();

    let generating = move || session.with(|s| s.phase == Phase::Generating);
    let submit_disabled =
        move || session.with(|s| s.is_busy() || s.prompt.trim().is_empty());

    let on_generate = move |_| {
        #[cfg(feature = "csr")]
        {
            let now = crate::util::time::now_ms();
            let Some(request) = session.try_update(|s| s.begin_generate(now)).flatten() else {
                return;
            };

            // Cosmetic elapsed readout, sampled at 100 ms until settle.
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                    let still = session.try_with_untracked(|s| s.phase == Phase::Generating);
                    if still != Some(true) {
                        break;
                    }
                    session.update(|s| s.tick(crate::util::time::now_ms()));
                }
            });

            leptos::task::spawn_local(async move {
                match crate::net::api::generate(&request).await {
                    Ok(response) => {
                        let settled = crate::util::time::now_ms();
                        let id = crate::util::time::entry_id(settled);
                        let timestamp = crate::util::time::iso_now();
                        let mut entry = None;
                        session.update(|s| {
                            entry = Some(s.finish_generate(response, id, timestamp));
                        });
                        if let Some(entry) = entry {
                            history.update(|h| h.prepend(entry));
                            history.with_untracked(|h| LocalHistoryStore.save(&h.entries));
                        }
                        refresh_health_once(health);
                    }
                    Err(msg) => {
                        leptos::logging::warn!("generation failed: {msg}");
                        session.update(|s| s.fail_generate(msg));
                    }
                }
            });
        }
    };

    view! {
        <section class="prompt-panel">
            <h2 class="prompt-panel__heading">"Prompt"</h2>

            <label class="prompt-panel__field">
                "Describe your image"
                <textarea
                    class="prompt-panel__input"
                    rows="3"
                    placeholder="A beautiful landscape with mountains and lakes..."
                    prop:value=move || session.with(|s| s.prompt.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        session.update(|s| s.prompt = text);
                    }
                ></textarea>
            </label>

            <div class="prompt-panel__presets">
                <span class="prompt-panel__presets-label">"Quick Presets:"</span>
                {PRESET_PROMPTS
                    .iter()
                    .map(|preset| {
                        view! {
                            <button
                                class="chip chip--preset"
                                on:click=move |_| {
                                    session.update(|s| s.prompt = (*preset).to_owned());
                                }
                            >
                                {preset_label(preset)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <label class="prompt-panel__field">
                "Negative Prompt (Optional)"
                <textarea
                    class="prompt-panel__input"
                    rows="2"
                    placeholder="low quality, blurry, distorted..."
                    prop:value=move || session.with(|s| s.negative_prompt.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        session.update(|s| s.negative_prompt = text);
                    }
                ></textarea>
            </label>

            <button
                class="btn btn--primary prompt-panel__submit"
                disabled=submit_disabled
                on:click=on_generate
            >
                {move || {
                    if generating() {
                        session.with(|s| format!("Generating... {}", format_elapsed(s.elapsed_ms)))
                    } else {
                        "Generate Image".to_owned()
                    }
                }}
            </button>
        </section>
    }
}
