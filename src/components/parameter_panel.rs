//! Generation parameter controls: checkpoint, sampling, dimensions, batch,
//! guidance, and seed.
//!
//! Changing the checkpoint kicks off a service-side model swap: one POST
//! that runs to completion plus a 500 ms progress poll that lives only
//! while the swap is in flight. Neither is cancellable client-side; both
//! re-check the loading phase before touching state.

use leptos::prelude::*;

use crate::state::session::{Phase, RANDOM_SEED, SAMPLING_METHODS, SessionState};

#[cfg(feature = "csr")]
use crate::components::health_chip::refresh_health_once;
#[cfg(feature = "csr")]
use crate::net::types::LoadStatus;
#[cfg(feature = "csr")]
use crate::state::health::HealthState;

#[component]
pub fn ParameterPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "csr")]
    let health = expect_context::<RwSignal<HealthState>>();

    let busy = move || session.with(SessionState::is_busy);
    let loading = move || session.with(|s| s.phase == Phase::CheckpointLoading);

    let on_checkpoint_change = move |ev: leptos::ev::Event| {
        let requested = event_target_value(&ev);
        #[cfg(feature = "csr")]
        {
            let started = session
                .try_update(|s| s.begin_checkpoint_load(&requested))
                .unwrap_or(false);
            if !started {
                return;
            }

            // Swap request: runs to completion, no client-side cancellation.
            let requested_for_load = requested.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::load_checkpoint(&requested_for_load).await {
                    Ok(()) => session.update(SessionState::finish_checkpoint_load),
                    Err(msg) => {
                        leptos::logging::warn!("checkpoint load failed: {msg}");
                        session.update(|s| s.fail_checkpoint_load(msg));
                    }
                }
                refresh_health_once(health);
            });

            // Progress poll: 500 ms cadence, only while the swap is in flight.
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(500)).await;
                    let still_loading = session
                        .try_with_untracked(|s| s.phase == Phase::CheckpointLoading);
                    if still_loading != Some(true) {
                        break;
                    }
                    match crate::net::api::loading_progress().await {
                        Ok(progress) => {
                            let status = progress.status;
                            let message = progress.message.clone();
                            session.update(|s| s.apply_load_progress(progress));
                            match status {
                                LoadStatus::InProgress => {}
                                LoadStatus::Completed => {
                                    session.update(SessionState::finish_checkpoint_load);
                                    refresh_health_once(health);
                                    break;
                                }
                                LoadStatus::Error => {
                                    session.update(|s| s.fail_checkpoint_load(message));
                                    refresh_health_once(health);
                                    break;
                                }
                            }
                        }
                        Err(msg) => {
                            session.update(|s| s.fail_checkpoint_load(msg));
                            refresh_health_once(health);
                            break;
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = requested;
        }
    };

    let on_random_seed = move |_| {
        #[cfg(feature = "csr")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let seed = (js_sys::Math::random() * 1e9) as i64;
            session.update(|s| s.params.seed = seed);
        }
    };

    view! {
        <section class="param-panel">
            <h2 class="param-panel__heading">"Parameters"</h2>

            <label class="param-panel__field">
                "Model Checkpoint"
                <select
                    class="param-panel__select"
                    prop:value=move || session.with(|s| s.params.checkpoint.clone())
                    disabled=busy
                    on:change=on_checkpoint_change
                >
                    {move || {
                        session
                            .with(|s| s.all_checkpoints())
                            .into_iter()
                            .map(|cp| view! { <option value=cp.path>{cp.name}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <Show when=loading>
                <div class="param-panel__progress">
                    {move || {
                        session.with(|s| {
                            s.load_progress.as_ref().map_or_else(
                                || "Loading checkpoint...".to_owned(),
                                |p| format!("{:.0}% \u{b7} {}", p.progress, p.message),
                            )
                        })
                    }}
                </div>
            </Show>

            <label class="param-panel__field">
                "Sampling Method"
                <select
                    class="param-panel__select"
                    prop:value=move || session.with(|s| s.params.sampling_method.clone())
                    on:change=move |ev| {
                        let method = event_target_value(&ev);
                        session.update(|s| s.params.sampling_method = method);
                    }
                >
                    {SAMPLING_METHODS
                        .iter()
                        .map(|m| view! { <option value=*m>{*m}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="param-panel__field">
                <span class="param-panel__slider-label">
                    "Sampling Steps"
                    <span class="param-panel__value">
                        {move || session.with(|s| s.params.sampling_steps)}
                    </span>
                </span>
                <input
                    type="range"
                    min="1"
                    max="100"
                    prop:value=move || session.with(|s| s.params.sampling_steps.to_string())
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                            session.update(|s| s.params.sampling_steps = v);
                        }
                    }
                />
            </label>

            <div class="param-panel__row">
                <label class="param-panel__field">
                    <span class="param-panel__slider-label">
                        "Width"
                        <span class="param-panel__value">
                            {move || session.with(|s| s.params.width)}
                        </span>
                    </span>
                    <input
                        type="range"
                        min="256"
                        max="1024"
                        step="64"
                        prop:value=move || session.with(|s| s.params.width.to_string())
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                session.update(|s| s.params.width = v);
                            }
                        }
                    />
                </label>
                <label class="param-panel__field">
                    <span class="param-panel__slider-label">
                        "Height"
                        <span class="param-panel__value">
                            {move || session.with(|s| s.params.height)}
                        </span>
                    </span>
                    <input
                        type="range"
                        min="256"
                        max="1024"
                        step="64"
                        prop:value=move || session.with(|s| s.params.height.to_string())
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                session.update(|s| s.params.height = v);
                            }
                        }
                    />
                </label>
            </div>

            <div class="param-panel__row">
                <label class="param-panel__field">
                    "Batch Count"
                    <input
                        type="number"
                        min="1"
                        max="8"
                        prop:value=move || session.with(|s| s.params.batch_count.to_string())
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                session.update(|s| s.params.batch_count = v.clamp(1, 8));
                            }
                        }
                    />
                </label>
                <label class="param-panel__field">
                    "Batch Size"
                    <input
                        type="number"
                        min="1"
                        max="4"
                        prop:value=move || session.with(|s| s.params.batch_size.to_string())
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                session.update(|s| s.params.batch_size = v.clamp(1, 4));
                            }
                        }
                    />
                </label>
            </div>

            <label class="param-panel__field">
                <span class="param-panel__slider-label">
                    "CFG Scale"
                    <span class="param-panel__value">
                        {move || session.with(|s| s.params.cfg_scale)}
                    </span>
                </span>
                <input
                    type="range"
                    min="1"
                    max="20"
                    step="0.5"
                    prop:value=move || session.with(|s| s.params.cfg_scale.to_string())
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            session.update(|s| s.params.cfg_scale = v);
                        }
                    }
                />
            </label>

            <div class="param-panel__row param-panel__row--seed">
                <label class="param-panel__field">
                    "Seed"
                    <input
                        type="number"
                        placeholder="Random"
                        prop:value=move || session.with(|s| s.params.seed.to_string())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            // Empty input means "let the service pick".
                            let seed = if raw.trim().is_empty() {
                                RANDOM_SEED
                            } else {
                                match raw.trim().parse::<i64>() {
                                    Ok(v) if v >= 0 => v,
                                    _ => RANDOM_SEED,
                                }
                            };
                            session.update(|s| s.params.seed = seed);
                        }
                    />
                </label>
                <button class="btn param-panel__dice" title="Random seed" on:click=on_random_seed>
                    "\u{1f3b2}"
                </button>
            </div>
        </section>
    }
}
