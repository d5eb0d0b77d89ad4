//! Toggleable generation-history panel backed by the persisted list.

use leptos::prelude::*;

use crate::state::history::HistoryState;
use crate::state::session::SessionState;
use crate::storage::{HistoryStore, LocalHistoryStore};
use crate::util::format::image_src;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let history = expect_context::<RwSignal<HistoryState>>();

    let visible = move || history.with(|h| h.visible);
    let entry_count = move || history.with(|h| h.entries.len());

    let on_toggle = move |_| history.update(HistoryState::toggle_visible);

    let on_clear = move |_| {
        history.update(HistoryState::clear);
        LocalHistoryStore.clear();
    };

    view! {
        <section class="history-panel">
            <button class="btn history-panel__toggle" on:click=on_toggle>
                {move || {
                    if visible() {
                        "Hide History".to_owned()
                    } else {
                        format!("Show History ({})", entry_count())
                    }
                }}
            </button>

            <Show when=visible>
                <div class="history-panel__body">
                    <header class="history-panel__header">
                        <h2 class="history-panel__heading">"Generation History"</h2>
                        <Show when=move || { entry_count() > 0 }>
                            <button class="btn btn--danger history-panel__clear" on:click=on_clear>
                                "Clear All"
                            </button>
                        </Show>
                    </header>

                    <Show
                        when=move || { entry_count() > 0 }
                        fallback=|| {
                            view! { <p class="history-panel__empty">"No generations yet."</p> }
                        }
                    >
                        <ul class="history-panel__list">
                            {move || {
                                history
                                    .with(|h| h.entries.clone())
                                    .into_iter()
                                    .map(|entry| {
                                        let prompt_for_restore = entry.prompt.clone();
                                        let thumb = entry.images.first().map(|i| image_src(i));
                                        view! {
                                            <li class="history-panel__entry">
                                                <p class="history-panel__timestamp">
                                                    {entry.timestamp.clone()}
                                                </p>
                                                <p class="history-panel__prompt">{entry.prompt.clone()}</p>
                                                <p class="history-panel__detail">
                                                    {format!("{} \u{b7} seed {}", entry.model, entry.seed)}
                                                </p>
                                                {thumb.map(|src| {
                                                    view! {
                                                        <img
                                                            class="history-panel__thumb"
                                                            src=src
                                                            alt=entry.prompt.clone()
                                                        />
                                                    }
                                                })}
                                                <button
                                                    class="btn history-panel__reuse"
                                                    on:click=move |_| {
                                                        let prompt = prompt_for_restore.clone();
                                                        session.update(|s| s.prompt = prompt);
                                                    }
                                                >
                                                    "Use Prompt"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </section>
    }
}
