//! Generated-image gallery: result grid, per-image actions, and the
//! metadata strip for the most recent generation.

use leptos::prelude::*;

use crate::components::logo::DdpoLogo;
use crate::state::session::{Phase, SessionState};
use crate::util::format::{image_src, scores_summary, settings_summary};

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Trigger a browser download of one image via a temporary anchor element.
#[cfg(feature = "csr")]
fn save_image(src: &str, index: usize) {
    use crate::util::format::download_name;
    use crate::util::time::{entry_id, now_ms};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(src);
    anchor.set_download(&download_name(entry_id(now_ms()), index));
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

#[cfg(feature = "csr")]
fn open_fullscreen(src: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(src, "_blank");
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let generating = move || session.with(|s| s.phase == Phase::Generating);
    let image_count = move || session.with(|s| s.images.len());

    let on_save_all = move |_| {
        #[cfg(feature = "csr")]
        {
            let images = session.with_untracked(|s| s.images.clone());
            // Stagger downloads so the browser doesn't drop any.
            leptos::task::spawn_local(async move {
                for (index, image) in images.iter().enumerate() {
                    save_image(&image_src(image), index);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                }
            });
        }
    };

    view! {
        <section class="gallery">
            <header class="gallery__header">
                <h2 class="gallery__heading">"Generated Images"</h2>
                <Show when=move || { image_count() > 0 }>
                    <span class="chip chip--count">
                        {move || format!("{} images", image_count())}
                    </span>
                </Show>
                <span class="gallery__spacer"></span>
                <Show when=move || { image_count() > 1 }>
                    <button class="btn gallery__save-all" on:click=on_save_all>
                        "Save All"
                    </button>
                </Show>
            </header>

            <div class="gallery__content">
                {move || {
                    if generating() {
                        view! {
                            <div class="gallery__placeholder gallery__placeholder--busy">
                                <DdpoLogo size=60/>
                                <p class="gallery__placeholder-title">"Generating your image..."</p>
                                <p class="gallery__placeholder-hint">"This may take a few moments"</p>
                            </div>
                        }
                            .into_any()
                    } else if image_count() == 0 {
                        view! {
                            <div class="gallery__placeholder gallery__placeholder--empty">
                                <p>"Your generated images will appear here"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="gallery__grid">
                                {session
                                    .with(|s| s.images.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, image)| {
                                        let src = image_src(&image);
                                        let src_for_view = src.clone();
                                        let src_for_save = src.clone();
                                        view! {
                                            <figure class="gallery__card">
                                                <img
                                                    class="gallery__image"
                                                    src=src
                                                    alt=format!("Generated {}", index + 1)
                                                    on:click=move |_| {
                                                        #[cfg(feature = "csr")]
                                                        open_fullscreen(&src_for_view);
                                                        #[cfg(not(feature = "csr"))]
                                                        let _ = &src_for_view;
                                                    }
                                                />
                                                <figcaption class="gallery__actions">
                                                    <button
                                                        class="btn btn--icon"
                                                        title="Save Image"
                                                        on:click=move |_| {
                                                            #[cfg(feature = "csr")]
                                                            save_image(&src_for_save, index);
                                                            #[cfg(not(feature = "csr"))]
                                                            let _ = (&src_for_save, index);
                                                        }
                                                    >
                                                        "\u{2b07}"
                                                    </button>
                                                    <button
                                                        class="btn btn--icon btn--danger"
                                                        title="Delete Image"
                                                        on:click=move |_| {
                                                            session.update(|s| s.remove_image(index));
                                                        }
                                                    >
                                                        "\u{2715}"
                                                    </button>
                                                </figcaption>
                                            </figure>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || session.with(|s| !s.images.is_empty() && s.last_metadata.is_some())>
                {move || {
                    session.with(|s| {
                        s.last_metadata.as_ref().map(|meta| {
                            let scores = meta
                                .aesthetic_scores
                                .as_ref()
                                .filter(|scores| !scores.is_empty())
                                .map(|scores| {
                                    format!("Aesthetic Scores: {}", scores_summary(scores))
                                });
                            view! {
                                <div class="gallery__meta">
                                    <p class="gallery__meta-line">
                                        <strong>"Prompt: "</strong>
                                        {meta.prompt.clone()}
                                    </p>
                                    <p class="gallery__meta-line">
                                        <strong>"Settings: "</strong>
                                        {settings_summary(meta)}
                                    </p>
                                    {scores.map(|line| {
                                        view! { <p class="gallery__meta-line">{line}</p> }
                                    })}
                                </div>
                            }
                        })
                    })
                }}
            </Show>
        </section>
    }
}
