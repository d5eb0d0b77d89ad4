//! About page: project summary and a mailto-based contact form.

use leptos::prelude::*;

use crate::util::mailto::contact_mailto;

#[component]
pub fn AboutPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let url = contact_mailto(&name.get(), &email.get(), &subject.get(), &message.get());
        #[cfg(feature = "csr")]
        {
            // Hand off to the default mail client.
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    };

    view! {
        <div class="about-page">
            <h1 class="about-page__title">"About This Demo"</h1>
            <div class="about-page__copy">
                <p>
                    "DDPO Studio is the front end of a student project exploring \
                     Denoising Diffusion Policy Optimization: fine-tuning diffusion \
                     models with policy-gradient reinforcement learning against \
                     reward signals such as aesthetic quality."
                </p>
                <p>
                    "Everything computational happens on the inference server; this \
                     client only shapes requests, shows results, and keeps your \
                     generation history in the browser."
                </p>
            </div>

            <form class="about-page__contact" on:submit=on_submit>
                <h2 class="about-page__subtitle">"Get in Touch"</h2>
                <label class="about-page__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="about-page__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="about-page__field">
                    "Subject"
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="about-page__field">
                    "Message"
                    <textarea
                        rows="4"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="btn btn--primary">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
