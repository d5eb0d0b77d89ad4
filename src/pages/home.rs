//! Landing page introducing the DDPO demo.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">
                "Denoising Diffusion" <br/> "Policy Optimization"
            </h1>
            <div class="home-page__copy">
                <p>
                    "The paper "
                    <em>"\"Training Diffusion Models with Reinforcement Learning\""</em>
                    " introduces an approach to fine-tuning diffusion models with \
                     reinforcement learning, framing the denoising process as a \
                     multi-step decision-making task."
                </p>
                <p>
                    "This interactive demo runs prompts against DDPO-tuned checkpoints \
                     optimized for objectives such as aesthetic quality, \
                     compressibility, and prompt-image alignment."
                </p>
            </div>
            <div class="home-page__actions">
                <a href="/inference" class="btn btn--primary home-page__cta">
                    "Try Our Model"
                </a>
                <a href="/about" class="btn home-page__secondary">
                    "About Us"
                </a>
            </div>
        </div>
    }
}
