//! Timed, non-interactive splash intro shown before the shell mounts.
//!
//! The stage reveals are driven by CSS animation delays; dismissal timing
//! lives in `app.rs` so the splash itself stays purely presentational.

use leptos::prelude::*;

use crate::components::logo::DdpoLogo;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash__stage splash__stage--logo">
                <DdpoLogo size=96/>
            </div>
            <h1 class="splash__stage splash__stage--title">"DDPO Studio"</h1>
            <p class="splash__stage splash__stage--tagline">
                "Denoising Diffusion Policy Optimization"
            </p>
            <div class="splash__stage splash__stage--bar">
                <span class="splash__bar-fill"></span>
            </div>
        </div>
    }
}
