//! Animated DDPO mark: a central node with orbiting diffusion particles.
//!
//! The animation is pure CSS; this component only lays out the elements.

use leptos::prelude::*;

#[component]
pub fn DdpoLogo(#[prop(default = 40)] size: u32, #[prop(default = true)] animated: bool) -> impl IntoView {
    let style = format!("width:{size}px;height:{size}px");
    let class = if animated {
        "ddpo-logo ddpo-logo--animated"
    } else {
        "ddpo-logo"
    };

    view! {
        <span class=class style=style aria-hidden="true">
            <span class="ddpo-logo__core"></span>
            <span class="ddpo-logo__orbit ddpo-logo__orbit--a">
                <span class="ddpo-logo__particle"></span>
                <span class="ddpo-logo__particle ddpo-logo__particle--alt"></span>
            </span>
            <span class="ddpo-logo__orbit ddpo-logo__orbit--b">
                <span class="ddpo-logo__particle"></span>
                <span class="ddpo-logo__particle ddpo-logo__particle--alt"></span>
            </span>
            <span class="ddpo-logo__orbit ddpo-logo__orbit--c">
                <span class="ddpo-logo__particle"></span>
            </span>
        </span>
    }
}
