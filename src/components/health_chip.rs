//! Backend status chip plus the one-shot health refresh helper.

use leptos::prelude::*;

use crate::state::health::{HealthState, chip_label, chip_tone};

/// Small chip summarizing service health: model loaded, scorer available,
/// or a degraded/error indicator. Never blocks any interaction.
#[component]
pub fn HealthChip() -> impl IntoView {
    let health = expect_context::<RwSignal<HealthState>>();

    let class = move || health.with(|h| chip_tone(h).css_class());
    let label = move || health.with(chip_label);

    view! {
        <span class=class>
            <span class="health-chip__dot"></span>
            {label}
        </span>
    }
}

/// Re-check health once in the background, updating the shared snapshot.
/// Used after a successful generation or a checkpoint-load transition.
#[cfg(feature = "csr")]
pub fn refresh_health_once(health: RwSignal<HealthState>) {
    leptos::task::spawn_local(async move {
        let snapshot = crate::net::api::check_health().await;
        let _ = health.try_update(|h| h.update(snapshot));
    });
}
