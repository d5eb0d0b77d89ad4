//! Backend health state and the status-chip presentation helpers.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::types::BackendHealth;

/// Latest health snapshot, or `None` before the first check resolves.
#[derive(Clone, Debug, Default)]
pub struct HealthState {
    pub current: Option<BackendHealth>,
}

impl HealthState {
    pub fn update(&mut self, health: BackendHealth) {
        self.current = Some(health);
    }
}

/// Visual tone of the status chip, used as a CSS class modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipTone {
    Ok,
    Warn,
    Unknown,
}

impl ChipTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Ok => "health-chip health-chip--ok",
            Self::Warn => "health-chip health-chip--warn",
            Self::Unknown => "health-chip health-chip--unknown",
        }
    }
}

/// Chip tone for a health snapshot: green only when the service is healthy
/// AND a model is loaded, amber for any degraded condition.
pub fn chip_tone(state: &HealthState) -> ChipTone {
    match &state.current {
        None => ChipTone::Unknown,
        Some(h) if h.is_healthy() && h.model_loaded => ChipTone::Ok,
        Some(_) => ChipTone::Warn,
    }
}

/// Chip text for a health snapshot.
pub fn chip_label(state: &HealthState) -> String {
    match &state.current {
        None => "Checking backend...".to_owned(),
        Some(h) if h.is_healthy() => format!(
            "Model: {} | Aesthetic Scorer: {}",
            if h.model_loaded { "Loaded" } else { "Not Loaded" },
            if h.aesthetic_scorer {
                "Ready"
            } else {
                "Not Available"
            }
        ),
        Some(_) => "Backend Error".to_owned(),
    }
}
